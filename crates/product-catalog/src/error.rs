//! Error types for the product-catalog crate.
//!
//! Lookup misses during enrichment and filtering are modelled as `None`, so
//! the only fallible surfaces are dataset loading and sort-order parsing.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a catalog dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file at '{path}': {message}")]
    Io {
        /// Path to the dataset file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The dataset JSON is malformed or missing required fields.
    #[error("invalid dataset JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },

    /// The dataset version is not supported.
    #[error("unsupported dataset version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the dataset.
        actual: u32,
    },
}

/// Errors that can occur when parsing a sort order such as `user:desc`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortParseError {
    /// The column name is not one of `id`, `product`, `category`, `user`.
    #[error("unknown sort column '{value}' (expected id, product, category or user)")]
    UnknownColumn {
        /// The column name that was not recognised.
        value: String,
    },

    /// The direction suffix is not `asc` or `desc`.
    #[error("unknown sort direction '{value}' (expected asc or desc)")]
    UnknownDirection {
        /// The direction that was not recognised.
        value: String,
    },
}
