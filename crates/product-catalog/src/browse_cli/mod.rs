//! CLI support for the catalog browser.
//!
//! The `catalog-browse` binary delegates to these helpers so argument
//! handling and rendering can be exercised without spawning a process.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use thiserror::Error;

use crate::catalog::{Catalog, FilterEvent};
use crate::config::CatalogSettings;
use crate::dataset::Dataset;
use crate::error::DatasetError;
use crate::model::{CategoryId, UserId};
use crate::render::render_table;
use crate::sort::SortOrder;
use crate::view::CatalogView;

/// Command-line flags for `catalog-browse`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "catalog-browse",
    about = "Filter the product catalog and print it as a table"
)]
pub struct BrowseArgs {
    /// Dataset JSON file; overrides `CATALOG_DATASET_PATH`.
    #[arg(long, value_name = "PATH")]
    pub dataset: Option<Utf8PathBuf>,
    /// Show only products whose category is owned by this user id.
    #[arg(long, value_name = "ID")]
    pub user: Option<u32>,
    /// Case-insensitive text matched against product, category and owner names.
    #[arg(long, value_name = "TEXT")]
    pub query: Option<String>,
    /// Category id to include; repeat to include several. Duplicates count once.
    #[arg(long = "category", value_name = "ID")]
    pub categories: Vec<u32>,
    /// Sort column with optional direction, for example `user:desc`.
    #[arg(long, value_name = "COLUMN[:asc|desc]")]
    pub sort: Option<SortOrder>,
}

impl BrowseArgs {
    /// Translates the flags into the interactions a view would emit.
    ///
    /// # Example
    ///
    /// ```
    /// use clap::Parser;
    /// use product_catalog::browse_cli::BrowseArgs;
    /// use product_catalog::{CategoryId, FilterEvent};
    ///
    /// let args = BrowseArgs::parse_from(["catalog-browse", "--category", "2"]);
    ///
    /// assert_eq!(args.events(), vec![FilterEvent::ToggleCategory(CategoryId::new(2))]);
    /// ```
    #[must_use]
    pub fn events(&self) -> Vec<FilterEvent> {
        let user = self
            .user
            .map(|id| FilterEvent::SelectUser(UserId::new(id)));
        let query = self
            .query
            .as_ref()
            .filter(|query| !query.is_empty())
            .map(|query| FilterEvent::SetSearchQuery(query.clone()));
        // Each id toggles once; a repeated id must not deselect itself.
        let categories = self
            .categories
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|id| FilterEvent::ToggleCategory(CategoryId::new(id)));
        let sort = self.sort.map(FilterEvent::SortBy);

        user.into_iter()
            .chain(query)
            .chain(categories)
            .chain(sort)
            .collect()
    }
}

/// Picks the dataset path: the `--dataset` flag, then the settings.
///
/// # Errors
///
/// Returns [`BrowseError::NonUtf8Path`] if the configured path is not UTF-8.
pub fn resolve_dataset_path(
    args: &BrowseArgs,
    settings: &CatalogSettings,
) -> Result<Option<Utf8PathBuf>, BrowseError> {
    if let Some(path) = &args.dataset {
        return Ok(Some(path.clone()));
    }
    settings
        .dataset_path()
        .map(|path| {
            Utf8PathBuf::from_path_buf(path.clone())
                .map_err(|path| BrowseError::NonUtf8Path { path })
        })
        .transpose()
}

/// Loads the dataset at `path`, or the embedded dataset when `path` is `None`.
///
/// # Errors
///
/// Returns [`BrowseError::Dataset`] if the dataset cannot be read or parsed.
pub fn load_dataset(path: Option<&Utf8Path>) -> Result<Dataset, BrowseError> {
    let dataset = match path {
        Some(path) => Dataset::open(path)?,
        None => Dataset::embedded()?,
    };
    Ok(dataset)
}

/// Builds a catalog, replays the flags against it and renders the result.
///
/// # Errors
///
/// Returns [`BrowseError`] if the dataset cannot be loaded or `out` fails.
pub fn browse(
    args: &BrowseArgs,
    settings: &CatalogSettings,
    out: impl Write,
) -> Result<CatalogView, BrowseError> {
    let path = resolve_dataset_path(args, settings)?;
    let dataset = load_dataset(path.as_deref())?;

    let mut catalog = Catalog::new(&dataset);
    catalog.apply_all(args.events());

    let view = catalog.view();
    render_table(&view, out).map_err(|err| BrowseError::Output {
        message: err.to_string(),
    })?;
    Ok(view)
}

/// Errors surfaced by the catalog browser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowseError {
    /// Settings could not be loaded.
    #[error("failed to load settings: {message}")]
    Settings {
        /// Description of the configuration error.
        message: String,
    },
    /// A configured dataset path is not valid UTF-8.
    #[error("dataset path is not valid UTF-8: {}", .path.display())]
    NonUtf8Path {
        /// The offending path.
        path: PathBuf,
    },
    /// The dataset could not be loaded.
    #[error("dataset error: {source}")]
    Dataset {
        /// Underlying dataset error.
        #[from]
        #[source]
        source: DatasetError,
    },
    /// The rendered table could not be written.
    #[error("failed to write output: {message}")]
    Output {
        /// Description of the write error.
        message: String,
    },
}

#[cfg(test)]
mod tests;
