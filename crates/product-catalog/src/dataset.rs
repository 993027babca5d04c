//! Dataset document loading.
//!
//! A dataset is a versioned JSON document holding the three flat catalog
//! collections. Referential integrity and id uniqueness are not checked:
//! seed data is assumed to be well formed, and dangling references simply
//! resolve to `None` during enrichment.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::Deserialize;
use tracing::info;

use crate::error::DatasetError;
use crate::model::{Category, Product, User};

/// Current supported dataset version.
const SUPPORTED_VERSION: u32 = 1;

/// Default dataset compiled into the crate.
const EMBEDDED_DATASET: &str = include_str!("../fixtures/catalog.json");

/// The users, categories and products a catalog is built from.
///
/// # Example
///
/// ```
/// use product_catalog::Dataset;
///
/// let json = r#"{
///     "version": 1,
///     "users": [{"id": 1, "name": "Roma", "sex": "m"}],
///     "categories": [{"id": 1, "title": "Drinks", "icon": "🍺", "ownerId": 1}],
///     "products": [{"id": 1, "name": "Milk", "categoryId": 1}]
/// }"#;
///
/// let dataset = Dataset::from_json(json).expect("valid dataset");
/// assert_eq!(dataset.products().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    version: u32,
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Dataset {
    /// Builds a dataset from in-memory collections.
    #[must_use]
    pub const fn new(users: Vec<User>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            version: SUPPORTED_VERSION,
            users,
            categories,
            products,
        }
    }

    /// Parses a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if:
    /// - The JSON is malformed
    /// - Required fields are missing
    /// - The version is unsupported
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(json).map_err(|e| DatasetError::Parse {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    /// Loads a dataset file relative to a capability-scoped directory.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, DatasetError> {
        let contents = dir.read_to_string(path).map_err(|e| DatasetError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let dataset = Self::from_json(&contents)?;
        info!(
            path = %path,
            users = dataset.users.len(),
            categories = dataset.categories.len(),
            products = dataset.products.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Opens the parent directory of `path` and loads the dataset file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] if the path has no file name or the
    /// directory cannot be opened, and any error from [`Self::from_file`].
    pub fn open(path: &Utf8Path) -> Result<Self, DatasetError> {
        let file_name = path.file_name().ok_or_else(|| DatasetError::Io {
            path: path.to_path_buf(),
            message: "dataset path must be a file".to_owned(),
        })?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|e| {
            DatasetError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?;

        Self::from_file(&dir, Utf8Path::new(file_name))
    }

    /// Returns the dataset compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the embedded document fails to parse.
    pub fn embedded() -> Result<Self, DatasetError> {
        Self::from_json(EMBEDDED_DATASET)
    }

    fn from_raw(raw: RawDataset) -> Result<Self, DatasetError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(DatasetError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        Ok(Self {
            version: raw.version,
            users: raw.users,
            categories: raw.categories,
            products: raw.products,
        })
    }

    /// Returns the dataset version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns all users in dataset order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns all categories in dataset order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Returns all products in dataset order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
struct RawDataset {
    version: u32,
    users: Vec<User>,
    categories: Vec<Category>,
    products: Vec<Product>,
}
