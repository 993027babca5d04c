//! Catalog browser configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration values for the catalog browser.
///
/// Values come from `CATALOG_*` environment variables and configuration
/// files; command-line flags are parsed separately by the browser binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CATALOG")]
pub struct CatalogSettings {
    /// Dataset file to load instead of the embedded dataset.
    pub dataset_path: Option<PathBuf>,
    /// Emit logs as JSON lines.
    #[ortho_config(default = false)]
    pub log_json: bool,
}

impl CatalogSettings {
    /// Return the configured dataset path, if any.
    #[must_use]
    pub fn dataset_path(&self) -> Option<&PathBuf> {
        self.dataset_path.as_ref()
    }
}
