//! Builder for loading the plan catalog.

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::Catalog;
use crate::error::{BookingError, Result};

const CATALOG_FILE: &str = "catalog.json";

/// Builder for creating a [`Catalog`] from the built-in tables or a file.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    catalog_path: Option<PathBuf>,
    skip_user_config: bool,
}

impl CatalogBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom catalog file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/upkeep/catalog.json` when that file exists, and the
    /// built-in catalog otherwise.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Ignores any catalog file in the user's config directory.
    pub fn builtin_only(mut self) -> Self {
        self.skip_user_config = true;
        self
    }

    /// Builds the configured catalog.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::FileSystem` if the catalog file cannot be read
    /// Returns `BookingError::Serialization` if it is not valid JSON
    /// Returns `BookingError::Catalog` if its tier tables are invalid
    pub fn build(self) -> Result<Catalog> {
        if let Some(path) = self.catalog_path {
            return Self::load(&path);
        }

        if !self.skip_user_config {
            if let Some(path) = Self::default_catalog_path() {
                return Self::load(&path);
            }
        }

        debug!("Using built-in plan catalog");
        Ok(Catalog::builtin())
    }

    fn load(path: &Path) -> Result<Catalog> {
        let json = std::fs::read_to_string(path).map_err(|e| BookingError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let catalog = Catalog::from_json(&json)?;
        info!(
            "Loaded {} plans from {}",
            catalog.plans().len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Returns the user catalog path following the XDG Base Directory
    /// specification, if such a file exists.
    fn default_catalog_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("upkeep").find_config_file(CATALOG_FILE)
    }
}
