//! Builder for creating and configuring Desk instances.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use tokio::task;

use super::Desk;
use crate::{
    catalog::CatalogBuilder,
    contact::{ContactForm, DEFAULT_DELAY},
    error::{BookingError, Result},
};

/// Builder for creating and configuring Desk instances.
#[derive(Debug, Clone)]
pub struct DeskBuilder {
    catalog_path: Option<PathBuf>,
    builtin_only: bool,
    contact_delay: Duration,
}

impl DeskBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            catalog_path: None,
            builtin_only: false,
            contact_delay: DEFAULT_DELAY,
        }
    }

    /// Sets a custom catalog file path.
    ///
    /// If not specified, uses `$XDG_CONFIG_HOME/upkeep/catalog.json` when it
    /// exists and the built-in catalog otherwise.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the built-in catalog even if a user catalog file exists.
    pub fn builtin_catalog(mut self) -> Self {
        self.builtin_only = true;
        self
    }

    /// Sets the contact form's artificial delay.
    pub fn with_contact_delay(mut self, delay: Duration) -> Self {
        self.contact_delay = delay;
        self
    }

    /// Builds the configured desk.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::FileSystem` if the catalog file cannot be read
    /// Returns `BookingError::Serialization` or `BookingError::Catalog` if the
    /// catalog file is invalid
    pub async fn build(self) -> Result<Desk> {
        let mut catalog_builder = CatalogBuilder::new().with_catalog_path(self.catalog_path);
        if self.builtin_only {
            catalog_builder = catalog_builder.builtin_only();
        }

        let catalog = task::spawn_blocking(move || catalog_builder.build())
            .await
            .map_err(|e| BookingError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        Ok(Desk::new(catalog, ContactForm::with_delay(self.contact_delay)))
    }
}

impl Default for DeskBuilder {
    fn default() -> Self {
        Self::new()
    }
}
