//! Error types for the booking library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all catalog, pricing and booking operations.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Plan key that does not name any known plan
    #[error("Unknown plan '{key}'")]
    UnknownPlan { key: String },
    /// Catalog data that violates the tier table rules
    #[error("Catalog error: {message}")]
    Catalog { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> BookingError {
        BookingError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl BookingError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a catalog error with the given message.
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Returns true when the error was caused by caller input rather than by
    /// the environment (files, configuration).
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            BookingError::InvalidInput { .. } | BookingError::UnknownPlan { .. }
        )
    }
}

/// Result type alias for booking operations
pub type Result<T> = std::result::Result<T, BookingError>;
