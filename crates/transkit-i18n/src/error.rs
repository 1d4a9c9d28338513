//! Error types for catalog operations

use std::path::PathBuf;
use thiserror::Error;
use transkit_common::TransKitError;

/// Errors that can occur while loading message catalogs
#[derive(Error, Debug)]
pub enum I18nError {
    /// The catalog file does not exist
    #[error("Catalog file not found: {path:?}")]
    CatalogNotFound { path: PathBuf },

    /// The catalog file could not be read
    #[error("Failed to read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog file is not valid JSON
    #[error("Failed to parse catalog file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The catalog file is JSON but not an object of messages
    #[error("Invalid catalog {path:?}: {reason}")]
    InvalidCatalog { path: PathBuf, reason: String },
}

impl I18nError {
    /// Whether the error means the catalog simply has not been pulled yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CatalogNotFound { .. })
    }
}

impl From<I18nError> for TransKitError {
    fn from(err: I18nError) -> Self {
        TransKitError::catalog_with_source(err.to_string(), err)
    }
}

/// Result type for catalog operations
pub type I18nResult<T> = Result<T, I18nError>;
