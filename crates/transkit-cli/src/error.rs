//! Errors of the pull command

use std::path::PathBuf;
use thiserror::Error;
use transkit_common::TransKitError;

/// Errors that can occur while pulling catalogs from the provider
#[derive(Error, Debug)]
pub enum PullError {
    /// No token in configuration or environment
    #[error("Missing TRANSLATIONS_PROVIDER_TOKEN. Set translations.provider.token or env var TRANSLATIONS_PROVIDER_TOKEN.")]
    MissingToken,

    /// No provider URL template configured
    #[error("Missing TRANSLATIONS_PROVIDER_URL_TEMPLATE. Set translations.provider.url_template or env var TRANSLATIONS_PROVIDER_URL_TEMPLATE.")]
    MissingUrlTemplate,

    /// Transport failure or non-success status
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body is not JSON
    #[error("Invalid JSON from server: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Response body is JSON but not an object
    #[error("Unexpected response type: {0} (expected object)")]
    UnexpectedPayload(&'static str),

    /// Writing a catalog file failed
    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Encoding a catalog failed
    #[error("Failed to encode catalog: {0}")]
    Encode(#[source] serde_json::Error),
}

impl From<PullError> for TransKitError {
    fn from(err: PullError) -> Self {
        match err {
            PullError::Request(source) => match source.status() {
                Some(status) => TransKitError::provider_with_status(source.to_string(), status.as_u16()),
                None => TransKitError::network_with_source("Provider request failed", source),
            },
            PullError::Write { source, .. } => TransKitError::Io(source),
            PullError::Encode(source) => TransKitError::Serialization(source),
            other => TransKitError::provider(other.to_string()),
        }
    }
}

/// Result type for the pull command
pub type PullResult<T> = Result<T, PullError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert!(PullError::MissingToken
            .to_string()
            .starts_with("Missing TRANSLATIONS_PROVIDER_TOKEN."));
        assert_eq!(
            PullError::UnexpectedPayload("array").to_string(),
            "Unexpected response type: array (expected object)"
        );
    }

    #[test]
    fn test_conversion_to_common_error() {
        let err: TransKitError = PullError::MissingUrlTemplate.into();
        assert!(matches!(err, TransKitError::Provider { status_code: None, .. }));

        let encode_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TransKitError = PullError::Encode(encode_error).into();
        assert!(err.to_string().starts_with("Serialization error: "));
    }
}
