//! Application configuration structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use validator::Validate;

/// Header used by provider requests when none is configured
pub const DEFAULT_PROVIDER_AUTH_HEADER: &str = "Authorization";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Catalog, locale and provider settings
    pub translations: TranslationsConfig,

    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Translations configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TranslationsConfig {
    /// Directory holding `<domain>_<locale>.json` catalogs
    pub dir: PathBuf,

    /// Catalog domains loaded for every request
    #[validate(length(min = 1, message = "At least one domain must be supported"))]
    pub supported_domains: Vec<String>,

    /// Locales a request may select
    #[validate(length(min = 1, message = "At least one locale must be supported"))]
    pub supported_locales: Vec<String>,

    /// Locale used when the request selects none or an unsupported one
    #[validate(length(min = 1, message = "Fallback locale cannot be empty"))]
    pub fallback_locale: String,

    /// Request header carrying the selected locale
    #[validate(regex(path = "crate::validation::HEADER_NAME_REGEX", message = "Header must be a valid HTTP header name"))]
    pub header: String,

    /// Load every supported catalog when the extension is attached
    pub preload: bool,

    /// Lifetime of cached catalogs; `None` keeps them until replaced
    pub cache_timeout_seconds: Option<u64>,

    /// Remote provider used by `translations pull`
    pub provider: ProviderConfig,
}

/// Translations provider configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ProviderConfig {
    /// Header the token is sent in
    #[validate(regex(path = "crate::validation::HEADER_NAME_REGEX", message = "Auth header must be a valid HTTP header name"))]
    pub auth_header: Option<String>,

    /// Endpoint URL with a `{branch}` placeholder
    #[validate(custom(function = "crate::validation::validate_url_template", message = "URL template must be an http(s) URL containing {branch}"))]
    pub url_template: Option<String>,

    /// Access token; `TRANSLATIONS_PROVIDER_TOKEN` is consulted when unset
    pub token: Option<String>,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300, message = "Timeout must be between 1 and 300 seconds"))]
    pub timeout_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level filter
    #[validate(custom(function = "validate_log_level", message = "Log level must be one of: trace, debug, info, warn, error"))]
    pub level: String,

    /// Emit JSON lines instead of text
    pub json: bool,

    /// Optional log file path
    pub file: Option<String>,
}

impl Config {
    /// Comprehensive validation of the entire configuration
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()?;
        self.translations.validate()?;
        self.translations.provider.validate()?;
        self.logging.validate()?;
        self.translations.validate_catalog_names()?;

        Ok(())
    }
}

impl Default for TranslationsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("translations"),
            supported_domains: vec!["messages".to_string()],
            supported_locales: vec!["en".to_string()],
            fallback_locale: "en".to_string(),
            header: "SELECTED-LOCALE".to_string(),
            preload: true,
            cache_timeout_seconds: None,
            provider: ProviderConfig::default(),
        }
    }
}

impl TranslationsConfig {
    /// Whether `locale` is one of the supported locales
    pub fn is_supported_locale(&self, locale: &str) -> bool {
        self.supported_locales.iter().any(|l| l == locale)
    }

    /// Cache lifetime as a duration
    pub fn cache_timeout(&self) -> Option<Duration> {
        self.cache_timeout_seconds.map(Duration::from_secs)
    }

    /// Domains and locales become file names, so they must be plain segments
    pub fn validate_catalog_names(&self) -> Result<(), validator::ValidationErrors> {
        let mut errors = validator::ValidationErrors::new();

        for domain in &self.supported_domains {
            if let Err(err) = crate::validation::validate_catalog_segment(domain) {
                errors.add("supported_domains", err);
            }
        }

        for locale in self
            .supported_locales
            .iter()
            .chain(std::iter::once(&self.fallback_locale))
        {
            if let Err(err) = crate::validation::validate_catalog_segment(locale) {
                errors.add("supported_locales", err);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            auth_header: None,
            url_template: None,
            token: None,
            timeout_seconds: 20,
        }
    }
}

impl ProviderConfig {
    /// Configured auth header or `Authorization`
    pub fn auth_header(&self) -> &str {
        self.auth_header
            .as_deref()
            .unwrap_or(DEFAULT_PROVIDER_AUTH_HEADER)
    }

    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl From<&LoggingSettings> for transkit_common::LoggingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            level: settings.level.clone(),
            json_format: settings.json,
            file_path: settings.file.clone(),
            ..Self::default()
        }
    }
}

fn validate_log_level(level: &str) -> Result<(), validator::ValidationError> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(validator::ValidationError::new("invalid_log_level")),
    }
}
