//! Configuration loading utilities

use crate::Config;
use std::env;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;
use transkit_common::Result as TransKitResult;

/// Environment variable pointing at a configuration file
pub const CONFIG_PATH_VAR: &str = "TRANSKIT_CONFIG_PATH";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for transkit_common::TransKitError {
    fn from(err: ConfigError) -> Self {
        transkit_common::TransKitError::config_with_source(err.to_string(), err)
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        Self::load_config_with(path, |var| env::var(var).ok())
    }

    /// Load configuration from a YAML file, resolving overrides through `lookup`
    pub fn load_config_with<P, F>(path: P, lookup: F) -> Result<Config, ConfigError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        debug!("Loading configuration from {:?}", path.as_ref());

        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = if content.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(&content)?
        };

        Self::apply_overrides(&mut config, lookup)?;
        config.validate_all()?;

        Ok(config)
    }

    /// Load configuration from the discovered file, or defaults with env overrides
    pub fn load() -> TransKitResult<Config> {
        Ok(Self::load_with(Path::new("."), |var| env::var(var).ok())?)
    }

    /// Discover the configuration file relative to `base_dir`.
    ///
    /// `lookup` resolves `TRANSKIT_CONFIG_PATH` and every override variable.
    /// Without an explicit path, `transkit.yaml` then `transkit.yml` in
    /// `base_dir` are tried before falling back to defaults.
    pub fn load_with<F>(base_dir: &Path, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(config_path) = lookup(CONFIG_PATH_VAR) {
            return Self::load_config_with(base_dir.join(config_path), lookup);
        }

        for name in ["transkit.yaml", "transkit.yml"] {
            let candidate = base_dir.join(name);
            if candidate.exists() {
                return Self::load_config_with(candidate, lookup);
            }
        }

        debug!("No configuration file found in {:?}; using defaults", base_dir);
        Self::defaults_with(lookup)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TransKitResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Default configuration with overrides resolved through `lookup`
    pub fn defaults_with<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        Self::apply_overrides(&mut config, lookup)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Apply variable overrides to configuration
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let translations = &mut config.translations;

        if let Some(dir) = lookup("TRANSLATIONS_DIR") {
            translations.dir = dir.into();
        }

        if let Some(domains) = lookup("SUPPORTED_DOMAINS") {
            translations.supported_domains = split_list(&domains);
        }

        if let Some(locales) = lookup("SUPPORTED_LOCALES") {
            translations.supported_locales = split_list(&locales);
        }

        if let Some(locale) = lookup("FALLBACK_LOCALE") {
            translations.fallback_locale = locale;
        }

        if let Some(header) = lookup("TRANSLATIONS_HEADER") {
            translations.header = header;
        }

        if let Some(preload) = lookup("TRANSLATIONS_PRELOAD") {
            translations.preload = parse_var("TRANSLATIONS_PRELOAD", &preload)?;
        }

        if let Some(timeout) = lookup("TRANSLATIONS_CACHE_TIMEOUT") {
            translations.cache_timeout_seconds =
                Some(parse_var("TRANSLATIONS_CACHE_TIMEOUT", &timeout)?);
        }

        let provider = &mut translations.provider;

        if let Some(header) = lookup("TRANSLATIONS_PROVIDER_AUTH_HEADER") {
            provider.auth_header = Some(header);
        }

        if let Some(template) = lookup("TRANSLATIONS_PROVIDER_URL_TEMPLATE") {
            provider.url_template = Some(template);
        }

        if let Some(token) = lookup("TRANSLATIONS_PROVIDER_TOKEN") {
            provider.token = Some(token);
        }

        if let Some(timeout) = lookup("TRANSLATIONS_PROVIDER_TIMEOUT") {
            provider.timeout_seconds = parse_var("TRANSLATIONS_PROVIDER_TIMEOUT", &timeout)?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(json) = lookup("LOG_JSON") {
            config.logging.json = parse_var("LOG_JSON", &json)?;
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.logging.file = Some(file);
        }

        Ok(())
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::EnvParseError {
        var: var.to_string(),
        source: Box::new(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    /// Create a temporary YAML config file for testing
    fn create_test_config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes()).expect("Failed to write to temp file");
        file
    }

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_load_valid_yaml_config() {
        let yaml_content = "translations:\n  dir: \"/srv/app/translations\"\n  supported_domains: [\"messages\", \"emails\"]\n  supported_locales: [\"en\", \"de\", \"uk\"]\n  fallback_locale: \"en\"\n  header: \"X-Locale\"\n  preload: false\n  cache_timeout_seconds: 300\n  provider:\n    auth_header: \"X-Api-Key\"\n    url_template: \"https://tms.example.com/export/{branch}\"\n    timeout_seconds: 45\nlogging:\n  level: \"debug\"\n  json: true";

        let temp_file = create_test_config_file(yaml_content);
        let config = ConfigLoader::load_config_with(temp_file.path(), |_| None)
            .expect("Failed to load config");

        assert_eq!(config.translations.dir, PathBuf::from("/srv/app/translations"));
        assert_eq!(config.translations.supported_domains, vec!["messages", "emails"]);
        assert_eq!(config.translations.supported_locales, vec!["en", "de", "uk"]);
        assert_eq!(config.translations.header, "X-Locale");
        assert!(!config.translations.preload);
        assert_eq!(config.translations.cache_timeout_seconds, Some(300));
        assert_eq!(config.translations.provider.auth_header(), "X-Api-Key");
        assert_eq!(config.translations.provider.timeout_seconds, 45);
        assert!(config.translations.provider.token.is_none());
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let temp_file = create_test_config_file("translations:\n  supported_locales: [\"en\", \"fr\"]\n");
        let config = ConfigLoader::load_config_with(temp_file.path(), |_| None)
            .expect("Failed to load config");

        assert_eq!(config.translations.supported_locales, vec!["en", "fr"]);
        assert_eq!(config.translations.supported_domains, vec!["messages"]);
        assert_eq!(config.translations.header, "SELECTED-LOCALE");
        assert_eq!(config.translations.provider.timeout_seconds, 20);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let temp_file = create_test_config_file("");
        let config = ConfigLoader::load_config_with(temp_file.path(), |_| None)
            .expect("Failed to load config");

        assert_eq!(config.translations.fallback_locale, "en");
    }

    #[test]
    fn test_invalid_yaml() {
        let temp_file = create_test_config_file("translations:\n  supported_locales: [unclosed");
        let result = ConfigLoader::load_config_with(temp_file.path(), |_| None);

        assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
    }

    #[test]
    fn test_validation_error() {
        let temp_file = create_test_config_file("translations:\n  supported_domains: []\n");
        let result = ConfigLoader::load_config_with(temp_file.path(), |_| None);

        assert!(matches!(result.unwrap_err(), ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let overrides = vars(&[
            ("TRANSLATIONS_DIR", "/tmp/catalogs"),
            ("SUPPORTED_LOCALES", "en, de ,fr,"),
            ("FALLBACK_LOCALE", "de"),
            ("TRANSLATIONS_PRELOAD", "false"),
            ("TRANSLATIONS_CACHE_TIMEOUT", "60"),
            ("TRANSLATIONS_PROVIDER_TOKEN", "secret"),
            ("TRANSLATIONS_PROVIDER_TIMEOUT", "5"),
            ("LOG_LEVEL", "warn"),
        ]);

        let temp_file = create_test_config_file("translations:\n  supported_locales: [\"en\"]\n  preload: true\n");
        let config = ConfigLoader::load_config_with(temp_file.path(), |var| overrides.get(var).cloned())
            .expect("Failed to load config");

        assert_eq!(config.translations.dir, PathBuf::from("/tmp/catalogs"));
        assert_eq!(config.translations.supported_locales, vec!["en", "de", "fr"]);
        assert_eq!(config.translations.fallback_locale, "de");
        assert!(!config.translations.preload);
        assert_eq!(config.translations.cache_timeout_seconds, Some(60));
        assert_eq!(config.translations.provider.token.as_deref(), Some("secret"));
        assert_eq!(config.translations.provider.timeout_seconds, 5);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_env_parse_error() {
        let overrides = vars(&[("TRANSLATIONS_PROVIDER_TIMEOUT", "soon")]);
        let result = ConfigLoader::defaults_with(|var| overrides.get(var).cloned());

        match result.unwrap_err() {
            ConfigError::EnvParseError { var, .. } => {
                assert_eq!(var, "TRANSLATIONS_PROVIDER_TIMEOUT");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_config_file() {
        let result = ConfigLoader::load_config_with("/nonexistent/path/transkit.yaml", |_| None);
        assert!(matches!(result.unwrap_err(), ConfigError::IoError(_)));
    }

    #[test]
    fn test_config_error_converts_to_common_error() {
        let source = ConfigLoader::load_config_with("/nonexistent/path/transkit.yaml", |_| None)
            .unwrap_err();
        let err: transkit_common::TransKitError = source.into();
        assert!(matches!(err, transkit_common::TransKitError::Config { .. }));
        assert!(err.to_string().contains("Failed to read configuration file"));
    }
}
