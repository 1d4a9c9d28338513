//! Configuration management for transkit
//!
//! Settings mirror the knobs a translations extension needs: where catalogs
//! live, which domains and locales are served, how the request locale is
//! chosen and how the provider is reached by `translations pull`.

pub mod loader;
pub mod settings;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader};
pub use settings::{Config, LoggingSettings, ProviderConfig, TranslationsConfig};
