//! JSON translations for transkit
//!
//! This crate holds everything that does not depend on the web framework:
//!
//! - Message catalogs read from `<dir>/<domain>_<locale>.json`
//! - A pluggable catalog cache (in-memory by default, moka with TTL)
//! - The catalog store that loads, caches and preloads catalogs
//! - Literal placeholder substitution
//! - Per-request lookup with fallback to the fallback locale
//!
//! # Example
//!
//! ```rust,no_run
//! use transkit_config::TranslationsConfig;
//! use transkit_i18n::{params, CatalogStore, RequestTranslations};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TranslationsConfig::default();
//! let store = CatalogStore::from_config(&config);
//!
//! let translations = RequestTranslations::resolve(&store, &config, Some("de")).await?;
//! let greeting = translations.t("hello", "messages", Some(&params!["%name%" => "Igor"]));
//! println!("{}", greeting);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod catalog;
pub mod error;
pub mod params;
pub mod scope;
pub mod store;

pub use cache::{CatalogCache, MemoryCache, MokaCache};
pub use catalog::{read_catalog, Catalog, CatalogKey};
pub use error::{I18nError, I18nResult};
pub use params::Parameters;
pub use scope::{DomainCatalogs, RequestTranslations};
pub use store::{CatalogStore, PreloadReport};

/// Domain used when callers do not name one
pub const DEFAULT_DOMAIN: &str = "messages";
