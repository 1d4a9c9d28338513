//! Per-request translations
//!
//! A [`RequestTranslations`] is resolved once per request: it pins the
//! catalogs of every supported domain in the effective locale together with
//! the fallback-locale catalogs, so lookups during the request never touch
//! the store again.

use crate::catalog::Catalog;
use crate::error::I18nResult;
use crate::params::Parameters;
use crate::store::CatalogStore;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use transkit_config::TranslationsConfig;

/// Catalogs of one domain for a request
#[derive(Debug, Clone)]
pub struct DomainCatalogs {
    /// Catalog in the effective locale
    pub requested: Arc<Catalog>,
    /// Catalog in the fallback locale
    pub fallback: Arc<Catalog>,
}

/// Translations available to a single request
#[derive(Debug, Clone)]
pub struct RequestTranslations {
    requested_locale: String,
    effective_locale: String,
    domains: HashMap<String, DomainCatalogs>,
}

impl RequestTranslations {
    /// Resolve the catalogs for a request that asked for `requested` (if anything).
    ///
    /// An absent locale means the fallback locale. A locale outside the
    /// supported set is remembered as requested but served from the fallback
    /// locale.
    pub async fn resolve(
        store: &CatalogStore,
        config: &TranslationsConfig,
        requested: Option<&str>,
    ) -> I18nResult<Self> {
        let fallback_locale = config.fallback_locale.as_str();
        let requested_locale = requested.unwrap_or(fallback_locale).to_string();

        let effective_locale = if config.is_supported_locale(&requested_locale) {
            requested_locale.clone()
        } else {
            debug!(
                "Locale '{}' is not supported, using '{}'",
                requested_locale, fallback_locale
            );
            fallback_locale.to_string()
        };

        let mut domains = HashMap::with_capacity(config.supported_domains.len());

        for domain in &config.supported_domains {
            let requested = store.get_or_empty(domain, &effective_locale).await?;

            let fallback = if effective_locale == fallback_locale {
                Arc::clone(&requested)
            } else {
                store.get_or_empty(domain, fallback_locale).await?
            };

            domains.insert(domain.clone(), DomainCatalogs { requested, fallback });
        }

        Ok(Self {
            requested_locale,
            effective_locale,
            domains,
        })
    }

    /// Build from already loaded catalogs
    pub fn from_parts(
        requested_locale: impl Into<String>,
        effective_locale: impl Into<String>,
        domains: HashMap<String, DomainCatalogs>,
    ) -> Self {
        Self {
            requested_locale: requested_locale.into(),
            effective_locale: effective_locale.into(),
            domains,
        }
    }

    /// Locale the request asked for, or the fallback locale when it asked for none
    pub fn requested_locale(&self) -> &str {
        &self.requested_locale
    }

    /// Locale whose catalogs are consulted first
    pub fn effective_locale(&self) -> &str {
        &self.effective_locale
    }

    pub fn domain(&self, domain: &str) -> Option<&DomainCatalogs> {
        self.domains.get(domain)
    }

    /// Translate `key` in `domain`.
    ///
    /// Looks in the effective-locale catalog, then the fallback catalog. When
    /// the fallback catalog is empty the key comes back untouched; otherwise
    /// the result (or the key itself) has `parameters` applied.
    pub fn t(&self, key: &str, domain: &str, parameters: Option<&Parameters>) -> String {
        let catalogs = self.domains.get(domain);

        let translation = match catalogs.and_then(|c| c.requested.get(key)) {
            Some(found) => found,
            None => match catalogs.map(|c| &c.fallback) {
                Some(fallback) if !fallback.is_empty() => fallback.get(key).unwrap_or(key),
                _ => return key.to_string(),
            },
        };

        match parameters {
            Some(params) if !params.is_empty() => params.apply(translation),
            _ => translation.to_string(),
        }
    }
}
