//! The translations extension

use crate::context;
use crate::middleware::resolve_locale;
use axum::{Extension, Router};
use std::sync::Arc;
use tracing::{debug, info};
use transkit_common::Result;
use transkit_config::TranslationsConfig;
use transkit_i18n::{CatalogCache, CatalogStore, Parameters, RequestTranslations};

#[derive(Debug)]
struct Inner {
    config: TranslationsConfig,
    store: CatalogStore,
}

/// Translations extension for an axum application.
///
/// Cheap to clone; all clones share the same catalog store.
#[derive(Debug, Clone)]
pub struct Translations {
    inner: Arc<Inner>,
}

impl Default for Translations {
    fn default() -> Self {
        Self::new()
    }
}

impl Translations {
    /// Create the extension with the default configuration
    pub fn new() -> Self {
        Self::with_config(TranslationsConfig::default())
    }

    /// Create the extension with the given configuration
    pub fn with_config(config: TranslationsConfig) -> Self {
        let store = CatalogStore::from_config(&config);
        Self {
            inner: Arc::new(Inner { config, store }),
        }
    }

    /// Keep catalogs in `cache` instead of the in-process map
    pub fn with_cache(self, cache: Arc<dyn CatalogCache>) -> Self {
        let config = self.inner.config.clone();
        let store = CatalogStore::from_config(&config).with_cache(cache);
        Self {
            inner: Arc::new(Inner { config, store }),
        }
    }

    pub fn config(&self) -> &TranslationsConfig {
        &self.inner.config
    }

    pub fn store(&self) -> &CatalogStore {
        &self.inner.store
    }

    /// Attach the extension to `app`.
    ///
    /// Preloads every supported catalog when configured to, then installs
    /// the locale-resolution middleware and makes the extension available to
    /// handlers as `Extension<Translations>`.
    pub async fn init_app<S>(&self, app: Router<S>) -> Result<Router<S>>
    where
        S: Clone + Send + Sync + 'static,
    {
        let config = self.config();

        if config.preload {
            self.store()
                .preload(&config.supported_domains, &config.supported_locales)
                .await?;
        }

        info!(
            "Translations attached: header '{}', locales {:?}, fallback '{}'",
            config.header, config.supported_locales, config.fallback_locale
        );

        Ok(app
            .layer(axum::middleware::from_fn_with_state(
                self.clone(),
                resolve_locale,
            ))
            .layer(Extension(self.clone())))
    }

    /// Resolve the catalogs for a request that selected `requested`
    pub async fn resolve(&self, requested: Option<&str>) -> Result<RequestTranslations> {
        debug!("Resolving translations for locale {:?}", requested);
        Ok(RequestTranslations::resolve(self.store(), self.config(), requested).await?)
    }

    /// Locale selected by the current request, or the fallback locale
    pub fn get_request_locale(&self) -> String {
        context::current()
            .map(|scope| scope.requested_locale().to_string())
            .unwrap_or_else(|| self.config().fallback_locale.clone())
    }

    /// Translate `key` against the current request
    pub fn t(&self, key: &str, domain: &str, parameters: Option<&Parameters>) -> String {
        context::t(key, domain, parameters)
    }
}
