//! Catalog store: cache-first loading of catalogs from the translations directory

use crate::cache::{CatalogCache, MemoryCache};
use crate::catalog::{read_catalog, Catalog, CatalogKey};
use crate::error::I18nResult;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use transkit_config::TranslationsConfig;

/// Outcome of preloading every supported catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreloadReport {
    /// Catalogs read and cached
    pub loaded: Vec<CatalogKey>,
    /// Catalogs whose file does not exist yet
    pub missing: Vec<CatalogKey>,
}

impl PreloadReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Loads catalogs from disk and keeps them in a [`CatalogCache`]
#[derive(Debug, Clone)]
pub struct CatalogStore {
    dir: PathBuf,
    cache: Arc<dyn CatalogCache>,
    cache_timeout: Option<Duration>,
}

impl CatalogStore {
    /// Create a store reading from `dir` with an in-memory cache
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            cache: Arc::new(MemoryCache::new()),
            cache_timeout: None,
        }
    }

    /// Create a store from the translations configuration
    pub fn from_config(config: &TranslationsConfig) -> Self {
        Self::new(&config.dir).with_cache_timeout(config.cache_timeout())
    }

    /// Use `cache` instead of the in-memory default
    pub fn with_cache(mut self, cache: Arc<dyn CatalogCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Lifetime passed to the cache for every stored catalog
    pub fn with_cache_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.cache_timeout = timeout;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn cache(&self) -> &Arc<dyn CatalogCache> {
        &self.cache
    }

    /// Catalog for `domain` in `locale`, read from disk on a cache miss
    pub async fn get(&self, domain: &str, locale: &str) -> I18nResult<Arc<Catalog>> {
        let key = CatalogKey::new(domain, locale);
        let cache_key = key.cache_key();

        if let Some(catalog) = self.cache.get(&cache_key).await {
            return Ok(catalog);
        }

        debug!("Catalog cache miss for {}", key);
        let catalog = Arc::new(read_catalog(&self.dir, &key).await?);
        self.cache
            .set(&cache_key, Arc::clone(&catalog), self.cache_timeout)
            .await;

        Ok(catalog)
    }

    /// Like [`get`](Self::get), but a catalog that has not been pulled yet
    /// reads as empty. The empty catalog is not cached, so a later pull is
    /// picked up without a restart.
    pub async fn get_or_empty(&self, domain: &str, locale: &str) -> I18nResult<Arc<Catalog>> {
        match self.get(domain, locale).await {
            Err(err) if err.is_not_found() => {
                debug!("{}; serving an empty catalog", err);
                Ok(Arc::new(Catalog::new()))
            }
            other => other,
        }
    }

    /// Replace the cached catalog for `domain` in `locale`
    pub async fn set(&self, domain: &str, locale: &str, catalog: Catalog) {
        let key = CatalogKey::new(domain, locale);
        self.cache
            .set(&key.cache_key(), Arc::new(catalog), self.cache_timeout)
            .await;
    }

    /// Read and cache every `domains` x `locales` catalog.
    ///
    /// Missing files are reported and logged, other failures abort.
    pub async fn preload(&self, domains: &[String], locales: &[String]) -> I18nResult<PreloadReport> {
        let mut report = PreloadReport::default();

        for domain in domains {
            for locale in locales {
                let key = CatalogKey::new(domain.as_str(), locale.as_str());

                match read_catalog(&self.dir, &key).await {
                    Ok(catalog) => {
                        self.set(domain, locale, catalog).await;
                        report.loaded.push(key);
                    }
                    Err(err) if err.is_not_found() => {
                        warn!(
                            "Translations file {} not found. Consider running: transkit translations pull <branch>",
                            key.file_name()
                        );
                        report.missing.push(key);
                    }
                    Err(err) => return Err(err),
                }
            }
        }

        info!(
            "Preloaded {} catalogs ({} missing) from {:?}",
            report.loaded.len(),
            report.missing.len(),
            self.dir
        );

        Ok(report)
    }
}
