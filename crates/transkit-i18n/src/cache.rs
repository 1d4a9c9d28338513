//! Catalog caching
//!
//! Loaded catalogs are kept behind the [`CatalogCache`] trait so an
//! application can swap the default in-process map for a bounded cache
//! with expiry, or for its own shared cache.

use crate::catalog::Catalog;
use async_trait::async_trait;
use moka::future::Cache;
use moka::Expiry;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// Storage for loaded catalogs, keyed by `<domain>_<locale>`
#[async_trait]
pub trait CatalogCache: Send + Sync + fmt::Debug {
    /// Cached catalog for `key`, if present and not expired
    async fn get(&self, key: &str) -> Option<Arc<Catalog>>;

    /// Store `catalog` under `key`; `ttl` of `None` keeps it until replaced
    async fn set(&self, key: &str, catalog: Arc<Catalog>, ttl: Option<Duration>);
}

/// Unbounded in-process cache; entries never expire
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Arc<Catalog>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached catalogs
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CatalogCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<Arc<Catalog>> {
        self.entries.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, catalog: Arc<Catalog>, _ttl: Option<Duration>) {
        self.entries.write().await.insert(key.to_string(), catalog);
    }
}

#[derive(Debug, Clone)]
struct CachedCatalog {
    catalog: Arc<Catalog>,
    ttl: Option<Duration>,
}

/// Expiry driven by the ttl each entry was stored with
struct PerEntryTtl;

impl Expiry<String, CachedCatalog> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedCatalog,
        _created_at: Instant,
    ) -> Option<Duration> {
        value.ttl
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedCatalog,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        value.ttl
    }
}

/// Bounded cache backed by moka with per-entry time-to-live
#[derive(Clone)]
pub struct MokaCache {
    inner: Cache<String, CachedCatalog>,
}

impl fmt::Debug for MokaCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MokaCache")
            .field("entry_count", &self.inner.entry_count())
            .finish()
    }
}

impl MokaCache {
    /// Create a cache holding at most `max_capacity` catalogs
    pub fn new(max_capacity: u64) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self { inner }
    }

    /// Number of cached catalogs after pending maintenance has run
    pub async fn entry_count(&self) -> u64 {
        self.inner.run_pending_tasks().await;
        self.inner.entry_count()
    }
}

impl Default for MokaCache {
    fn default() -> Self {
        Self::new(1000)
    }
}

#[async_trait]
impl CatalogCache for MokaCache {
    async fn get(&self, key: &str) -> Option<Arc<Catalog>> {
        self.inner.get(key).await.map(|entry| entry.catalog)
    }

    async fn set(&self, key: &str, catalog: Arc<Catalog>, ttl: Option<Duration>) {
        debug!("Caching catalog {} with ttl {:?}", key, ttl);
        self.inner
            .insert(key.to_string(), CachedCatalog { catalog, ttl })
            .await;
    }
}
