//! Caching layer for price/indicator tables to reduce provider calls

use cached::{Cached, TimedCache};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::analysis::IndicatorTable;
use crate::error::Result;

/// Thread-safe TTL cache of indicator tables keyed by ticker
pub struct TableCache {
    cache: Arc<RwLock<TimedCache<String, IndicatorTable>>>,
}

impl TableCache {
    /// Create a new cache with the specified TTL
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: Arc::new(RwLock::new(TimedCache::with_lifespan(ttl))),
        }
    }

    /// Get a table from the cache
    pub async fn get(&self, ticker: &str) -> Option<IndicatorTable> {
        let mut cache = self.cache.write().await;
        cache.cache_get(ticker).cloned()
    }

    /// Insert a table into the cache
    pub async fn insert(&self, ticker: impl Into<String>, table: IndicatorTable) {
        let mut cache = self.cache.write().await;
        let _ = cache.cache_set(ticker.into(), table);
    }

    /// Get or fetch a table using the provided fetcher function
    ///
    /// If a live entry exists for the ticker it is returned immediately.
    /// Otherwise the fetcher runs and its result is cached.
    pub async fn get_or_fetch<F, Fut>(&self, ticker: &str, fetcher: F) -> Result<IndicatorTable>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<IndicatorTable>>,
    {
        if let Some(table) = self.get(ticker).await {
            tracing::debug!(%ticker, "cache hit");
            return Ok(table);
        }

        tracing::debug!(%ticker, "cache miss");

        let table = fetcher().await?;
        self.insert(ticker, table.clone()).await;

        Ok(table)
    }

    /// Invalidate the entry for a ticker
    pub async fn invalidate(&self, ticker: &str) {
        let mut cache = self.cache.write().await;
        let _ = cache.cache_remove(ticker);
    }

    /// Clear all cached entries
    pub async fn clear(&self) {
        let mut cache = self.cache.write().await;
        cache.cache_clear();
    }

    /// Number of cached entries
    pub async fn len(&self) -> usize {
        let cache = self.cache.read().await;
        cache.cache_size()
    }

    /// Check if the cache is empty
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Clone for TableCache {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}
