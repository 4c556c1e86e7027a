use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::debug;

use super::client::MetadataSource;
use super::error::MetadataError;

pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataCacheConfig {
    /// Max cached ids before least-recently-used entries are evicted.
    pub capacity: u64,
    /// How long a resolved name is served before it is looked up again.
    pub ttl: Duration,
}

impl Default for MetadataCacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
            ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl MetadataCacheConfig {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self { capacity, ttl }
    }
}

/// Caching front for a [`MetadataSource`], keyed by emote id.
///
/// Failed lookups are not cached. Concurrent misses for the same id share a single
/// upstream call.
pub struct MetadataCache<S: MetadataSource> {
    source: S,
    entries: Cache<String, String>,
}

impl<S: MetadataSource> MetadataCache<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, MetadataCacheConfig::default())
    }

    pub fn with_config(source: S, config: MetadataCacheConfig) -> Self {
        Self {
            source,
            entries: Cache::builder()
                .max_capacity(config.capacity)
                .time_to_live(config.ttl)
                .build(),
        }
    }

    /// Returns the owner display name for `id`, asking the source only on a miss.
    pub async fn resolve(&self, id: &str) -> Result<String, Arc<MetadataError>> {
        if let Some(name) = self.entries.get(id).await {
            debug!(id = id, "Metadata cache hit");
            return Ok(name);
        }

        debug!(id = id, "Metadata cache miss");
        self.entries
            .try_get_with(id.to_string(), self.source.owner_display_name(id))
            .await
    }

    /// Returns the cached value without touching the source.
    pub async fn get_cached(&self, id: &str) -> Option<String> {
        self.entries.get(id).await
    }

    /// Drops a single entry.
    pub async fn invalidate(&self, id: &str) {
        self.entries.invalidate(id).await;
    }

    /// Returns the (approximate) number of cached entries.
    pub fn len(&self) -> u64 {
        self.entries.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.entry_count() == 0
    }

    /// Runs any pending maintenance tasks in the underlying cache.
    pub async fn run_pending_tasks(&self) {
        self.entries.run_pending_tasks().await;
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: MetadataSource> std::fmt::Debug for MetadataCache<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataCache")
            .field("entries", &self.entries.entry_count())
            .finish()
    }
}
