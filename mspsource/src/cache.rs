//! In-memory cache of resolved stream URLs.
//!
//! Adapters keep one of these to avoid resolving the same record twice within
//! the TTL. The cache is private to the adapter; it is cheap to clone and the
//! clones share their entries, so one cache can serve several controllers.

use crate::MediaItem;
use moka::sync::Cache as MokaCache;
use std::time::Duration;

/// Default lifetime of a resolved URL (5 minutes)
pub const DEFAULT_RESOLVE_TTL: Duration = Duration::from_secs(300);

/// Default number of resolved URLs kept
pub const DEFAULT_RESOLVE_CAPACITY: u64 = 1000;

#[derive(Clone)]
pub struct ResolveCache {
    urls: MokaCache<String, String>,
}

impl ResolveCache {
    pub fn new() -> Self {
        Self::with_settings(DEFAULT_RESOLVE_CAPACITY, DEFAULT_RESOLVE_TTL)
    }

    pub fn with_settings(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            urls: MokaCache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Cache key: records with the same identity but different hints are
    /// different streams.
    fn key(item: &MediaItem) -> String {
        format!("{}::{}", item.id, item.hint)
    }

    pub fn get(&self, item: &MediaItem) -> Option<String> {
        self.urls.get(&Self::key(item))
    }

    pub fn put(&self, item: &MediaItem, url: impl Into<String>) {
        self.urls.insert(Self::key(item), url.into());
    }

    pub fn invalidate(&self, item: &MediaItem) {
        self.urls.invalidate(&Self::key(item));
    }

    pub fn clear(&self) {
        self.urls.invalidate_all();
    }
}

impl Default for ResolveCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ResolveCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolveCache")
            .field("entries", &self.urls.entry_count())
            .finish()
    }
}
