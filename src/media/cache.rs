// SPDX-License-Identifier: MPL-2.0
//! URL-keyed LRU cache of decoded images and models.
//!
//! Results arrive asynchronously and keyed by URL, so a late result for an
//! item the viewer already left simply lands in the cache.
//!
//! # Usage
//!
//! ```ignore
//! if cache.begin(&url) {
//!     // spawn a fetch; call `cache.finish(url, result)` when it completes
//! }
//! match cache.peek(&url) { ... }
//! ```

use super::image::ImageData;
use super::model::ModelData;
use crate::error::MediaError;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;

/// Default number of decoded entries kept.
pub const DEFAULT_CACHE_ENTRIES: usize = 48;

/// Minimum number of decoded images kept.
pub const MIN_CACHE_ENTRIES: usize = 4;

/// Maximum number of decoded images kept.
pub const MAX_CACHE_ENTRIES: usize = 512;

/// What the viewer should draw for a URL.
#[derive(Debug, Clone)]
pub enum MediaSlot {
    Ready(ImageData),
    Model(ModelData),
    /// Load failed; draw the placeholder.
    Failed,
}

/// Statistics about cache behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub failures: u64,
}

pub struct MediaCache {
    entries: LruCache<String, MediaSlot>,
    pending: HashSet<String>,
    stats: CacheStats,
}

impl MediaCache {
    /// Creates a cache holding up to `capacity` entries (clamped).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.clamp(MIN_CACHE_ENTRIES, MAX_CACHE_ENTRIES);
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
            pending: HashSet::new(),
            stats: CacheStats::default(),
        }
    }

    /// Marks `url` as loading.
    ///
    /// Returns `true` if the caller should start a fetch: the URL is neither
    /// cached nor already in flight.
    pub fn begin(&mut self, url: &str) -> bool {
        if self.entries.get(url).is_some() {
            self.stats.hits += 1;
            return false;
        }
        if self.pending.contains(url) {
            return false;
        }
        self.stats.misses += 1;
        self.pending.insert(url.to_string());
        true
    }

    /// Stores a fetch result. Failures are logged and remembered as
    /// [`MediaSlot::Failed`] so they are not retried every frame.
    pub fn finish(&mut self, url: String, result: Result<ImageData, MediaError>) {
        self.store(url, result.map(MediaSlot::Ready));
    }

    /// Stores a model fetch result, like [`MediaCache::finish`].
    pub fn finish_model(&mut self, url: String, result: Result<ModelData, MediaError>) {
        self.store(url, result.map(MediaSlot::Model));
    }

    fn store(&mut self, url: String, result: Result<MediaSlot, MediaError>) {
        self.pending.remove(&url);
        let slot = match result {
            Ok(slot) => slot,
            Err(err) => {
                tracing::warn!(%url, error = %err, "media load failed, using placeholder");
                self.stats.failures += 1;
                MediaSlot::Failed
            }
        };
        self.entries.put(url, slot);
    }

    /// Looks up a URL without touching LRU order (usable from `view`).
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&MediaSlot> {
        self.entries.peek(url)
    }

    /// Marks a cached URL as most recently used so that upcoming results
    /// evict other entries first. Returns `false` if it is not cached.
    pub fn pin(&mut self, url: &str) -> bool {
        self.entries.promote(url)
    }

    #[must_use]
    pub fn is_pending(&self, url: &str) -> bool {
        self.pending.contains(url)
    }

    /// Drops everything, including failure records, so the next view retries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.pending.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl Default for MediaCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_ENTRIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn begin_deduplicates_in_flight_requests() {
        let mut cache = MediaCache::default();
        assert!(cache.begin("a.png"));
        assert!(!cache.begin("a.png"));
        assert!(cache.is_pending("a.png"));
    }

    #[test]
    fn finish_stores_ready_image() {
        let mut cache = MediaCache::default();
        cache.begin("a.png");
        cache.finish("a.png".into(), Ok(pixel()));

        assert!(!cache.is_pending("a.png"));
        assert!(matches!(cache.peek("a.png"), Some(MediaSlot::Ready(_))));
        assert!(!cache.begin("a.png"));
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn failure_is_remembered() {
        let mut cache = MediaCache::default();
        cache.begin("b.png");
        cache.finish("b.png".into(), Err(MediaError::Status(404)));

        assert!(matches!(cache.peek("b.png"), Some(MediaSlot::Failed)));
        assert!(!cache.begin("b.png"));
        assert_eq!(cache.stats().failures, 1);
    }

    #[test]
    fn capacity_is_clamped_and_evicts_oldest() {
        let mut cache = MediaCache::new(0);
        for i in 0..=MIN_CACHE_ENTRIES {
            cache.finish(format!("{i}.png"), Ok(pixel()));
        }
        assert_eq!(cache.len(), MIN_CACHE_ENTRIES);
        assert!(cache.peek("0.png").is_none());
    }

    #[test]
    fn pinned_entry_survives_later_results() {
        let mut cache = MediaCache::new(MIN_CACHE_ENTRIES);
        cache.finish("shown.png".into(), Ok(pixel()));
        for i in 0..MIN_CACHE_ENTRIES * 3 {
            cache.finish(format!("{i}.png"), Ok(pixel()));
            assert!(cache.pin("shown.png"));
        }
        assert!(matches!(cache.peek("shown.png"), Some(MediaSlot::Ready(_))));
        assert!(!cache.pin("0.png"));
    }

    #[test]
    fn clear_allows_retry() {
        let mut cache = MediaCache::default();
        cache.finish("c.png".into(), Err(MediaError::Read("gone".into())));
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.begin("c.png"));
    }
}
