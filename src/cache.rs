// SPDX-License-Identifier: MPL-2.0
//! Memoizing wrapper around classification.
//!
//! Classification is a string scan over short identifiers, so caching is
//! never required; this wrapper exists for render paths that describe the
//! same references on every request. Keyed by the raw reference string,
//! LRU-bounded, and semantically identical to calling
//! [`RuleSet::describe`] directly.

use crate::classifier::RuleSet;
use crate::domain::media::MediaDescriptor;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default number of cached descriptors.
const DEFAULT_CAPACITY: usize = 256;

/// Hit/miss counters for the descriptor cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// LRU cache of media descriptors keyed by the raw reference.
pub struct DescriptorCache {
    rules: RuleSet,
    cache: LruCache<String, MediaDescriptor>,
    stats: CacheStats,
}

impl DescriptorCache {
    /// Creates a cache over the given rules with the given capacity.
    ///
    /// # Panics
    ///
    /// Panics if `DEFAULT_CAPACITY` is zero, which would indicate a build
    /// configuration error.
    #[must_use]
    pub fn new(rules: RuleSet, capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(
            NonZeroUsize::new(DEFAULT_CAPACITY).expect("DEFAULT_CAPACITY must be non-zero"),
        );
        Self {
            rules,
            cache: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Creates a cache with the default capacity.
    #[must_use]
    pub fn with_defaults(rules: RuleSet) -> Self {
        Self::new(rules, DEFAULT_CAPACITY)
    }

    /// Returns the descriptor for a reference, computing it on a miss.
    pub fn describe(&mut self, reference: &str) -> MediaDescriptor {
        if let Some(descriptor) = self.cache.get(reference) {
            self.stats.hits += 1;
            return descriptor.clone();
        }
        self.stats.misses += 1;
        let descriptor = self.rules.describe(reference);
        self.cache.put(reference.to_string(), descriptor.clone());
        descriptor
    }

    /// Returns the rules this cache classifies with.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the hit/miss counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drops all cached descriptors and resets the counters.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.stats = CacheStats::default();
    }
}
