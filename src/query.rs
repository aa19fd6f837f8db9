// SPDX-License-Identifier: MPL-2.0
//! Process-wide cache for fetched resources.
//!
//! Entries become stale after `stale_time` (a refetch is due but the value is
//! still usable) and are garbage-collected after `cache_time`. Callers pass the
//! current `Instant` so freshness is deterministic in tests.

use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};
use tracing::debug;

/// Upper bound on cached entries.
const CACHE_CAPACITY: usize = 64;

/// Default behavior of every query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryDefaults {
    #[serde(with = "secs")]
    pub stale_time: Duration,
    #[serde(with = "secs")]
    pub cache_time: Duration,
    /// Retries after the first failed attempt.
    pub retry: u32,
    pub refetch_on_window_focus: bool,
}

impl Default for QueryDefaults {
    fn default() -> Self {
        Self {
            stale_time: Duration::from_secs(5 * 60),
            cache_time: Duration::from_secs(10 * 60),
            retry: 1,
            refetch_on_window_focus: false,
        }
    }
}

impl QueryDefaults {
    /// Total attempts allowed for one fetch.
    #[must_use]
    pub fn max_attempts(&self) -> u32 {
        self.retry.saturating_add(1)
    }

    /// Exponential backoff before retry number `attempt` (1-based), capped at 30s.
    #[must_use]
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(5);
        Duration::from_secs(1u64 << exponent).min(Duration::from_secs(30))
    }
}

mod secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    fetched_at: Instant,
}

/// Cached lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness<'a, V> {
    Fresh(&'a V),
    Stale(&'a V),
    Missing,
}

/// LRU cache of query results keyed by string.
#[derive(Debug)]
pub struct QueryClient<V> {
    defaults: QueryDefaults,
    cache: LruCache<String, Entry<V>>,
}

impl<V> QueryClient<V> {
    #[must_use]
    pub fn new(defaults: QueryDefaults) -> Self {
        let capacity = NonZeroUsize::new(CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN);
        Self {
            defaults,
            cache: LruCache::new(capacity),
        }
    }

    #[must_use]
    pub fn defaults(&self) -> &QueryDefaults {
        &self.defaults
    }

    /// Stores a freshly fetched value.
    pub fn set(&mut self, key: impl Into<String>, value: V, now: Instant) {
        self.cache.put(
            key.into(),
            Entry {
                value,
                fetched_at: now,
            },
        );
    }

    /// Looks up `key`, classifying it by age.
    pub fn get(&mut self, key: &str, now: Instant) -> Freshness<'_, V> {
        let stale_time = self.defaults.stale_time;
        match self.cache.get(key) {
            Some(entry) if now.saturating_duration_since(entry.fetched_at) < stale_time => {
                Freshness::Fresh(&entry.value)
            }
            Some(entry) => Freshness::Stale(&entry.value),
            None => Freshness::Missing,
        }
    }

    /// Whether `key` needs a fetch (absent or stale).
    pub fn needs_fetch(&mut self, key: &str, now: Instant) -> bool {
        !matches!(self.get(key, now), Freshness::Fresh(_))
    }

    /// Drops entries older than `cache_time`. Returns how many were removed.
    pub fn collect_garbage(&mut self, now: Instant) -> usize {
        let cache_time = self.defaults.cache_time;
        let expired: Vec<String> = self
            .cache
            .iter()
            .filter(|(_, entry)| now.saturating_duration_since(entry.fetched_at) >= cache_time)
            .map(|(key, _)| key.clone())
            .collect();
        for key in &expired {
            self.cache.pop(key);
        }
        if !expired.is_empty() {
            debug!(removed = expired.len(), "query cache garbage collected");
        }
        expired.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl<V> Default for QueryClient<V> {
    fn default() -> Self {
        Self::new(QueryDefaults::default())
    }
}
