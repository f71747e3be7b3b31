//! In-memory TTL cache using DashMap

use dashmap::DashMap;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

use streamflix_core::{CacheEntry, CacheLookup, CacheStats};

/// Default time-to-live for cached responses
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// Configuration for the TTL cache
#[derive(Debug, Clone)]
pub struct TtlCacheConfig {
    /// Maximum age of an entry before reads treat it as absent
    pub ttl: Duration,
    /// Maximum number of entries (0 = unlimited)
    pub max_capacity: usize,
}

impl Default for TtlCacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            max_capacity: 0,
        }
    }
}

impl TtlCacheConfig {
    /// Create config with a specific TTL
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            ..Default::default()
        }
    }

    /// Bound the number of entries
    pub fn capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }
}

/// Internal statistics tracking
#[derive(Debug, Default)]
struct Counters {
    hits: u64,
    misses: u64,
    writes: u64,
    evictions: u64,
}

/// Key → value store whose entries go stale a fixed time after insertion.
///
/// Staleness is checked lazily on read: an expired entry is dropped and
/// reported as absent by the read that finds it. Nothing runs in the
/// background. Each entry ages from its own insertion time.
///
/// Cloning creates a new handle to the SAME underlying store.
#[derive(Clone)]
pub struct TtlCache<V> {
    /// Main data store
    data: Arc<DashMap<String, CacheEntry<V>>>,
    /// Statistics
    counters: Arc<RwLock<Counters>>,
    /// Configuration
    config: TtlCacheConfig,
}

impl<V: Clone> TtlCache<V> {
    /// Create a new TTL cache
    pub fn new(config: TtlCacheConfig) -> Self {
        Self {
            data: Arc::new(DashMap::new()),
            counters: Arc::new(RwLock::new(Counters::default())),
            config,
        }
    }

    /// Create with default configuration (5 minute TTL, unbounded)
    pub fn with_defaults() -> Self {
        Self::new(TtlCacheConfig::default())
    }

    /// Configured TTL
    pub fn ttl(&self) -> Duration {
        self.config.ttl
    }

    /// Look up `key`, dropping the entry if it has outlived the TTL
    pub fn lookup(&self, key: &str) -> CacheLookup<V> {
        let ttl = self.config.ttl;
        let fresh = match self.data.get(key) {
            Some(entry) if !entry.is_expired(ttl) => Some(entry.value.clone()),
            Some(_) => None,
            None => {
                self.counters.write().misses += 1;
                return CacheLookup::Miss;
            }
        };

        match fresh {
            Some(value) => {
                self.counters.write().hits += 1;
                CacheLookup::Hit(value)
            }
            None => {
                // Re-check under the shard lock: a writer may have refreshed it meanwhile.
                let removed = self.data.remove_if(key, |_, entry| entry.is_expired(ttl));
                let mut counters = self.counters.write();
                counters.misses += 1;
                if removed.is_some() {
                    counters.evictions += 1;
                }
                CacheLookup::Expired
            }
        }
    }

    /// Get a fresh value, or `None` if absent or expired
    pub fn get(&self, key: &str) -> Option<V> {
        self.lookup(key).value()
    }

    /// Insert or overwrite `key`, stamping the current time.
    ///
    /// Returns the number of entries evicted to respect `max_capacity`.
    pub fn set(&self, key: impl Into<String>, value: V) -> usize {
        let key = key.into();
        let evicted = self.make_room_for(&key);
        self.data.insert(key, CacheEntry::new(value));

        let mut counters = self.counters.write();
        counters.writes += 1;
        counters.evictions += evicted as u64;
        evicted
    }

    /// Drop all entries, returning how many were stored
    pub fn clear(&self) -> usize {
        let count = self.data.len();
        self.data.clear();
        count
    }

    /// Remove every expired entry now, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let ttl = self.config.ttl;
        let expired: Vec<String> = self
            .data
            .iter()
            .filter(|entry| entry.value().is_expired(ttl))
            .map(|entry| entry.key().clone())
            .collect();

        let removed = expired
            .iter()
            .filter(|key| {
                self.data
                    .remove_if(key.as_str(), |_, entry| entry.is_expired(ttl))
                    .is_some()
            })
            .count();

        self.counters.write().evictions += removed as u64;
        removed
    }

    /// Whether `key` holds a fresh entry. Does not touch statistics.
    pub fn contains_key(&self, key: &str) -> bool {
        self.data
            .get(key)
            .is_some_and(|entry| !entry.is_expired(self.config.ttl))
    }

    /// Number of stored entries, fresh or not yet swept
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the cache is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Introspection snapshot. Has no side effects.
    pub fn stats(&self) -> CacheStats {
        let mut keys: Vec<String> = self.data.iter().map(|entry| entry.key().clone()).collect();
        keys.sort();

        let counters = self.counters.read();
        CacheStats {
            count: keys.len(),
            keys,
            hits: counters.hits,
            misses: counters.misses,
            writes: counters.writes,
            evictions: counters.evictions,
        }
    }

    /// Evict entries until one more fits. Overwrites never evict.
    fn make_room_for(&self, key: &str) -> usize {
        let capacity = self.config.max_capacity;
        if capacity == 0 || self.data.contains_key(key) {
            return 0;
        }

        let mut evicted = 0;
        if self.data.len() >= capacity {
            evicted += self.purge_expired_uncounted();
        }

        while self.data.len() >= capacity {
            let oldest = self
                .data
                .iter()
                .min_by_key(|entry| entry.value().inserted_at)
                .map(|entry| entry.key().clone());

            match oldest {
                Some(oldest) => {
                    if self.data.remove(&oldest).is_some() {
                        evicted += 1;
                    }
                }
                None => break,
            }
        }

        evicted
    }

    fn purge_expired_uncounted(&self) -> usize {
        let ttl = self.config.ttl;
        let before = self.data.len();
        self.data.retain(|_, entry| !entry.is_expired(ttl));
        before.saturating_sub(self.data.len())
    }
}

impl<V> std::fmt::Debug for TtlCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache")
            .field("entries", &self.data.len())
            .field("config", &self.config)
            .finish()
    }
}
