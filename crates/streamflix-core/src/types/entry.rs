//! Cache entry type

use std::time::{Duration, Instant};

/// A cached value stamped with its insertion time
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    /// The cached value
    pub value: T,
    /// When the entry was inserted
    pub inserted_at: Instant,
}

impl<T> CacheEntry<T> {
    /// Create a new entry stamped with the current time
    pub fn new(value: T) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
        }
    }

    /// Get age of the entry
    pub fn age(&self) -> Duration {
        self.inserted_at.elapsed()
    }

    /// Whether the entry is older than `ttl`.
    ///
    /// An entry exactly `ttl` old is still fresh.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }

    /// Get remaining lifetime under `ttl`
    pub fn ttl_remaining(&self, ttl: Duration) -> Option<Duration> {
        ttl.checked_sub(self.age())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_fresh() {
        let entry = CacheEntry::new("test".to_string());
        assert_eq!(entry.value, "test");
        assert!(!entry.is_expired(Duration::from_secs(60)));
        assert!(entry.ttl_remaining(Duration::from_secs(60)).is_some());
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let entry = CacheEntry {
            value: 1,
            inserted_at: Instant::now().checked_sub(Duration::from_secs(10)).unwrap(),
        };
        assert!(entry.is_expired(Duration::from_secs(5)));
        assert!(entry.ttl_remaining(Duration::from_secs(5)).is_none());
        assert!(!entry.is_expired(Duration::from_secs(60)));
    }
}
