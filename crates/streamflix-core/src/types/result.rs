//! Cache lookup outcome

/// Result of a cache lookup operation
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup<T> {
    /// Fresh cache hit
    Hit(T),
    /// Entry was present but older than the TTL; it has been dropped
    Expired,
    /// Cache miss
    Miss,
}

impl<T> CacheLookup<T> {
    /// Check if this is a fresh hit
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheLookup::Hit(_))
    }

    /// Check if this is a miss of either kind
    pub fn is_miss(&self) -> bool {
        !self.is_hit()
    }

    /// Extract the value, consuming the result
    pub fn value(self) -> Option<T> {
        match self {
            CacheLookup::Hit(value) => Some(value),
            CacheLookup::Expired | CacheLookup::Miss => None,
        }
    }

    /// Map the value if present
    pub fn map<U, F>(self, f: F) -> CacheLookup<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            CacheLookup::Hit(value) => CacheLookup::Hit(f(value)),
            CacheLookup::Expired => CacheLookup::Expired,
            CacheLookup::Miss => CacheLookup::Miss,
        }
    }
}
