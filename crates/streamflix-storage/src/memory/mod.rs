//! In-memory TTL cache

mod ttl_cache;

pub use ttl_cache::{DEFAULT_TTL, TtlCache, TtlCacheConfig};
