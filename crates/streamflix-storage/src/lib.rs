//! streamflix-storage: Response cache for the StreamFlix catalog layer

#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "memory")]
pub use memory::{DEFAULT_TTL, TtlCache, TtlCacheConfig};
