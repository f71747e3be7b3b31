//! Core traits for catalog operations

mod client;
mod key;
mod metrics;

#[cfg(feature = "tracing")]
mod tracing;

pub use client::CatalogClient;
pub use key::{CacheKey, Endpoint, RequestKey};
pub use metrics::{CacheMetrics, CacheOperation, EvictionReason, NoopMetrics};

#[cfg(feature = "metrics")]
pub use metrics::MetricsCrateAdapter;

#[cfg(feature = "tracing")]
pub use self::tracing::TracingMetrics;
