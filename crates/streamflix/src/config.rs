//! Facade configuration

use std::time::Duration;

use chrono::Locale;
use streamflix_core::DEFAULT_IMAGE_BASE_URL;
use streamflix_storage::TtlCacheConfig;

/// Default overview length before truncation, in characters
pub const DEFAULT_OVERVIEW_LIMIT: usize = 150;

/// Configuration for [`CatalogFacade`](crate::CatalogFacade)
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Response cache settings
    pub cache: TtlCacheConfig,
    /// Collapse concurrent misses on the same key into one remote call
    pub coalesce_requests: bool,
    /// Give up waiting for the client after this long (None = wait forever)
    pub ready_timeout: Option<Duration>,
    /// Maximum overview length in formatted records
    pub overview_limit: usize,
    /// Image CDN root used to build absolute image URLs
    pub image_base_url: String,
    /// Locale for long-form dates
    pub date_locale: Locale,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            cache: TtlCacheConfig::default(),
            coalesce_requests: false,
            ready_timeout: None,
            overview_limit: DEFAULT_OVERVIEW_LIMIT,
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            date_locale: Locale::fr_FR,
        }
    }
}

impl CatalogConfig {
    /// Create config with a specific cache TTL
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            cache: TtlCacheConfig::with_ttl(ttl),
            ..Default::default()
        }
    }

    /// Bound the response cache to `max_capacity` entries
    pub fn capacity(mut self, max_capacity: usize) -> Self {
        self.cache.max_capacity = max_capacity;
        self
    }

    /// Enable in-flight request coalescing
    pub fn coalesce(mut self) -> Self {
        self.coalesce_requests = true;
        self
    }

    /// Fail accessors with `DependencyUnavailable` after `timeout`
    pub fn ready_timeout(mut self, timeout: Duration) -> Self {
        self.ready_timeout = Some(timeout);
        self
    }

    pub fn overview_limit(mut self, limit: usize) -> Self {
        self.overview_limit = limit;
        self
    }

    pub fn image_base_url(mut self, url: impl Into<String>) -> Self {
        self.image_base_url = url.into();
        self
    }

    pub fn date_locale(mut self, locale: Locale) -> Self {
        self.date_locale = locale;
        self
    }
}
