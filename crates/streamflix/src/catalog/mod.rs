//! Cache-first catalog facade

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use serde_json::{Value, json};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use streamflix_core::{
    CacheKey, CacheLookup, CacheMetrics, CacheOperation, CacheStats, CatalogClient, CatalogError,
    CatalogPage, CatalogRecord, Endpoint, EvictionReason, FormattedRecord, MediaKind, NoopMetrics,
    RequestKey, Result, TimeWindow,
};
use streamflix_storage::TtlCache;

use crate::config::CatalogConfig;
use crate::gate::ReadinessGate;
use crate::genres::GenreIndex;
use crate::shaping::format_record;

mod coalescer;
use coalescer::Coalescer;

mod fallback;
pub use fallback::{fallback_movies, fallback_tv_shows};

/// A cached response. Pages and single records share one store.
#[derive(Debug, Clone)]
pub(crate) enum Payload {
    Page(Arc<CatalogPage>),
    Record(Arc<CatalogRecord>),
}

/// Values the facade knows how to store in the response cache
trait Cacheable: Sized {
    fn into_payload(value: Arc<Self>) -> Payload;
    fn from_payload(payload: Payload) -> Option<Arc<Self>>;
}

impl Cacheable for CatalogPage {
    fn into_payload(value: Arc<Self>) -> Payload {
        Payload::Page(value)
    }

    fn from_payload(payload: Payload) -> Option<Arc<Self>> {
        match payload {
            Payload::Page(page) => Some(page),
            Payload::Record(_) => None,
        }
    }
}

impl Cacheable for CatalogRecord {
    fn into_payload(value: Arc<Self>) -> Payload {
        Payload::Record(value)
    }

    fn from_payload(payload: Payload) -> Option<Arc<Self>> {
        match payload {
            Payload::Record(record) => Some(record),
            Payload::Page(_) => None,
        }
    }
}

/// Public surface of the catalog layer.
///
/// Every accessor waits for the client to be attached, answers from the
/// response cache when it can, and otherwise asks the catalog service. A
/// failed remote call is never cached and never surfaces: the caller gets the
/// endpoint's fallback data instead. The only error an accessor can return is
/// [`CatalogError::DependencyUnavailable`], and only when a readiness timeout
/// is configured.
///
/// Generic over:
/// - `C`: The catalog client (TMDB over HTTP, or a test double)
/// - `M`: The metrics collector
///
/// Cloning creates a new handle to the SAME cache, gate and genre table.
pub struct CatalogFacade<C, M = NoopMetrics>
where
    C: CatalogClient + ?Sized,
    M: CacheMetrics,
{
    gate: Arc<ReadinessGate<C>>,
    attaching: Arc<Mutex<()>>,
    cache: TtlCache<Payload>,
    genres: Arc<GenreIndex>,
    coalescer: Coalescer<Payload>,
    metrics: Arc<M>,
    config: CatalogConfig,
}

// Constructors for default metrics
impl<C: CatalogClient + ?Sized> CatalogFacade<C, NoopMetrics> {
    /// Create a facade with default configuration and no metrics
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: CatalogConfig) -> Self {
        Self::with_metrics(config, NoopMetrics)
    }
}

impl<C: CatalogClient + ?Sized> Default for CatalogFacade<C, NoopMetrics> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, M> CatalogFacade<C, M>
where
    C: CatalogClient + ?Sized,
    M: CacheMetrics,
{
    /// Create a facade reporting to `metrics`
    pub fn with_metrics(config: CatalogConfig, metrics: M) -> Self {
        Self {
            gate: Arc::new(ReadinessGate::new()),
            attaching: Arc::new(Mutex::new(())),
            cache: TtlCache::new(config.cache.clone()),
            genres: Arc::new(GenreIndex::new()),
            coalescer: Coalescer::new(),
            metrics: Arc::new(metrics),
            config,
        }
    }

    /// Supply the catalog client and release every waiting accessor.
    ///
    /// Loads the genre taxonomy first; a failed load is logged and does not
    /// keep the facade from becoming ready. Returns `false` if a client was
    /// already attached, in which case `client` is dropped. Overlapping calls
    /// run one at a time, so only the winning client's genres are kept.
    pub async fn attach(&self, client: impl Into<Arc<C>>) -> bool {
        let _attaching = self.attaching.lock().await;
        if self.gate.is_ready() {
            debug!("catalog client already attached, ignoring");
            return false;
        }

        let client = client.into();
        let start = Instant::now();
        if let Err(err) = self.genres.load(client.as_ref()).await {
            warn!(error = %err, "genre load failed, keeping previous taxonomy");
        }
        self.metrics
            .record_latency(CacheOperation::LoadGenres, start.elapsed());

        self.gate.open(client)
    }

    /// Wait until a client is attached and return it.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DependencyUnavailable`] if `ready_timeout` is
    /// configured and elapses first.
    pub async fn ready(&self) -> Result<Arc<C>> {
        let start = Instant::now();
        let client = match self.config.ready_timeout {
            Some(timeout) => self.gate.wait_timeout(timeout).await?,
            None => self.gate.wait().await?,
        };
        self.metrics
            .record_latency(CacheOperation::AwaitReady, start.elapsed());
        Ok(client)
    }

    /// Whether a client has been attached
    pub fn is_ready(&self) -> bool {
        self.gate.is_ready()
    }

    /// Popular movies. Serves [`fallback_movies`] on failure.
    pub async fn popular_movies(&self, page: u32) -> Result<Arc<CatalogPage>> {
        let fetched = self
            .cached(Endpoint::PopularMovies, json!({ "page": page }), move |client| async move {
                client.popular_movies(page).await
            })
            .await?;
        Ok(self.or_fallback(Endpoint::PopularMovies, fetched, fallback_movies))
    }

    /// Trending movies over `window`. Serves [`fallback_movies`] on failure.
    pub async fn trending_movies(&self, window: TimeWindow, page: u32) -> Result<Arc<CatalogPage>> {
        let params = json!({ "time_window": window.as_str(), "page": page });
        let fetched = self
            .cached(Endpoint::TrendingMovies, params, move |client| async move {
                client.trending_movies(window, page).await
            })
            .await?;
        Ok(self.or_fallback(Endpoint::TrendingMovies, fetched, fallback_movies))
    }

    /// Popular TV shows. Serves [`fallback_tv_shows`] on failure.
    pub async fn popular_tv_shows(&self, page: u32) -> Result<Arc<CatalogPage>> {
        let fetched = self
            .cached(Endpoint::PopularTv, json!({ "page": page }), move |client| async move {
                client.popular_tv_shows(page).await
            })
            .await?;
        Ok(self.or_fallback(Endpoint::PopularTv, fetched, fallback_tv_shows))
    }

    /// Movies, TV shows and people matching `query`.
    ///
    /// A blank query answers an empty page without touching the cache or the
    /// client, once the facade is ready. Failures also answer an empty page.
    pub async fn search(&self, query: &str, page: u32) -> Result<Arc<CatalogPage>> {
        if query.trim().is_empty() {
            self.ready().await?;
            return Ok(Arc::new(CatalogPage::empty()));
        }

        let owned = query.to_string();
        let fetched = self
            .cached(
                Endpoint::Search,
                json!({ "query": query, "page": page }),
                move |client| async move { client.search_multi(&owned, page).await },
            )
            .await?;
        Ok(self.or_fallback(Endpoint::Search, fetched, CatalogPage::empty))
    }

    /// Full movie record, or `None` if it could not be fetched
    pub async fn movie_details(&self, movie_id: u64) -> Result<Option<Arc<CatalogRecord>>> {
        let fetched = self
            .cached(
                Endpoint::MovieDetails,
                json!({ "movie_id": movie_id }),
                move |client| async move { client.movie_details(movie_id).await },
            )
            .await?;
        Ok(self.or_none(Endpoint::MovieDetails, fetched))
    }

    /// Full TV show record, or `None` if it could not be fetched
    pub async fn tv_show_details(&self, tv_id: u64) -> Result<Option<Arc<CatalogRecord>>> {
        let fetched = self
            .cached(
                Endpoint::TvDetails,
                json!({ "tv_id": tv_id }),
                move |client| async move { client.tv_show_details(tv_id).await },
            )
            .await?;
        Ok(self.or_none(Endpoint::TvDetails, fetched))
    }

    /// Drop every cached response, returning how many there were
    pub fn clear_cache(&self) -> usize {
        let cleared = self.cache.clear();
        info!(entries = cleared, "catalog cache cleared");
        self.metrics
            .record_eviction(EvictionReason::Cleared, cleared as u64);
        self.metrics.record_size(0);
        cleared
    }

    /// Drop expired responses now, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let purged = self.cache.purge_expired();
        if purged > 0 {
            self.metrics
                .record_eviction(EvictionReason::Expired, purged as u64);
            self.metrics.record_size(self.cache.len());
        }
        purged
    }

    /// Response cache introspection
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Genre table used for display
    pub fn genres(&self) -> &GenreIndex {
        &self.genres
    }

    /// Name of genre `id`, or "Genre inconnu"
    pub fn genre_name(&self, id: u32, kind: MediaKind) -> String {
        self.genres.name_of(id, kind)
    }

    /// Names of several genres, in order
    pub fn genre_names(&self, ids: &[u32], kind: MediaKind) -> Vec<String> {
        self.genres.names_of(ids, kind)
    }

    /// Display projection, guessing movie or TV from the record itself
    pub fn format_for_display(&self, record: &CatalogRecord) -> FormattedRecord {
        self.format_for_display_as(record, record.infer_kind())
    }

    /// Display projection of `record` as a `kind` entry
    pub fn format_for_display_as(&self, record: &CatalogRecord, kind: MediaKind) -> FormattedRecord {
        format_record(record, kind, &self.genres, &self.config)
    }

    /// Active configuration
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Shared pipeline behind every accessor: gate, cache lookup, remote call on miss.
    ///
    /// The outer error is the gate; the inner result is the remote outcome.
    async fn cached<T, F, Fut>(
        &self,
        endpoint: Endpoint,
        params: Value,
        fetch: F,
    ) -> Result<Result<Arc<T>>>
    where
        T: Cacheable,
        F: FnOnce(Arc<C>) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let client = self.ready().await?;
        let key = RequestKey::new(endpoint, params).cache_key();

        let start = Instant::now();
        let lookup = self.cache.lookup(&key);
        self.metrics
            .record_latency(CacheOperation::Get, start.elapsed());

        match lookup {
            CacheLookup::Hit(payload) => {
                if let Some(value) = T::from_payload(payload) {
                    debug!(%endpoint, key = %key, "cache hit");
                    self.metrics.record_hit(&key);
                    return Ok(Ok(value));
                }
            }
            CacheLookup::Expired => {
                self.metrics.record_eviction(EvictionReason::Expired, 1);
            }
            CacheLookup::Miss => {}
        }

        debug!(%endpoint, key = %key, "cache miss");
        self.metrics.record_miss(&key);

        let fetched = if self.config.coalesce_requests {
            self.coalescer
                .do_request(&key, || self.fetch_and_store(&key, fetch(client)))
                .await
        } else {
            self.fetch_and_store(&key, fetch(client)).await
        };

        Ok(fetched.and_then(|payload| {
            T::from_payload(payload)
                .ok_or_else(|| CatalogError::Internal(format!("unexpected payload for {key}")))
        }))
    }

    async fn fetch_and_store<T, Fut>(&self, key: &str, request: Fut) -> Result<Payload>
    where
        T: Cacheable,
        Fut: Future<Output = Result<T>>,
    {
        debug!(key = %key, "requesting catalog service");
        let start = Instant::now();
        let result = request.await;
        self.metrics
            .record_latency(CacheOperation::Fetch, start.elapsed());

        let payload = T::into_payload(Arc::new(result?));

        let set_start = Instant::now();
        let evicted = self.cache.set(key, payload.clone());
        self.metrics
            .record_latency(CacheOperation::Set, set_start.elapsed());
        if evicted > 0 {
            self.metrics
                .record_eviction(EvictionReason::Capacity, evicted as u64);
        }
        self.metrics.record_size(self.cache.len());

        Ok(payload)
    }

    fn or_fallback<T, F>(&self, endpoint: Endpoint, fetched: Result<Arc<T>>, fallback: F) -> Arc<T>
    where
        F: FnOnce() -> T,
    {
        match fetched {
            Ok(value) => value,
            Err(err) => {
                self.report_fallback(endpoint, &err);
                Arc::new(fallback())
            }
        }
    }

    fn or_none(&self, endpoint: Endpoint, fetched: Result<Arc<CatalogRecord>>) -> Option<Arc<CatalogRecord>> {
        match fetched {
            Ok(record) => Some(record),
            Err(err) => {
                self.report_fallback(endpoint, &err);
                None
            }
        }
    }

    fn report_fallback(&self, endpoint: Endpoint, err: &CatalogError) {
        warn!(%endpoint, error = %err, "catalog request failed, serving fallback");
        self.metrics.record_fallback(endpoint.as_str());
    }
}

impl<C, M> Clone for CatalogFacade<C, M>
where
    C: CatalogClient + ?Sized,
    M: CacheMetrics,
{
    fn clone(&self) -> Self {
        Self {
            gate: Arc::clone(&self.gate),
            attaching: Arc::clone(&self.attaching),
            cache: self.cache.clone(),
            genres: Arc::clone(&self.genres),
            coalescer: self.coalescer.clone(),
            metrics: Arc::clone(&self.metrics),
            config: self.config.clone(),
        }
    }
}

impl<C, M> fmt::Debug for CatalogFacade<C, M>
where
    C: CatalogClient + ?Sized,
    M: CacheMetrics,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogFacade")
            .field("ready", &self.gate.is_ready())
            .field("cache", &self.cache)
            .field("config", &self.config)
            .finish()
    }
}
