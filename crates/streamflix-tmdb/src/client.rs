//! `TmdbClient` - TMDB API client implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tokio::sync::Mutex;
use tracing::instrument;
use url::Url;

use streamflix_core::{
    CatalogClient, CatalogError, CatalogPage, CatalogRecord, GenreList, Result, TimeWindow,
};

use crate::rate_limiter::RateLimiter;
use crate::types::{Credentials, TmdbErrorResponse};

/// Default base URL for TMDB API v3.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3/";

/// Default response language.
pub const DEFAULT_LANGUAGE: &str = "fr-FR";

/// Default release region.
pub const DEFAULT_REGION: &str = "FR";

/// Environment variable holding a v4 read access token.
pub const ENV_API_TOKEN: &str = "TMDB_API_TOKEN";

/// Environment variable holding a v3 API key.
pub const ENV_API_KEY: &str = "TMDB_API_KEY";

/// Maximum number of retries for HTTP 429 responses.
const MAX_RETRIES: u32 = 3;

/// Backoff step between retries, multiplied by the attempt number.
const RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// Extra payloads requested with movie details.
const MOVIE_APPEND: &str = "videos,credits,release_dates";

/// Extra payloads requested with TV details.
const TV_APPEND: &str = "videos,credits,content_ratings";

/// TMDB API client.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClient {
    /// HTTP client.
    http_client: Client,
    /// Base URL for API requests.
    base_url: Url,
    /// Bearer token or API key.
    credentials: Credentials,
    /// Parameters sent with every request.
    default_params: Vec<(&'static str, String)>,
    /// Backoff step for 429 retries.
    retry_backoff: Duration,
    /// Rate limiter.
    rate_limiter: Arc<Mutex<RateLimiter>>,
}

/// Builder for `TmdbClient`.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbClientBuilder {
    base_url: Option<Url>,
    credentials: Option<Credentials>,
    user_agent: Option<String>,
    language: String,
    region: String,
    include_adult: bool,
    min_interval: Option<Duration>,
    timeout: Option<Duration>,
    retry_backoff: Duration,
}

impl TmdbClientBuilder {
    /// Creates a new builder.
    fn new() -> Self {
        Self {
            base_url: None,
            credentials: None,
            user_agent: None,
            language: String::from(DEFAULT_LANGUAGE),
            region: String::from(DEFAULT_REGION),
            include_adult: false,
            min_interval: None,
            timeout: None,
            retry_backoff: RETRY_BACKOFF,
        }
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Authenticates with a v4 read access token.
    #[must_use]
    pub fn api_token(mut self, token: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::Bearer(token.into()));
        self
    }

    /// Authenticates with a v3 API key.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.credentials = Some(Credentials::ApiKey(key.into()));
        self
    }

    /// Reads credentials from `TMDB_API_TOKEN`, then `TMDB_API_KEY`.
    ///
    /// Leaves the builder unchanged when neither is set.
    #[must_use]
    pub fn credentials_from_env(self) -> Self {
        self.credentials_from(|name| std::env::var(name).ok())
    }

    fn credentials_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        if let Some(token) = non_empty(ENV_API_TOKEN) {
            self.credentials = Some(Credentials::Bearer(token));
        } else if let Some(key) = non_empty(ENV_API_KEY) {
            self.credentials = Some(Credentials::ApiKey(key));
        }
        self
    }

    /// Sets the User-Agent (default: `streamflix/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Sets the response language (default: `fr-FR`).
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the release region (default: `FR`).
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Includes adult titles in results (default: false).
    #[must_use]
    pub const fn include_adult(mut self, include: bool) -> Self {
        self.include_adult = include;
        self
    }

    /// Sets the minimum request interval (default: 25ms).
    #[must_use]
    pub const fn min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = Some(interval);
        self
    }

    /// Sets a per-request timeout (default: none).
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the backoff step between 429 retries (default: 1s).
    #[must_use]
    pub const fn retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] when no credentials are set or the
    /// HTTP client cannot be built.
    pub fn build(self) -> Result<TmdbClient> {
        let credentials = self.credentials.ok_or_else(|| {
            CatalogError::Config(format!(
                "TMDB credentials are required (set {ENV_API_TOKEN} or {ENV_API_KEY})"
            ))
        })?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| CatalogError::Config(format!("invalid default base URL: {e}")))?,
        };

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("streamflix/{}", env!("CARGO_PKG_VERSION")));

        let mut http = Client::builder().user_agent(&user_agent).gzip(true);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http_client = http
            .build()
            .map_err(|e| CatalogError::Config(format!("failed to build HTTP client: {e}")))?;

        let rate_limiter = self
            .min_interval
            .map_or_else(RateLimiter::default, RateLimiter::new);

        let default_params = vec![
            ("language", self.language),
            ("region", self.region),
            ("include_adult", self.include_adult.to_string()),
        ];

        Ok(TmdbClient {
            http_client,
            base_url,
            credentials,
            default_params,
            retry_backoff: self.retry_backoff,
            rate_limiter: Arc::new(Mutex::new(rate_limiter)),
        })
    }
}

impl TmdbClient {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> TmdbClientBuilder {
        TmdbClientBuilder::new()
    }

    /// Builds a client with default settings and credentials from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Config`] when neither `TMDB_API_TOKEN` nor
    /// `TMDB_API_KEY` is set.
    pub fn from_env() -> Result<Self> {
        Self::builder().credentials_from_env().build()
    }

    /// Sends a GET request with auth, default + endpoint params, and rate limiting.
    /// Retries up to `MAX_RETRIES` times on HTTP 429.
    #[instrument(skip_all, fields(path = %path))]
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        self.rate_limiter.lock().await.wait().await;

        let url = self
            .base_url
            .join(path)
            .map_err(|e| CatalogError::Config(format!("failed to join URL path {path}: {e}")))?;

        let mut query: Vec<(&str, String)> = self.default_params.clone();
        query.extend(params.iter().cloned());

        let mut retries = 0u32;
        loop {
            let mut builder = self.http_client.get(url.clone()).query(&query);
            builder = match &self.credentials {
                Credentials::Bearer(token) => builder.bearer_auth(token),
                Credentials::ApiKey(key) => builder.query(&[("api_key", key)]),
            };
            let request = builder
                .build()
                .map_err(|e| CatalogError::Transport(format!("failed to build request {path}: {e}")))?;

            tracing::debug!(url = %redact(request.url()), "TMDB API request");

            let response = self
                .http_client
                .execute(request)
                .await
                .map_err(|e| CatalogError::Transport(format!("request failed {path}: {e}")))?;

            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS {
                retries = retries.saturating_add(1);
                if retries > MAX_RETRIES {
                    return Err(CatalogError::RateLimited {
                        retries: MAX_RETRIES,
                    });
                }
                tracing::warn!(
                    retry = retries,
                    max_retries = MAX_RETRIES,
                    "TMDB API rate limited (429). Retrying..."
                );
                tokio::time::sleep(self.retry_backoff.saturating_mul(retries)).await;
                self.rate_limiter.lock().await.wait().await;
                continue;
            }

            if !status.is_success() {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| String::from("<failed to read body>"));
                let message = match serde_json::from_str::<TmdbErrorResponse>(&body) {
                    Ok(error) => error.status_message,
                    Err(_) => body,
                };
                return Err(CatalogError::Status {
                    status: status.as_u16(),
                    message,
                });
            }

            let body = response
                .text()
                .await
                .map_err(|e| CatalogError::Decode(format!("failed to read body {path}: {e}")))?;
            return serde_json::from_str(&body)
                .map_err(|e| CatalogError::Decode(format!("failed to decode {path}: {e}")));
        }
    }
}

/// URL with the `api_key` value masked, for logging.
fn redact(url: &Url) -> String {
    let mut masked = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "api_key" { String::from("***") } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}

#[async_trait]
impl CatalogClient for TmdbClient {
    #[instrument(skip(self))]
    async fn popular_movies(&self, page: u32) -> Result<CatalogPage> {
        self.get_json("movie/popular", &[("page", page.to_string())])
            .await
    }

    #[instrument(skip(self))]
    async fn trending_movies(&self, window: TimeWindow, page: u32) -> Result<CatalogPage> {
        let path = format!("trending/movie/{}", window.as_str());
        self.get_json(&path, &[("page", page.to_string())]).await
    }

    #[instrument(skip(self))]
    async fn popular_tv_shows(&self, page: u32) -> Result<CatalogPage> {
        self.get_json("tv/popular", &[("page", page.to_string())])
            .await
    }

    #[instrument(skip(self))]
    async fn movie_details(&self, movie_id: u64) -> Result<CatalogRecord> {
        let path = format!("movie/{movie_id}");
        self.get_json(&path, &[("append_to_response", String::from(MOVIE_APPEND))])
            .await
    }

    #[instrument(skip(self))]
    async fn tv_show_details(&self, tv_id: u64) -> Result<CatalogRecord> {
        let path = format!("tv/{tv_id}");
        self.get_json(&path, &[("append_to_response", String::from(TV_APPEND))])
            .await
    }

    #[instrument(skip(self))]
    async fn search_multi(&self, query: &str, page: u32) -> Result<CatalogPage> {
        let params = [("query", String::from(query)), ("page", page.to_string())];
        self.get_json("search/multi", &params).await
    }

    #[instrument(skip(self))]
    async fn movie_genres(&self) -> Result<GenreList> {
        self.get_json("genre/movie/list", &[]).await
    }

    #[instrument(skip(self))]
    async fn tv_genres(&self) -> Result<GenreList> {
        self.get_json("genre/tv/list", &[]).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use std::collections::HashMap;

    use super::*;
    use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const POPULAR_BODY: &str = r#"{
        "page": 1,
        "results": [
            {"id": 550, "title": "Fight Club", "release_date": "1999-10-15", "vote_average": 8.4, "genre_ids": [18]},
            {"id": 680, "title": "Pulp Fiction", "release_date": "1994-09-10", "vote_average": 8.5, "genre_ids": [53, 80]}
        ],
        "total_pages": 500,
        "total_results": 10000
    }"#;

    const EMPTY_BODY: &str = r#"{"page": 1, "results": [], "total_pages": 0, "total_results": 0}"#;

    async fn client_for(server: &MockServer) -> TmdbClient {
        TmdbClient::builder()
            .base_url(format!("{}/3/", server.uri()).parse().unwrap())
            .api_token("test-token")
            .user_agent("test/0.0.0")
            .min_interval(Duration::from_millis(0))
            .retry_backoff(Duration::from_millis(1))
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_requires_credentials() {
        // Arrange & Act
        let result = TmdbClient::builder().user_agent("test/0.0.0").build();

        // Assert
        let err = result.unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
        assert!(err.to_string().contains("TMDB_API_TOKEN"));
    }

    #[test]
    fn test_builder_defaults() {
        // Arrange & Act
        let client = TmdbClient::builder().api_key("k").build().unwrap();

        // Assert
        assert_eq!(client.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(
            client.default_params,
            vec![
                ("language", String::from("fr-FR")),
                ("region", String::from("FR")),
                ("include_adult", String::from("false")),
            ]
        );
    }

    #[test]
    fn test_credentials_prefer_token() {
        // Arrange
        let env: HashMap<&str, &str> = [(ENV_API_TOKEN, "tok"), (ENV_API_KEY, "key")].into();

        // Act
        let builder = TmdbClient::builder().credentials_from(|name| env.get(name).map(|v| v.to_string()));

        // Assert
        assert_eq!(builder.credentials, Some(Credentials::Bearer(String::from("tok"))));
    }

    #[test]
    fn test_credentials_fall_back_to_key() {
        // Arrange
        let env: HashMap<&str, &str> = [(ENV_API_TOKEN, " "), (ENV_API_KEY, "key")].into();

        // Act
        let builder = TmdbClient::builder().credentials_from(|name| env.get(name).map(|v| v.to_string()));

        // Assert
        assert_eq!(builder.credentials, Some(Credentials::ApiKey(String::from("key"))));
    }

    #[test]
    fn test_redact_masks_api_key() {
        // Arrange
        let url = Url::parse("https://api.themoviedb.org/3/movie/popular?api_key=secret&page=1").unwrap();

        // Act
        let redacted = redact(&url);

        // Assert
        assert!(!redacted.contains("secret"));
        assert!(redacted.contains("page=1"));
    }

    #[tokio::test]
    async fn test_popular_movies_via_http() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/popular"))
            .and(query_param("page", "1"))
            .and(query_param("language", "fr-FR"))
            .and(query_param("region", "FR"))
            .and(query_param("include_adult", "false"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_string(POPULAR_BODY))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        // Act
        let page = client.popular_movies(1).await.unwrap();

        // Assert
        assert_eq!(page.total_pages, 500);
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].display_title(), Some("Fight Club"));
    }

    #[tokio::test]
    async fn test_api_key_sent_as_query_param() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/tv/popular"))
            .and(query_param("api_key", "my-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_BODY))
            .expect(1)
            .mount(&server)
            .await;
        let client = TmdbClient::builder()
            .base_url(format!("{}/3/", server.uri()).parse().unwrap())
            .api_key("my-key")
            .min_interval(Duration::from_millis(0))
            .build()
            .unwrap();

        // Act
        let page = client.popular_tv_shows(1).await.unwrap();

        // Assert
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn test_trending_uses_window_path() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/trending/movie/day"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_BODY))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        // Act & Assert
        client.trending_movies(TimeWindow::Day, 2).await.unwrap();
    }

    #[tokio::test]
    async fn test_search_multi_sends_query() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/search/multi"))
            .and(query_param("query", "le dîner de cons"))
            .and(query_param_is_missing("api_key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(POPULAR_BODY))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        // Act
        let page = client.search_multi("le dîner de cons", 1).await.unwrap();

        // Assert
        assert_eq!(page.results.len(), 2);
    }

    #[tokio::test]
    async fn test_movie_details_appends_extras() {
        // Arrange
        let server = MockServer::start().await;
        let body = r#"{
            "id": 550,
            "title": "Fight Club",
            "runtime": 139,
            "genres": [{"id": 18, "name": "Drame"}],
            "release_dates": {"results": [{"iso_3166_1": "FR", "release_dates": [{"certification": "16"}]}]}
        }"#;
        Mock::given(method("GET"))
            .and(path("/3/movie/550"))
            .and(query_param("append_to_response", "videos,credits,release_dates"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        // Act
        let record = client.movie_details(550).await.unwrap();

        // Assert
        assert_eq!(record.runtime, Some(139));
        assert!(record.has_genre(18));
        assert!(record.extra.contains_key("release_dates"));
    }

    #[tokio::test]
    async fn test_tv_details_appends_content_ratings() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/tv/1399"))
            .and(query_param("append_to_response", "videos,credits,content_ratings"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id": 1399, "name": "Game of Thrones"}"#))
            .expect(1)
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        // Act
        let record = client.tv_show_details(1399).await.unwrap();

        // Assert
        assert_eq!(record.name.as_deref(), Some("Game of Thrones"));
    }

    #[tokio::test]
    async fn test_genre_lists() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/genre/movie/list"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"genres":[{"id":28,"name":"Action"},{"id":35,"name":"Comédie"}]}"#),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/3/genre/tv/list"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"genres":[{"id":18,"name":"Drame"}]}"#))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        // Act
        let movie = client.movie_genres().await.unwrap();
        let tv = client.tv_genres().await.unwrap();

        // Assert
        assert_eq!(movie.genres.len(), 2);
        assert_eq!(tv.genres[0].name, "Drame");
    }

    #[tokio::test]
    async fn test_http_error_returns_status() {
        // Arrange
        let server = MockServer::start().await;
        let error_body = r#"{"status_code":7,"status_message":"Invalid API key: You must be granted a valid key.","success":false}"#;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_string(error_body))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        // Act
        let err = client.popular_movies(1).await.unwrap_err();

        // Assert
        assert_eq!(
            err,
            CatalogError::Status {
                status: 401,
                message: String::from("Invalid API key: You must be granted a valid key."),
            }
        );
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_http_error_with_plain_body() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503).set_body_string("upstream down"))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        // Act
        let err = client.popular_movies(1).await.unwrap_err();

        // Assert
        assert_eq!(
            err,
            CatalogError::Status {
                status: 503,
                message: String::from("upstream down"),
            }
        );
    }

    #[tokio::test]
    async fn test_invalid_json_is_decode_error() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        // Act
        let err = client.popular_movies(1).await.unwrap_err();

        // Assert
        assert!(matches!(err, CatalogError::Decode(_)));
    }

    #[tokio::test]
    async fn test_http_429_retries() {
        // Arrange
        let server = MockServer::start().await;
        let error_body = r#"{"status_code":25,"status_message":"Your request count is over the allowed limit.","success":false}"#;

        // Return 429 for all requests: initial + MAX_RETRIES
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).set_body_string(error_body))
            .expect(u64::from(MAX_RETRIES) + 1)
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        // Act
        let err = client.popular_movies(1).await.unwrap_err();

        // Assert
        assert_eq!(err, CatalogError::RateLimited { retries: MAX_RETRIES });
    }

    #[tokio::test]
    async fn test_http_429_then_success() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(POPULAR_BODY))
            .mount(&server)
            .await;
        let client = client_for(&server).await;

        // Act
        let page = client.popular_movies(1).await.unwrap();

        // Assert
        assert_eq!(page.results.len(), 2);
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Arrange
        let client = TmdbClient::builder()
            .base_url(Url::parse("http://127.0.0.1:9/3/").unwrap())
            .api_token("test-token")
            .min_interval(Duration::from_millis(0))
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();

        // Act
        let err = client.movie_genres().await.unwrap_err();

        // Assert
        assert!(matches!(err, CatalogError::Transport(_)));
    }

    #[tokio::test]
    async fn test_rate_limiter_enforces_interval() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_BODY))
            .expect(2)
            .mount(&server)
            .await;
        let client = TmdbClient::builder()
            .base_url(format!("{}/3/", server.uri()).parse().unwrap())
            .api_token("test-token")
            .min_interval(Duration::from_millis(100))
            .build()
            .unwrap();

        // Act
        let start = std::time::Instant::now();
        client.popular_movies(1).await.unwrap();
        client.popular_movies(2).await.unwrap();

        // Assert: at least 100ms between the two requests
        assert!(start.elapsed() >= Duration::from_millis(100));
    }
}
