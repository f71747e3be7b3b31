//! Remote catalog client trait

use async_trait::async_trait;

use crate::{CatalogPage, CatalogRecord, GenreList, Result, TimeWindow};

/// Capability surface the facade needs from the remote catalog service.
///
/// Implementations issue the actual network calls and decode payloads. Every
/// failure (connection, non-2xx, decode) is reported as a [`CatalogError`]
/// and never retried by the facade.
///
/// [`CatalogError`]: crate::CatalogError
#[async_trait]
pub trait CatalogClient: Send + Sync + 'static {
    /// Popular movies, one page
    async fn popular_movies(&self, page: u32) -> Result<CatalogPage>;

    /// Trending movies over `window`, one page
    async fn trending_movies(&self, window: TimeWindow, page: u32) -> Result<CatalogPage>;

    /// Popular TV shows, one page
    async fn popular_tv_shows(&self, page: u32) -> Result<CatalogPage>;

    /// Full movie record
    async fn movie_details(&self, movie_id: u64) -> Result<CatalogRecord>;

    /// Full TV show record
    async fn tv_show_details(&self, tv_id: u64) -> Result<CatalogRecord>;

    /// Search across movies, TV shows and people
    async fn search_multi(&self, query: &str, page: u32) -> Result<CatalogPage>;

    /// Movie genre list
    async fn movie_genres(&self) -> Result<GenreList>;

    /// TV genre list
    async fn tv_genres(&self) -> Result<GenreList>;
}
