//! streamflix: cache-first, fallback-on-failure catalog layer
//!
//! # Features
//!
//! - **Readiness gate**: accessors wait until a catalog client is attached
//! - **TTL response cache** keyed by endpoint and canonical parameters
//! - **Static fallbacks** so callers never branch on remote failures
//! - **Genre lookup** for both movie and TV taxonomies
//! - **Optional request coalescing** and capacity bound
//! - **Data shaping**: filters, sorts and display formatting
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use streamflix::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let client = TmdbClient::from_env()?;
//!     let catalog: CatalogFacade<TmdbClient> = CatalogFacade::new();
//!     catalog.attach(client).await;
//!
//!     let page = catalog.popular_movies(1).await?;
//!     for movie in sort_by_rating(&page.results, SortOrder::Descending) {
//!         let card = catalog.format_for_display(&movie);
//!         println!("{} ({})", card.title.unwrap_or_default(), card.formatted_rating);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod catalog;
mod config;
mod gate;
mod genres;
pub mod shaping;

// Re-export core
pub use streamflix_core::*;

// Re-export storage
pub use streamflix_storage::{DEFAULT_TTL, TtlCache, TtlCacheConfig};

#[cfg(feature = "tmdb")]
pub use streamflix_tmdb::{TmdbClient, TmdbClientBuilder};

pub use catalog::{CatalogFacade, fallback_movies, fallback_tv_shows};
pub use config::{CatalogConfig, DEFAULT_OVERVIEW_LIMIT};
pub use gate::ReadinessGate;
pub use genres::{GenreIndex, UNKNOWN_GENRE};
pub use shaping::{
    DEFAULT_MIN_RATING, SortOrder, age_certification, filter_by_genre, filter_by_rating,
    filter_by_year, search_local, sort_by_date, sort_by_popularity, sort_by_rating,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        CatalogClient, CatalogConfig, CatalogError, CatalogFacade, CatalogPage, CatalogRecord,
        FormattedRecord, MediaKind, Result, SortOrder, TimeWindow, filter_by_genre,
        filter_by_rating, filter_by_year, sort_by_date, sort_by_popularity, sort_by_rating,
    };

    #[cfg(feature = "tmdb")]
    pub use crate::{TmdbClient, TmdbClientBuilder};
}
