//! streamflix-tmdb: TMDB v3 implementation of [`CatalogClient`](streamflix_core::CatalogClient)
//!
//! Every request carries the configured language, region and adult-content
//! flag. Requests are spaced by a minimum interval and HTTP 429 answers are
//! retried with a linear backoff.

mod client;
mod rate_limiter;
mod types;

pub use client::{
    DEFAULT_BASE_URL, DEFAULT_LANGUAGE, DEFAULT_REGION, ENV_API_KEY, ENV_API_TOKEN, TmdbClient,
    TmdbClientBuilder,
};
pub use types::{Credentials, TmdbErrorResponse};
