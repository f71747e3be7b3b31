//! Display projection of a catalog record

use serde::Serialize;

use super::record::MediaKind;

/// Read-only view of a [`CatalogRecord`](super::CatalogRecord) ready for rendering.
///
/// Built on demand for every render, never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedRecord {
    pub id: u64,
    pub kind: MediaKind,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub overview: String,
    pub date: Option<String>,
    pub year: String,
    pub rating: Option<f64>,
    pub vote_count: Option<u64>,
    pub popularity: Option<f64>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub genre_ids: Vec<u32>,
    pub genres: Vec<String>,
    pub adult: bool,
    pub original_language: Option<String>,
    pub media_type: String,
    pub origin_country: Vec<String>,
    pub poster_url: Option<String>,
    pub backdrop_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub formatted_rating: String,
    pub formatted_date: String,
    pub formatted_runtime: String,
    pub truncated_overview: String,
}
