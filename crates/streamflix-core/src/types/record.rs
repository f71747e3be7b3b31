//! Catalog payloads as returned by the remote service

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::genre::Genre;

/// Media taxonomy a record or genre belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Feature films
    #[default]
    Movie,
    /// TV series
    Tv,
}

impl MediaKind {
    /// Wire label used by the catalog service
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }
}

/// Window used by the trending endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    /// Last 24 hours
    Day,
    /// Last 7 days
    #[default]
    Week,
}

impl TimeWindow {
    /// Path segment used by the catalog service
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
        }
    }
}

/// A movie, TV show or search hit as returned by the catalog service.
///
/// Records are never mutated once fetched; display shaping produces new
/// values. Fields the service appends to detail payloads (videos, credits,
/// release dates, ...) are kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: u64,
    pub title: Option<String>,
    pub name: Option<String>,
    pub original_title: Option<String>,
    pub original_name: Option<String>,
    #[serde(default)]
    pub overview: String,
    pub release_date: Option<String>,
    pub first_air_date: Option<String>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<u64>,
    pub popularity: Option<f64>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// Present on detail payloads instead of `genre_ids`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<Genre>,
    /// "movie", "tv" or "person" on multi-search hits
    pub media_type: Option<String>,
    pub original_language: Option<String>,
    #[serde(default)]
    pub adult: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub origin_country: Vec<String>,
    /// Minutes, detail payloads only
    pub runtime: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CatalogRecord {
    /// `title` for movies, `name` for TV shows
    pub fn display_title(&self) -> Option<&str> {
        self.title.as_deref().or(self.name.as_deref())
    }

    /// Original-language title, whichever field the kind uses
    pub fn original_display_title(&self) -> Option<&str> {
        self.original_title
            .as_deref()
            .or(self.original_name.as_deref())
    }

    /// Release date for movies, first air date for TV shows.
    ///
    /// The service sends empty strings for unknown dates; those count as absent.
    pub fn date(&self) -> Option<&str> {
        non_empty(self.release_date.as_deref()).or(non_empty(self.first_air_date.as_deref()))
    }

    /// Genre ids from either the list (`genre_ids`) or detail (`genres`) shape
    pub fn genre_id_list(&self) -> Vec<u32> {
        if self.genre_ids.is_empty() {
            self.genres.iter().map(|g| g.id).collect()
        } else {
            self.genre_ids.clone()
        }
    }

    /// Whether `genre_id` is attached to this record
    pub fn has_genre(&self, genre_id: u32) -> bool {
        self.genre_ids.contains(&genre_id) || self.genres.iter().any(|g| g.id == genre_id)
    }

    /// Kind declared by `media_type`, if it names a movie or a TV show
    pub fn declared_kind(&self) -> Option<MediaKind> {
        match self.media_type.as_deref() {
            Some("movie") => Some(MediaKind::Movie),
            Some("tv") => Some(MediaKind::Tv),
            _ => None,
        }
    }

    /// Best guess of the record kind.
    ///
    /// Uses `media_type` when present, otherwise TV-only fields
    /// (`name` / `first_air_date` without a `title`) mark a TV show.
    pub fn infer_kind(&self) -> MediaKind {
        if let Some(kind) = self.declared_kind() {
            return kind;
        }
        if self.title.is_none() && (self.name.is_some() || self.first_air_date.is_some()) {
            MediaKind::Tv
        } else {
            MediaKind::Movie
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// One page of catalog results
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<CatalogRecord>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u32,
}

impl CatalogPage {
    /// A page with no results
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of records on this page
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the page carries no records
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Results whose media type is movie or unspecified
    pub fn movies_only(&self) -> Vec<CatalogRecord> {
        self.results
            .iter()
            .filter(|r| matches!(r.media_type.as_deref(), None | Some("movie")))
            .cloned()
            .collect()
    }
}
