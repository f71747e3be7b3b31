//! Stable filters over fetched records

use streamflix_core::CatalogRecord;

use super::format::year_of;

/// Rating threshold used by the "well rated" shelves
pub const DEFAULT_MIN_RATING: f64 = 7.0;

/// Records tagged with `genre_id`, in input order
pub fn filter_by_genre(records: &[CatalogRecord], genre_id: u32) -> Vec<CatalogRecord> {
    records
        .iter()
        .filter(|r| r.has_genre(genre_id))
        .cloned()
        .collect()
}

/// Records rated at least `min_rating`. Unrated records are dropped.
pub fn filter_by_rating(records: &[CatalogRecord], min_rating: f64) -> Vec<CatalogRecord> {
    records
        .iter()
        .filter(|r| r.vote_average.is_some_and(|v| v >= min_rating))
        .cloned()
        .collect()
}

/// Records released (or first aired) in `year`
pub fn filter_by_year(records: &[CatalogRecord], year: i32) -> Vec<CatalogRecord> {
    records
        .iter()
        .filter(|r| year_of(r.date()) == Some(year))
        .cloned()
        .collect()
}

/// Case-insensitive substring match on title, original title and overview.
///
/// An empty or blank query matches nothing.
pub fn search_local(records: &[CatalogRecord], query: &str) -> Vec<CatalogRecord> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let matches = |text: Option<&str>| text.is_some_and(|t| t.to_lowercase().contains(&needle));
    records
        .iter()
        .filter(|r| {
            matches(r.display_title())
                || matches(r.original_display_title())
                || matches(Some(r.overview.as_str()))
        })
        .cloned()
        .collect()
}
