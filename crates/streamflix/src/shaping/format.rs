//! Display formatting

use chrono::{Datelike, Locale, NaiveDate};
use streamflix_core::{CatalogRecord, FormattedRecord, ImageSize, MediaKind, build_image_url};

use crate::config::CatalogConfig;
use crate::genres::GenreIndex;

pub const UNRATED: &str = "Non noté";
pub const UNKNOWN_DATE: &str = "Date inconnue";
pub const UNKNOWN_YEAR: &str = "Année inconnue";
pub const UNKNOWN_RUNTIME: &str = "Durée inconnue";

const ELLIPSIS: &str = "...";

/// `"8.5/10"`, or [`UNRATED`] when there is no (non-zero) rating
pub fn format_rating(rating: Option<f64>) -> String {
    match rating {
        Some(value) if value != 0.0 => format!("{value:.1}/10"),
        _ => UNRATED.to_string(),
    }
}

/// Parse the leading `YYYY-MM-DD` of a catalog date
pub fn parse_date(date: Option<&str>) -> Option<NaiveDate> {
    let date = date?.trim();
    let day = date.get(..10).unwrap_or(date);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Long-form date in `locale` (`15 janvier 2024` for fr_FR), or [`UNKNOWN_DATE`]
pub fn format_date(date: Option<&str>, locale: Locale) -> String {
    match parse_date(date) {
        Some(day) => day.format_localized("%-d %B %Y", locale).to_string(),
        None => UNKNOWN_DATE.to_string(),
    }
}

/// Year of a catalog date, falling back to its first four digits
pub fn year_of(date: Option<&str>) -> Option<i32> {
    if let Some(day) = parse_date(date) {
        return Some(day.year());
    }
    date?.trim().get(..4)?.parse().ok()
}

/// Year as text, or [`UNKNOWN_YEAR`]
pub fn format_year(date: Option<&str>) -> String {
    year_of(date).map_or_else(|| UNKNOWN_YEAR.to_string(), |year| year.to_string())
}

/// `"45min"`, `"2h 5min"`, or [`UNKNOWN_RUNTIME`] for a missing or zero runtime
pub fn format_runtime(minutes: Option<u32>) -> String {
    match minutes {
        None | Some(0) => UNKNOWN_RUNTIME.to_string(),
        Some(m) if m < 60 => format!("{m}min"),
        Some(m) => format!("{}h {}min", m / 60, m % 60),
    }
}

/// Cut `text` to `max_len` characters, appending `...` only if something was cut
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_len).collect();
    format!("{}{ELLIPSIS}", cut.trim())
}

/// Project `record` for rendering as a `kind` entry.
///
/// Genre names come from `genres`; image URLs, date locale and overview
/// length come from `config`.
pub fn format_record(
    record: &CatalogRecord,
    kind: MediaKind,
    genres: &GenreIndex,
    config: &CatalogConfig,
) -> FormattedRecord {
    let (title, original_title) = match kind {
        MediaKind::Movie => (
            record.title.as_ref().or(record.name.as_ref()),
            record.original_title.as_ref().or(record.original_name.as_ref()),
        ),
        MediaKind::Tv => (
            record.name.as_ref().or(record.title.as_ref()),
            record.original_name.as_ref().or(record.original_title.as_ref()),
        ),
    };
    let date = match kind {
        MediaKind::Movie => record.date(),
        MediaKind::Tv => record
            .first_air_date
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .or(record.date()),
    };
    let genre_ids = record.genre_id_list();
    let image = |path: &Option<String>, size| build_image_url(&config.image_base_url, path.as_deref(), size);

    FormattedRecord {
        id: record.id,
        kind,
        title: title.cloned(),
        original_title: original_title.cloned(),
        overview: record.overview.clone(),
        date: date.map(String::from),
        year: format_year(date),
        rating: record.vote_average,
        vote_count: record.vote_count,
        popularity: record.popularity,
        poster_path: record.poster_path.clone(),
        backdrop_path: record.backdrop_path.clone(),
        genres: genres.names_of(&genre_ids, kind),
        genre_ids,
        adult: record.adult,
        original_language: record.original_language.clone(),
        media_type: record
            .media_type
            .clone()
            .unwrap_or_else(|| kind.as_str().to_string()),
        origin_country: record.origin_country.clone(),
        poster_url: image(&record.poster_path, ImageSize::POSTER),
        backdrop_url: image(&record.backdrop_path, ImageSize::BACKDROP),
        thumbnail_url: image(&record.poster_path, ImageSize::THUMBNAIL),
        formatted_rating: format_rating(record.vote_average),
        formatted_date: format_date(date, config.date_locale),
        formatted_runtime: format_runtime(record.runtime),
        truncated_overview: truncate_text(&record.overview, config.overview_limit),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use streamflix_core::{Genre, GenreTaxonomy};

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(Some(8.5)), "8.5/10");
        assert_eq!(format_rating(Some(7.25)), "7.2/10");
        assert_eq!(format_rating(Some(10.0)), "10.0/10");
        assert_eq!(format_rating(None), "Non noté");
        assert_eq!(format_rating(Some(0.0)), "Non noté");
    }

    #[test]
    fn test_format_date_french() {
        assert_eq!(format_date(Some("2024-01-15"), Locale::fr_FR), "15 janvier 2024");
        assert_eq!(format_date(Some("2023-08-01"), Locale::fr_FR), "1 août 2023");
        assert_eq!(format_date(Some("2024-01-15"), Locale::en_US), "15 January 2024");
    }

    #[test]
    fn test_format_date_unknown() {
        assert_eq!(format_date(None, Locale::fr_FR), "Date inconnue");
        assert_eq!(format_date(Some(""), Locale::fr_FR), "Date inconnue");
        assert_eq!(format_date(Some("bientôt"), Locale::fr_FR), "Date inconnue");
    }

    #[test]
    fn test_year() {
        assert_eq!(format_year(Some("1999-10-15")), "1999");
        assert_eq!(format_year(Some("2025")), "2025");
        assert_eq!(format_year(None), "Année inconnue");
        assert_eq!(year_of(Some("2011-04-17T00:00:00Z")), Some(2011));
    }

    #[test]
    fn test_format_runtime() {
        assert_eq!(format_runtime(None), "Durée inconnue");
        assert_eq!(format_runtime(Some(0)), "Durée inconnue");
        assert_eq!(format_runtime(Some(45)), "45min");
        assert_eq!(format_runtime(Some(60)), "1h 0min");
        assert_eq!(format_runtime(Some(125)), "2h 5min");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("court", 10), "court");
        assert_eq!(truncate_text("exactly ten", 11), "exactly ten");
        assert_eq!(truncate_text("un texte beaucoup trop long", 9), "un texte...");
        // Counts characters, not bytes
        assert_eq!(truncate_text("éééé", 4), "éééé");
        assert_eq!(truncate_text("ééééé", 4), "éééé...");
    }

    #[test]
    fn test_format_record_movie() {
        let genres = GenreIndex::with_taxonomy(GenreTaxonomy {
            movie: vec![Genre::new(28, "Action"), Genre::new(12, "Aventure")],
            tv: vec![],
        });
        let config = CatalogConfig::default().overview_limit(10);
        let record = CatalogRecord {
            id: 7,
            title: Some("Film".into()),
            overview: "Une histoire très longue".into(),
            release_date: Some("2024-01-15".into()),
            vote_average: Some(8.5),
            poster_path: Some("/p.jpg".into()),
            genre_ids: vec![28, 99],
            ..Default::default()
        };

        let formatted = format_record(&record, MediaKind::Movie, &genres, &config);

        assert_eq!(formatted.title.as_deref(), Some("Film"));
        assert_eq!(formatted.genres, vec!["Action", "Genre inconnu"]);
        assert_eq!(formatted.media_type, "movie");
        assert_eq!(formatted.year, "2024");
        assert_eq!(formatted.formatted_rating, "8.5/10");
        assert_eq!(formatted.formatted_date, "15 janvier 2024");
        assert_eq!(formatted.truncated_overview, "Une histoi...");
        assert_eq!(
            formatted.poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/p.jpg")
        );
        assert_eq!(
            formatted.thumbnail_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w342/p.jpg")
        );
        assert!(formatted.backdrop_url.is_none());
        assert_eq!(formatted.formatted_runtime, "Durée inconnue");
    }

    #[test]
    fn test_format_record_tv_prefers_name() {
        let genres = GenreIndex::new();
        let record = CatalogRecord {
            id: 1399,
            title: Some("Alt".into()),
            name: Some("Game of Thrones".into()),
            first_air_date: Some("2011-04-17".into()),
            origin_country: vec!["US".into()],
            ..Default::default()
        };

        let formatted = format_record(&record, MediaKind::Tv, &genres, &CatalogConfig::default());

        assert_eq!(formatted.title.as_deref(), Some("Game of Thrones"));
        assert_eq!(formatted.media_type, "tv");
        assert_eq!(formatted.formatted_date, "17 avril 2011");
        assert_eq!(formatted.origin_country, vec!["US".to_string()]);
        assert_eq!(formatted.formatted_rating, "Non noté");
    }
}
