//! Age certification from appended detail data

use serde::Deserialize;
use streamflix_core::CatalogRecord;

/// Countries consulted, in order of preference
const PREFERRED_COUNTRIES: [&str; 2] = ["FR", "US"];

#[derive(Debug, Deserialize)]
struct Results<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct CountryReleases {
    iso_3166_1: String,
    #[serde(default)]
    release_dates: Vec<Release>,
}

#[derive(Debug, Deserialize)]
struct Release {
    #[serde(default)]
    certification: String,
}

#[derive(Debug, Deserialize)]
struct CountryRating {
    iso_3166_1: String,
    #[serde(default)]
    rating: String,
}

/// Age rating of a detail record, preferring France then the US.
///
/// Movies carry it under `release_dates` (first release of the country),
/// TV shows under `content_ratings`. Returns an empty string when neither
/// country has a non-empty rating or the record was not fetched with them.
pub fn age_certification(record: &CatalogRecord) -> String {
    if let Some(value) = record.extra.get("release_dates") {
        if let Ok(releases) = Results::<CountryReleases>::deserialize(value) {
            let found = PREFERRED_COUNTRIES.iter().find_map(|country| {
                releases
                    .results
                    .iter()
                    .find(|r| r.iso_3166_1 == *country)
                    .and_then(|r| r.release_dates.first())
                    .map(|release| release.certification.as_str())
                    .filter(|c| !c.is_empty())
            });
            if let Some(certification) = found {
                return certification.to_string();
            }
        }
    }

    if let Some(value) = record.extra.get("content_ratings") {
        if let Ok(ratings) = Results::<CountryRating>::deserialize(value) {
            let found = PREFERRED_COUNTRIES.iter().find_map(|country| {
                ratings
                    .results
                    .iter()
                    .find(|r| r.iso_3166_1 == *country)
                    .map(|r| r.rating.as_str())
                    .filter(|r| !r.is_empty())
            });
            if let Some(rating) = found {
                return rating.to_string();
            }
        }
    }

    String::new()
}
