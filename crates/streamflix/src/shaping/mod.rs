//! Pure data shaping over already-fetched records
//!
//! Nothing here touches the cache or the network.

mod certification;
mod filter;
mod format;
mod sort;

pub use certification::age_certification;
pub use filter::{DEFAULT_MIN_RATING, filter_by_genre, filter_by_rating, filter_by_year, search_local};
pub use format::{
    UNKNOWN_DATE, UNKNOWN_RUNTIME, UNKNOWN_YEAR, UNRATED, format_date, format_rating, format_record,
    format_runtime, format_year, parse_date, truncate_text, year_of,
};
pub use sort::{SortOrder, sort_by_date, sort_by_popularity, sort_by_rating};
