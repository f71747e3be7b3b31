//! Core types for catalog operations

mod entry;
mod formatted;
mod genre;
mod record;
mod result;
mod stats;

pub use entry::CacheEntry;
pub use formatted::FormattedRecord;
pub use genre::{Genre, GenreList, GenreTaxonomy};
pub use record::{CatalogPage, CatalogRecord, MediaKind, TimeWindow};
pub use result::CacheLookup;
pub use stats::CacheStats;
