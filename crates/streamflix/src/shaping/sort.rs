//! Sorting over fetched records
//!
//! Every sort works on a copy and leaves the input untouched. Sorts are
//! stable, so records comparing equal keep their input order.

use std::cmp::Ordering;

use chrono::NaiveDate;
use streamflix_core::CatalogRecord;

use super::format::parse_date;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Highest / most recent first
    #[default]
    Descending,
    Ascending,
}

impl SortOrder {
    /// Ascending when `ascending` is set
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Sort by popularity. Missing popularity counts as zero.
pub fn sort_by_popularity(records: &[CatalogRecord], order: SortOrder) -> Vec<CatalogRecord> {
    sorted_by_key(records, order, |r| r.popularity.unwrap_or(0.0))
}

/// Sort by average vote. Unrated records count as zero.
pub fn sort_by_rating(records: &[CatalogRecord], order: SortOrder) -> Vec<CatalogRecord> {
    sorted_by_key(records, order, |r| r.vote_average.unwrap_or(0.0))
}

/// Sort by release or first-air date. Missing or unreadable dates sort as 1970-01-01.
pub fn sort_by_date(records: &[CatalogRecord], order: SortOrder) -> Vec<CatalogRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| order.apply(date_key(a).cmp(&date_key(b))));
    sorted
}

fn sorted_by_key<F>(records: &[CatalogRecord], order: SortOrder, key: F) -> Vec<CatalogRecord>
where
    F: Fn(&CatalogRecord) -> f64,
{
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| order.apply(key(a).total_cmp(&key(b))));
    sorted
}

fn date_key(record: &CatalogRecord) -> NaiveDate {
    parse_date(record.date()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rated(id: u64, rating: Option<f64>) -> CatalogRecord {
        CatalogRecord {
            id,
            vote_average: rating,
            ..Default::default()
        }
    }

    fn dated(id: u64, date: Option<&str>) -> CatalogRecord {
        CatalogRecord {
            id,
            release_date: date.map(String::from),
            ..Default::default()
        }
    }

    fn ids(records: &[CatalogRecord]) -> Vec<u64> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_sort_by_rating_direction() {
        let records = vec![rated(1, Some(5.0)), rated(2, Some(8.0))];

        assert_eq!(ids(&sort_by_rating(&records, SortOrder::default())), vec![2, 1]);
        assert_eq!(ids(&sort_by_rating(&records, SortOrder::Ascending)), vec![1, 2]);
        // Input untouched
        assert_eq!(ids(&records), vec![1, 2]);
    }

    #[test]
    fn test_sort_is_stable() {
        let records = vec![rated(1, Some(7.0)), rated(2, None), rated(3, Some(7.0))];
        assert_eq!(
            ids(&sort_by_rating(&records, SortOrder::Descending)),
            vec![1, 3, 2]
        );
    }

    #[test]
    fn test_sort_by_popularity() {
        let records = vec![
            CatalogRecord {
                id: 1,
                popularity: Some(12.5),
                ..Default::default()
            },
            CatalogRecord {
                id: 2,
                popularity: Some(99.0),
                ..Default::default()
            },
            CatalogRecord {
                id: 3,
                ..Default::default()
            },
        ];
        assert_eq!(
            ids(&sort_by_popularity(&records, SortOrder::Descending)),
            vec![2, 1, 3]
        );
        assert_eq!(
            ids(&sort_by_popularity(&records, SortOrder::from_ascending(true))),
            vec![3, 1, 2]
        );
    }

    #[test]
    fn test_sort_by_date_missing_is_epoch() {
        let records = vec![
            dated(1, Some("2020-05-01")),
            dated(2, None),
            dated(3, Some("2023-01-01")),
            dated(4, Some("1960-01-01")),
        ];

        assert_eq!(
            ids(&sort_by_date(&records, SortOrder::Descending)),
            vec![3, 1, 2, 4]
        );
        assert_eq!(
            ids(&sort_by_date(&records, SortOrder::Ascending)),
            vec![4, 2, 1, 3]
        );
        assert_eq!(date_key(&dated(2, None)), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
    }

    #[test]
    fn test_sort_by_date_uses_first_air_date() {
        let tv = CatalogRecord {
            id: 9,
            first_air_date: Some("2024-03-01".into()),
            ..Default::default()
        };
        let records = vec![dated(1, Some("2022-01-01")), tv];
        assert_eq!(ids(&sort_by_date(&records, SortOrder::Descending)), vec![9, 1]);
    }
}
