//! Static pages served when the catalog service fails

use streamflix_core::{CatalogPage, CatalogRecord};

fn movie(id: u64, title: &str, overview: &str, date: &str, rating: f64, genres: &[u32]) -> CatalogRecord {
    CatalogRecord {
        id,
        title: Some(title.to_string()),
        overview: overview.to_string(),
        release_date: Some(date.to_string()),
        vote_average: Some(rating),
        genre_ids: genres.to_vec(),
        ..Default::default()
    }
}

fn tv_show(id: u64, name: &str, overview: &str, date: &str, rating: f64, genres: &[u32]) -> CatalogRecord {
    CatalogRecord {
        id,
        name: Some(name.to_string()),
        overview: overview.to_string(),
        first_air_date: Some(date.to_string()),
        vote_average: Some(rating),
        genre_ids: genres.to_vec(),
        ..Default::default()
    }
}

/// Movie page returned by the popular and trending accessors on failure
pub fn fallback_movies() -> CatalogPage {
    CatalogPage {
        page: 1,
        results: vec![
            movie(
                1,
                "Film d'Action",
                "Un film d'action palpitant avec des effets spéciaux époustouflants.",
                "2024-01-15",
                8.5,
                &[28, 12],
            ),
            movie(
                2,
                "Comédie Romantique",
                "Une comédie romantique pleine d'humour et d'émotion.",
                "2024-02-14",
                7.8,
                &[35, 10749],
            ),
            movie(
                3,
                "Drame Intense",
                "Un drame poignant qui explore les profondeurs de l'âme humaine.",
                "2024-03-10",
                9.1,
                &[18],
            ),
        ],
        total_pages: 1,
        total_results: 3,
    }
}

/// TV page returned by the popular TV accessor on failure
pub fn fallback_tv_shows() -> CatalogPage {
    CatalogPage {
        page: 1,
        results: vec![
            tv_show(
                1,
                "Série Dramatique",
                "Une série captivante avec des personnages complexes et une intrigue prenante.",
                "2024-01-01",
                8.7,
                &[18, 9648],
            ),
            tv_show(
                2,
                "Thriller Psychologique",
                "Un thriller psychologique qui vous tiendra en haleine.",
                "2024-02-01",
                8.2,
                &[53, 80],
            ),
        ],
        total_pages: 1,
        total_results: 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_movies_shape() {
        let page = fallback_movies();
        assert_eq!(page.len(), 3);
        assert_eq!(page.total_results, 3);
        assert_eq!(page.results[0].display_title(), Some("Film d'Action"));
        assert!(page.results.iter().all(|r| r.poster_path.is_none()));
    }

    #[test]
    fn test_fallback_tv_shape() {
        let page = fallback_tv_shows();
        assert_eq!(page.len(), 2);
        assert_eq!(page.results[1].name.as_deref(), Some("Thriller Psychologique"));
        assert_eq!(page.results[1].date(), Some("2024-02-01"));
    }

    #[test]
    fn test_fallbacks_are_stable() {
        assert_eq!(fallback_movies(), fallback_movies());
        assert_eq!(fallback_tv_shows(), fallback_tv_shows());
    }
}
