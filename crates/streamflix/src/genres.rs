//! Genre lookup table

use parking_lot::RwLock;
use tracing::{info, instrument};

use streamflix_core::{CatalogClient, CatalogError, GenreTaxonomy, MediaKind, Result};

/// Name returned for ids missing from the taxonomy
pub const UNKNOWN_GENRE: &str = "Genre inconnu";

/// Id → name table for the movie and TV genre taxonomies.
///
/// Loaded once after the client becomes available and replaced as a whole;
/// a failed load leaves the previous table in place.
#[derive(Debug, Default)]
pub struct GenreIndex {
    taxonomy: RwLock<GenreTaxonomy>,
}

impl GenreIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index pre-populated with `taxonomy`
    pub fn with_taxonomy(taxonomy: GenreTaxonomy) -> Self {
        Self {
            taxonomy: RwLock::new(taxonomy),
        }
    }

    /// Fetch both genre lists concurrently and replace the table.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::GenreLoad`] if either list cannot be fetched.
    /// The table is left untouched in that case.
    #[instrument(skip_all)]
    pub async fn load<C>(&self, client: &C) -> Result<()>
    where
        C: CatalogClient + ?Sized,
    {
        let (movie, tv) = tokio::try_join!(client.movie_genres(), client.tv_genres())
            .map_err(|err| CatalogError::GenreLoad(err.to_string()))?;

        let taxonomy = GenreTaxonomy::new(movie, tv);
        info!(
            movie = taxonomy.movie.len(),
            tv = taxonomy.tv.len(),
            "genre taxonomy loaded"
        );
        self.replace(taxonomy);
        Ok(())
    }

    /// Replace the whole table
    pub fn replace(&self, taxonomy: GenreTaxonomy) {
        *self.taxonomy.write() = taxonomy;
    }

    /// Name of genre `id` within `kind`, or [`UNKNOWN_GENRE`]
    pub fn name_of(&self, id: u32, kind: MediaKind) -> String {
        self.taxonomy
            .read()
            .name_of(id, kind)
            .unwrap_or(UNKNOWN_GENRE)
            .to_string()
    }

    /// Names for a list of ids, in the same order
    pub fn names_of(&self, ids: &[u32], kind: MediaKind) -> Vec<String> {
        let taxonomy = self.taxonomy.read();
        ids.iter()
            .map(|id| taxonomy.name_of(*id, kind).unwrap_or(UNKNOWN_GENRE).to_string())
            .collect()
    }

    /// Copy of the current table
    pub fn snapshot(&self) -> GenreTaxonomy {
        self.taxonomy.read().clone()
    }

    /// Whether nothing has been loaded yet
    pub fn is_empty(&self) -> bool {
        self.taxonomy.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::MockClient;
    use streamflix_core::Genre;

    fn action_only() -> GenreTaxonomy {
        GenreTaxonomy {
            movie: vec![Genre::new(28, "Action")],
            tv: vec![],
        }
    }

    #[test]
    fn test_name_of() {
        let index = GenreIndex::with_taxonomy(action_only());
        assert_eq!(index.name_of(28, MediaKind::Movie), "Action");
        assert_eq!(index.name_of(999, MediaKind::Movie), "Genre inconnu");
        assert_eq!(index.name_of(28, MediaKind::Tv), "Genre inconnu");
    }

    #[test]
    fn test_empty_index_degrades_gracefully() {
        let index = GenreIndex::new();
        assert!(index.is_empty());
        assert_eq!(
            index.names_of(&[1, 2], MediaKind::Tv),
            vec![UNKNOWN_GENRE.to_string(), UNKNOWN_GENRE.to_string()]
        );
    }

    #[tokio::test]
    async fn test_load_replaces_taxonomy() {
        let client = MockClient::new();
        let index = GenreIndex::with_taxonomy(action_only());

        index.load(&client).await.unwrap();

        assert_eq!(index.name_of(35, MediaKind::Movie), "Comédie");
        assert_eq!(index.name_of(18, MediaKind::Tv), "Drame");
        assert_eq!(client.calls("movie_genres"), 1);
        assert_eq!(client.calls("tv_genres"), 1);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_previous_table() {
        let client = MockClient::new();
        client.fail("tv_genres");
        let index = GenreIndex::with_taxonomy(action_only());

        let err = index.load(&client).await.unwrap_err();

        assert!(matches!(err, CatalogError::GenreLoad(_)));
        assert_eq!(index.snapshot(), action_only());
    }
}
