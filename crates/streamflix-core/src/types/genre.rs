//! Genre taxonomy

use serde::{Deserialize, Serialize};

use super::record::MediaKind;

/// A single genre entry
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

impl Genre {
    /// Create a genre entry
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Genre list payload (`{"genres": [...]}`)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenreList {
    #[serde(default)]
    pub genres: Vec<Genre>,
}

/// Both genre taxonomies, replaced as a whole on every load
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenreTaxonomy {
    #[serde(default)]
    pub movie: Vec<Genre>,
    #[serde(default)]
    pub tv: Vec<Genre>,
}

impl GenreTaxonomy {
    /// Build a taxonomy from the two genre list payloads
    pub fn new(movie: GenreList, tv: GenreList) -> Self {
        Self {
            movie: movie.genres,
            tv: tv.genres,
        }
    }

    /// Genres of one kind
    pub fn for_kind(&self, kind: MediaKind) -> &[Genre] {
        match kind {
            MediaKind::Movie => &self.movie,
            MediaKind::Tv => &self.tv,
        }
    }

    /// Name of genre `id` within `kind`, if known
    pub fn name_of(&self, id: u32, kind: MediaKind) -> Option<&str> {
        self.for_kind(kind)
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.name.as_str())
    }

    /// Whether neither taxonomy has been populated
    pub fn is_empty(&self) -> bool {
        self.movie.is_empty() && self.tv.is_empty()
    }
}
