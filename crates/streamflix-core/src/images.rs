//! Image URL construction

/// Default image CDN root of the catalog service
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Image size tiers offered by the image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSize {
    W45,
    W185,
    W300,
    W342,
    W500,
    W780,
    W1280,
    H632,
    Original,
}

impl ImageSize {
    /// Size token as it appears in image URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W45 => "w45",
            ImageSize::W185 => "w185",
            ImageSize::W300 => "w300",
            ImageSize::W342 => "w342",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::W1280 => "w1280",
            ImageSize::H632 => "h632",
            ImageSize::Original => "original",
        }
    }

    /// Tier used for card posters
    pub const POSTER: ImageSize = ImageSize::W500;
    /// Tier used for hero backdrops
    pub const BACKDROP: ImageSize = ImageSize::W1280;
    /// Tier used for carousel thumbnails
    pub const THUMBNAIL: ImageSize = ImageSize::W342;
}

/// Absolute URL of `path` at `size`, or `None` when the record has no image.
///
/// `path` is the value the catalog returns (`/abc.jpg`, leading slash included).
pub fn build_image_url(base_url: &str, path: Option<&str>, size: ImageSize) -> Option<String> {
    let path = path.filter(|p| !p.is_empty())?;
    let base = base_url.trim_end_matches('/');
    if path.starts_with('/') {
        Some(format!("{base}/{}{path}", size.as_str()))
    } else {
        Some(format!("{base}/{}/{path}", size.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_image_url() {
        let url = build_image_url(DEFAULT_IMAGE_BASE_URL, Some("/poster.jpg"), ImageSize::POSTER);
        assert_eq!(
            url.as_deref(),
            Some("https://image.tmdb.org/t/p/w500/poster.jpg")
        );
    }

    #[test]
    fn test_missing_path_yields_none() {
        assert!(build_image_url(DEFAULT_IMAGE_BASE_URL, None, ImageSize::W342).is_none());
        assert!(build_image_url(DEFAULT_IMAGE_BASE_URL, Some(""), ImageSize::W342).is_none());
    }

    #[test]
    fn test_trailing_slash_and_bare_path() {
        let url = build_image_url("http://cdn.local/t/p/", Some("x.png"), ImageSize::Original);
        assert_eq!(url.as_deref(), Some("http://cdn.local/t/p/original/x.png"));
    }
}
