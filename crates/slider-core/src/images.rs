// ── Image URL resolution ──
//
// The feed ships image locations as host-relative paths. Turning them into
// absolute URLs is plain concatenation with the image host; fetching and
// caching the images is someone else's job.

use tracing::warn;
use url::Url;

use crate::error::CoreError;
use crate::model::Product;

/// Host the production feed's image paths are relative to.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://szorin.vodovoz.ru";

/// Joins feed image paths onto a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResolver {
    base: Url,
}

impl ImageResolver {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Absolute URL for a feed path such as `/upload/iblock/a1/photo.jpg`.
    ///
    /// The path is appended to the base verbatim (a missing leading `/` is
    /// added), so query strings and percent-escapes in the path survive.
    pub fn resolve(&self, path: &str) -> Result<Url, CoreError> {
        let trimmed = path.trim();
        if trimmed.is_empty() {
            return Err(CoreError::InvalidImagePath {
                path: path.to_owned(),
                reason: "empty path".into(),
            });
        }

        let base = self.base.as_str().trim_end_matches('/');
        let sep = if trimmed.starts_with('/') { "" } else { "/" };
        Url::parse(&format!("{base}{sep}{trimmed}")).map_err(|e| CoreError::InvalidImagePath {
            path: path.to_owned(),
            reason: e.to_string(),
        })
    }

    /// Main picture of `product`, if it has a usable one.
    pub fn product_image(&self, product: &Product) -> Option<Url> {
        product
            .image_path
            .as_deref()
            .and_then(|path| self.resolve_logged(&product.id, path))
    }

    /// Extra photos of `product`; unusable paths are skipped.
    pub fn product_photos(&self, product: &Product) -> Vec<Url> {
        product
            .additional_photo_paths
            .iter()
            .flatten()
            .filter_map(|path| self.resolve_logged(&product.id, path))
            .collect()
    }

    fn resolve_logged(&self, product_id: &str, path: &str) -> Option<Url> {
        match self.resolve(path) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(product = product_id, error = %e, "skipping image path");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn resolver() -> ImageResolver {
        ImageResolver::new(Url::parse(DEFAULT_IMAGE_BASE_URL).unwrap())
    }

    #[test]
    fn resolves_rooted_path() {
        let url = resolver().resolve("/upload/iblock/a1/photo.jpg").unwrap();
        assert_eq!(url.as_str(), "https://szorin.vodovoz.ru/upload/iblock/a1/photo.jpg");
    }

    #[test]
    fn adds_missing_slash() {
        let url = resolver().resolve("upload/photo.jpg").unwrap();
        assert_eq!(url.as_str(), "https://szorin.vodovoz.ru/upload/photo.jpg");
    }

    #[test]
    fn base_with_prefix_is_kept() {
        let r = ImageResolver::new(Url::parse("https://cdn.example.com/media/").unwrap());
        let url = r.resolve("/a.png").unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.com/media/a.png");
    }

    #[test]
    fn empty_path_is_rejected() {
        let err = resolver().resolve("  ").unwrap_err();
        assert!(matches!(err, CoreError::InvalidImagePath { .. }));
    }

    #[test]
    fn product_without_picture_has_no_image() {
        assert_eq!(resolver().product_image(&Product::new("1")), None);
    }

    #[test]
    fn product_photos_skip_blank_entries() {
        let mut p = Product::new("1");
        p.additional_photo_paths = Some(vec!["/a.jpg".into(), String::new(), "/b.jpg".into()]);
        let urls = resolver().product_photos(&p);
        assert_eq!(urls.len(), 2);
        assert!(urls[1].as_str().ends_with("/b.jpg"));
    }
}
