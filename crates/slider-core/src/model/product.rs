// ── Product domain type ──

use serde::{Deserialize, Serialize};

/// A sellable item as it appears in one category of the feed.
///
/// Only `id` is guaranteed. Every other field is `None` when the feed
/// omits it; nothing is back-filled with placeholder values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Feed identifier, kept verbatim (the feed sends numbers as strings).
    pub id: String,
    pub name: Option<String>,
    /// Path fragment, resolved against the image host by `ImageResolver`.
    pub image_path: Option<String>,
    pub rating: Option<f64>,
    pub price: Option<f64>,
    pub additional_photo_paths: Option<Vec<String>>,
}

impl Product {
    /// A product carrying only its identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            image_path: None,
            rating: None,
            price: None,
            additional_photo_paths: None,
        }
    }

    /// Name for display, empty when the feed had none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Price formatted the way the slider shows it: whole rubles only.
    #[allow(clippy::cast_possible_truncation, clippy::as_conversions)]
    pub fn price_label(&self) -> String {
        match self.price {
            Some(price) => format!("{} ₽", price.trunc() as i64),
            None => "price not specified".into(),
        }
    }

    /// Number of extra photos, zero when the wrapper was absent.
    pub fn photo_count(&self) -> usize {
        self.additional_photo_paths.as_ref().map_or(0, Vec::len)
    }
}
