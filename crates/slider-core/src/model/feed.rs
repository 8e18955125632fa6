// ── Feed (top-level response) ──

use serde::{Deserialize, Serialize};

use super::category::Category;

/// The only status value that marks a feed as carrying usable data.
pub const SUCCESS_STATUS: &str = "Success";

/// Decoded catalog response.
///
/// A feed whose status is anything other than [`SUCCESS_STATUS`] still
/// decodes; callers must check [`Feed::is_success`] and treat the rest as
/// "no data".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feed {
    pub status: String,
    pub categories: Vec<Category>,
}

impl Feed {
    pub fn new(status: impl Into<String>, categories: Vec<Category>) -> Self {
        Self {
            status: status.into(),
            categories,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SUCCESS_STATUS
    }

    /// Total number of products across all categories.
    pub fn product_count(&self) -> usize {
        self.categories.iter().map(|c| c.products.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Product;

    #[test]
    fn success_is_exact_match() {
        assert!(Feed::new("Success", vec![]).is_success());
        assert!(!Feed::new("success", vec![]).is_success());
        assert!(!Feed::new("Error", vec![]).is_success());
    }

    #[test]
    fn product_count_sums_categories() {
        let feed = Feed::new(
            "Success",
            vec![
                Category::new(1, "A", vec![Product::new("1"), Product::new("2")]),
                Category::new(2, "B", vec![]),
                Category::new(3, "C", vec![Product::new("3")]),
            ],
        );
        assert_eq!(feed.product_count(), 3);
    }
}
