// ── Category domain type ──

use serde::{Deserialize, Serialize};

use super::product::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    /// Products in feed order. May be empty.
    pub products: Vec<Product>,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>, products: Vec<Product>) -> Self {
        Self {
            id,
            name: name.into(),
            products,
        }
    }
}
