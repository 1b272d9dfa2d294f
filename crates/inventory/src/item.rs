use serde::{Deserialize, Serialize};

/// One inventory record.
///
/// The composite key `(code, size)` is unique across the collection. Updates
/// replace `quantity` and `price` wholesale, never field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApparelItem {
    /// Garment style identifier.
    pub code: String,
    /// Size label (e.g. "M", "42").
    pub size: String,
    /// Units in stock.
    pub quantity: u64,
    /// Unit price.
    pub price: f64,
}

impl ApparelItem {
    /// Whether this record is the one stored under `(code, size)`.
    pub fn matches_key(&self, code: &str, size: &str) -> bool {
        self.code == code && self.size == size
    }
}

/// A requested `(code, size, quantity)` triple to be checked against stock.
///
/// Order lines are transient request data; they are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub code: String,
    pub size: String,
    pub quantity: u64,
}
