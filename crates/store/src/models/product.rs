//! Catalogue product.

use serde::{Deserialize, Serialize};

use tangelo_core::{Money, ProductId};

/// A product in the catalogue.
///
/// Immutable after creation except `quantity_available`. Checkout freezes
/// the current `price` into each order line, so later catalogue edits never
/// affect placed orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Product description.
    pub description: String,
    /// Current unit price.
    pub price: Money,
    /// Units in stock.
    pub quantity_available: u32,
}

impl Product {
    /// Create a new product with a generated ID.
    #[must_use]
    pub fn new(name: &str, description: &str, price: Money, quantity_available: u32) -> Self {
        Self {
            product_id: ProductId::generate(),
            name: name.to_owned(),
            description: description.to_owned(),
            price,
            quantity_available,
        }
    }
}
