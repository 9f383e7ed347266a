//! Sample catalogue data.

use rust_decimal::Decimal;
use tracing::info;

use tangelo_core::Money;

use crate::db::{ProductRepository, RepositoryError};
use crate::models::Product;

/// The demo catalogue: (name, description, price in cents, quantity).
const SAMPLE_PRODUCTS: [(&str, &str, i64, u32); 8] = [
    (
        "Laptop Computer",
        "High-performance laptop for work and gaming",
        1_299_99,
        15,
    ),
    (
        "Wireless Mouse",
        "Ergonomic wireless mouse with silent clicking",
        29_99,
        50,
    ),
    (
        "USB-C Keyboard",
        "Mechanical keyboard with USB-C connection",
        79_99,
        30,
    ),
    (
        "Monitor 27-inch",
        "4K LED monitor with HDR support",
        349_99,
        20,
    ),
    ("Webcam HD", "1080p HD webcam with auto-focus", 59_99, 40),
    (
        "Headphones",
        "Noise-cancelling wireless headphones",
        149_99,
        25,
    ),
    ("Phone Stand", "Adjustable phone stand for desk", 14_99, 100),
    ("USB Hub", "7-port USB 3.0 hub with power adapter", 39_99, 35),
];

/// Populate the product store with sample products.
///
/// Does nothing when products already exist, so repeated runs never
/// duplicate the catalogue. Returns how many products were created.
///
/// # Errors
///
/// Returns `RepositoryError` if the product store cannot be written.
pub fn sample_products(products: &ProductRepository) -> Result<usize, RepositoryError> {
    if !products.get_all().is_empty() {
        info!("products already exist, skipping initialization");
        return Ok(0);
    }

    for (name, description, cents, quantity) in SAMPLE_PRODUCTS {
        let price = Money::new(Decimal::new(cents, 2));
        products.save(&Product::new(name, description, price, quantity))?;
    }

    info!(count = SAMPLE_PRODUCTS.len(), "sample products created");
    Ok(SAMPLE_PRODUCTS.len())
}
