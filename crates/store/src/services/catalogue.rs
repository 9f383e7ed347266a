//! Product catalogue.

use tracing::info;

use tangelo_core::{Money, ProductId};

use crate::db::{ProductRepository, RepositoryError};
use crate::models::Product;

/// Read-mostly view over the product store.
#[derive(Debug, Clone)]
pub struct CatalogueService {
    products: ProductRepository,
}

impl CatalogueService {
    /// Create a catalogue over a product repository.
    #[must_use]
    pub const fn new(products: ProductRepository) -> Self {
        Self { products }
    }

    /// All products, in storage order.
    #[must_use]
    pub fn list(&self) -> Vec<Product> {
        self.products.get_all()
    }

    /// Look up one product. Absent IDs yield `None`, not an error.
    #[must_use]
    pub fn find(&self, product_id: ProductId) -> Option<Product> {
        self.products.find_by_id(product_id)
    }

    /// Add a new product to the catalogue.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the product store cannot be written.
    pub fn add_product(
        &self,
        name: &str,
        description: &str,
        price: Money,
        quantity: u32,
    ) -> Result<Product, RepositoryError> {
        let product = Product::new(name, description, price, quantity);
        self.products.save(&product)?;
        info!(product_id = %product.product_id, name, "product added");
        Ok(product)
    }
}
