//! Product repository.

use std::path::Path;

use tangelo_core::ProductId;

use crate::models::Product;

use super::{JsonCollection, RepositoryError};

/// Repository for catalogue products, keyed by product ID.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    collection: JsonCollection<Product>,
}

impl ProductRepository {
    /// Create a repository backed by the given JSON file.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }

    /// Upsert a product by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the collection cannot be rewritten.
    pub fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.collection.load();
        match products
            .iter_mut()
            .find(|p| p.product_id == product.product_id)
        {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }
        self.collection.store(&products)
    }

    /// Find a product by ID.
    #[must_use]
    pub fn find_by_id(&self, product_id: ProductId) -> Option<Product> {
        self.collection
            .load()
            .into_iter()
            .find(|p| p.product_id == product_id)
    }

    /// All products, in storage order.
    #[must_use]
    pub fn get_all(&self) -> Vec<Product> {
        self.collection.load()
    }

    /// Delete a product by ID. Returns false if no record matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the collection cannot be rewritten.
    pub fn delete(&self, product_id: ProductId) -> Result<bool, RepositoryError> {
        let mut products = self.collection.load();
        let before = products.len();
        products.retain(|p| p.product_id != product_id);
        if products.len() == before {
            return Ok(false);
        }
        self.collection.store(&products)?;
        Ok(true)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn repo(dir: &tempfile::TempDir) -> ProductRepository {
        ProductRepository::new(&dir.path().join("products.json"))
    }

    fn product(name: &str, price: &str) -> Product {
        Product::new(name, "test", price.parse().unwrap(), 10)
    }

    #[test]
    fn test_save_and_find() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);
        let mouse = product("Wireless Mouse", "29.99");
        repo.save(&mouse).unwrap();

        assert_eq!(repo.find_by_id(mouse.product_id).unwrap(), mouse);
        assert!(repo.find_by_id(ProductId::generate()).is_none());
    }

    #[test]
    fn test_save_upserts_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);
        let mut mouse = product("Wireless Mouse", "29.99");
        repo.save(&mouse).unwrap();

        mouse.quantity_available = 7;
        repo.save(&mouse).unwrap();

        let all = repo.get_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].quantity_available, 7);
    }

    #[test]
    fn test_get_all_keeps_storage_order() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);
        repo.save(&product("Laptop Computer", "1299.99")).unwrap();
        repo.save(&product("USB Hub", "39.99")).unwrap();

        let names: Vec<_> = repo.get_all().into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["Laptop Computer", "USB Hub"]);
    }

    #[test]
    fn test_delete() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);
        let hub = product("USB Hub", "39.99");
        repo.save(&hub).unwrap();

        assert!(repo.delete(hub.product_id).unwrap());
        assert!(!repo.delete(hub.product_id).unwrap());
    }
}
