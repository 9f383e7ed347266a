//! Order repository.

use std::path::Path;

use tangelo_core::{CustomerId, OrderId};

use crate::models::Order;

use super::{JsonCollection, RepositoryError};

/// Repository for order records (with nested invoice and shipment), keyed by
/// order ID and queryable by customer.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    collection: JsonCollection<Order>,
}

impl OrderRepository {
    /// Create a repository backed by the given JSON file.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }

    /// Upsert an order: replace the record with the same ID if present,
    /// otherwise append. Saving the same ID twice never duplicates.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the collection cannot be rewritten.
    pub fn save(&self, order: &Order) -> Result<(), RepositoryError> {
        let mut orders = self.collection.load();
        match orders.iter_mut().find(|o| o.order_id == order.order_id) {
            Some(existing) => *existing = order.clone(),
            None => orders.push(order.clone()),
        }
        self.collection.store(&orders)
    }

    /// Find an order by ID.
    #[must_use]
    pub fn find_by_id(&self, order_id: OrderId) -> Option<Order> {
        self.collection
            .load()
            .into_iter()
            .find(|o| o.order_id == order_id)
    }

    /// All orders for one customer, in storage (insertion) order.
    #[must_use]
    pub fn find_by_customer(&self, customer_id: CustomerId) -> Vec<Order> {
        self.collection
            .load()
            .into_iter()
            .filter(|o| o.customer_id == customer_id)
            .collect()
    }

    /// All orders, in storage order.
    #[must_use]
    pub fn get_all(&self) -> Vec<Order> {
        self.collection.load()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use tangelo_core::{Money, OrderStatus};

    use super::*;

    fn repo(dir: &tempfile::TempDir) -> OrderRepository {
        OrderRepository::new(&dir.path().join("orders.json"))
    }

    fn order_for(customer_id: CustomerId) -> Order {
        let mut order = Order::new(customer_id);
        order.calculate_totals(dec!(0.10), Money::new(dec!(5.00)));
        order
    }

    #[test]
    fn test_save_and_find_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);
        let order = order_for(CustomerId::generate());
        repo.save(&order).unwrap();

        assert_eq!(repo.find_by_id(order.order_id).unwrap(), order);
        assert!(repo.find_by_id(OrderId::generate()).is_none());
    }

    #[test]
    fn test_save_same_id_twice_keeps_one_record() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);
        let mut order = order_for(CustomerId::generate());
        repo.save(&order).unwrap();

        order.mark_paid();
        repo.save(&order).unwrap();

        let all = repo.get_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, OrderStatus::Paid);
    }

    #[test]
    fn test_find_by_customer_filters_and_keeps_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo(&dir);
        let alice = CustomerId::generate();
        let bob = CustomerId::generate();

        let first = order_for(alice);
        let other = order_for(bob);
        let second = order_for(alice);
        repo.save(&first).unwrap();
        repo.save(&other).unwrap();
        repo.save(&second).unwrap();

        let orders = repo.find_by_customer(alice);
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].order_id, first.order_id);
        assert_eq!(orders[1].order_id, second.order_id);

        assert!(repo.find_by_customer(CustomerId::generate()).is_empty());
    }

    #[test]
    fn test_corrupt_store_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.json");
        std::fs::write(&path, "[{\"broken\":").unwrap();

        let repo = OrderRepository::new(&path);
        assert!(repo.get_all().is_empty());

        // The next save replaces the corrupt file.
        let order = order_for(CustomerId::generate());
        repo.save(&order).unwrap();
        assert_eq!(repo.get_all().len(), 1);
    }
}
