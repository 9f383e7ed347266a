//! Customer repository.

use std::path::Path;

use tangelo_core::{CustomerId, Email};

use crate::models::Customer;

use super::{JsonCollection, RepositoryError};

/// Repository for customer records, keyed by email.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    collection: JsonCollection<Customer>,
}

impl CustomerRepository {
    /// Create a repository backed by the given JSON file.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }

    /// Upsert a customer: replace the record with the same email if present,
    /// otherwise append.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the collection cannot be rewritten.
    pub fn save(&self, customer: &Customer) -> Result<(), RepositoryError> {
        let mut customers = self.collection.load();
        match customers.iter_mut().find(|c| c.email == customer.email) {
            Some(existing) => *existing = customer.clone(),
            None => customers.push(customer.clone()),
        }
        self.collection.store(&customers)
    }

    /// Find a customer by email.
    #[must_use]
    pub fn find_by_email(&self, email: &Email) -> Option<Customer> {
        self.collection.load().into_iter().find(|c| &c.email == email)
    }

    /// Find a customer by ID.
    #[must_use]
    pub fn find_by_id(&self, customer_id: CustomerId) -> Option<Customer> {
        self.collection
            .load()
            .into_iter()
            .find(|c| c.customer_id == customer_id)
    }

    /// All customers, in storage order.
    #[must_use]
    pub fn get_all(&self) -> Vec<Customer> {
        self.collection.load()
    }

    /// Delete a customer by email. Returns false if no record matched.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the collection cannot be rewritten.
    pub fn delete(&self, email: &Email) -> Result<bool, RepositoryError> {
        let mut customers = self.collection.load();
        let before = customers.len();
        customers.retain(|c| &c.email != email);
        if customers.len() == before {
            return Ok(false);
        }
        self.collection.store(&customers)?;
        Ok(true)
    }
}
