//! Customer and address records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tangelo_core::{CustomerId, Email};

/// A physical address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.street, self.city, self.postal_code, self.country
        )
    }
}

/// A registered customer.
///
/// Passwords are stored in the clear; hardening authentication is explicitly
/// out of scope for this demo store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer ID.
    pub customer_id: CustomerId,
    /// Full name.
    pub name: String,
    /// Email address; also the registration/login key.
    pub email: Email,
    /// Plaintext password.
    pub password: String,
    /// Shipping address.
    pub address: Address,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer with a generated ID, stamped now.
    #[must_use]
    pub fn new(name: &str, email: Email, password: &str, address: Address) -> Self {
        Self {
            customer_id: CustomerId::generate(),
            name: name.to_owned(),
            email,
            password: password.to_owned(),
            address,
            created_at: Utc::now(),
        }
    }
}
