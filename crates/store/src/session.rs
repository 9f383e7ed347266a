//! Authenticated session context.
//!
//! One explicit object carries the current customer and their cart through
//! every operation; there is no ambient global session state. The session
//! (and with it the cart) is dropped on logout.

use crate::models::{Customer, ShoppingCart};

/// One authenticated interaction: a customer and their in-memory cart.
#[derive(Debug, Clone)]
pub struct Session {
    /// The authenticated customer.
    pub customer: Customer,
    /// The customer's cart. Never persisted.
    pub cart: ShoppingCart,
}

impl Session {
    /// Start a session with an empty cart.
    #[must_use]
    pub fn new(customer: Customer) -> Self {
        let cart = ShoppingCart::new(customer.customer_id);
        Self { customer, cart }
    }
}
