//! The checkout sequencer.
//!
//! Turns the session's cart into a priced, paid, persisted order:
//!
//! 1. refuse an empty cart
//! 2. assemble the order from the cart (prices frozen)
//! 3. price it (subtotal, tax, shipping, total)
//! 4. authorize payment
//! 5. on approval: mark the order `Paid`, generate the invoice, create the
//!    shipment, save the order, clear the cart
//!
//! A declined payment short-circuits before step 5: the order stays
//! `Pending`, nothing is persisted, and the cart is left intact. With the
//! mock authorizers a decline never actually occurs.

use thiserror::Error;
use tracing::{debug, info};

use tangelo_core::PaymentMethod;

use crate::db::{OrderRepository, RepositoryError};
use crate::models::{Invoice, Order, Shipment};
use crate::session::Session;

use super::payment;
use super::pricing::PricingEngine;

/// Checkout failures.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The session cart has no items.
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// The caller named a payment method outside the supported set.
    #[error("unknown payment method: {0}")]
    UnknownPaymentMethod(String),

    /// The gateway declined the payment.
    #[error("payment declined (transaction {transaction_ref})")]
    PaymentDeclined {
        /// Reference returned by the gateway for the declined attempt.
        transaction_ref: String,
    },

    /// The order could not be persisted.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// A completed checkout.
#[derive(Debug, Clone)]
pub struct CheckoutReceipt {
    /// The saved order, with invoice and shipment attached.
    pub order: Order,
    /// Payment transaction reference.
    pub transaction_ref: String,
}

/// Runs the checkout sequence against the order store.
#[derive(Debug, Clone)]
pub struct CheckoutService {
    pricing: PricingEngine,
    orders: OrderRepository,
}

impl CheckoutService {
    /// Create a checkout service.
    #[must_use]
    pub const fn new(pricing: PricingEngine, orders: OrderRepository) -> Self {
        Self { pricing, orders }
    }

    /// The pricing engine used for order totals.
    #[must_use]
    pub const fn pricing(&self) -> &PricingEngine {
        &self.pricing
    }

    /// Check out using a payment method name such as `credit_card`.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::UnknownPaymentMethod` if the name is not a
    /// supported method, otherwise behaves as [`Self::checkout`].
    pub fn checkout_named(
        &self,
        session: &mut Session,
        method: &str,
    ) -> Result<CheckoutReceipt, CheckoutError> {
        let method = method
            .parse::<PaymentMethod>()
            .map_err(|_| CheckoutError::UnknownPaymentMethod(method.to_string()))?;
        self.checkout(session, method)
    }

    /// Check out the session's cart with the chosen payment method.
    ///
    /// On success the cart is cleared and the returned order carries its
    /// invoice and shipment. On any failure the cart is untouched and
    /// nothing has been persisted.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` for an empty cart,
    /// `CheckoutError::PaymentDeclined` if authorization fails, or a
    /// repository error if the order cannot be saved.
    pub fn checkout(
        &self,
        session: &mut Session,
        method: PaymentMethod,
    ) -> Result<CheckoutReceipt, CheckoutError> {
        if session.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let mut order = Order::from_cart(&session.cart);
        debug!(order_id = %order.order_id, lines = order.order_lines.len(), "order assembled");

        self.pricing.price(&mut order);
        debug!(order_id = %order.order_id, total = %order.total_amount, "order priced");

        let receipt = payment::authorize(method, order.total_amount, order.order_id);
        if !receipt.approved {
            // Unreachable with the mock authorizers, but a real gateway
            // must be able to stop checkout here with the order Pending.
            return Err(CheckoutError::PaymentDeclined {
                transaction_ref: receipt.transaction_ref,
            });
        }

        order.mark_paid();
        order.invoice = Some(Invoice::for_order(&order));
        order.shipment = Some(Shipment::for_order(order.order_id));

        self.orders.save(&order)?;
        session.cart.clear();

        info!(
            order_id = %order.order_id,
            transaction_ref = %receipt.transaction_ref,
            "checkout complete"
        );

        Ok(CheckoutReceipt {
            order,
            transaction_ref: receipt.transaction_ref,
        })
    }
}
