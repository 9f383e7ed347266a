//! Orders, invoices, and shipments.
//!
//! An [`Order`] exclusively owns its lines and, once payment succeeds, at
//! most one [`Invoice`] and one [`Shipment`]. All three serialize as one
//! nested record in the orders collection.

use chrono::{DateTime, Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tangelo_core::{
    CustomerId, InvoiceId, Money, OrderId, OrderStatus, ProductId, ShipmentId, ShipmentStatus,
};

use super::cart::ShoppingCart;

/// Payment terms applied to invoices, in days.
const INVOICE_TERM_DAYS: u64 = 30;

/// One line of a placed order.
///
/// Immutable once attached to an order: `unit_price` is the catalogue price
/// frozen at assembly time, so later price changes never retroactively
/// affect placed orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    /// The product on this line.
    pub product_id: ProductId,
    /// Product name at order time, kept for display after catalogue edits.
    pub product_name: String,
    /// Quantity ordered.
    pub quantity: u32,
    /// Price per unit at the time of order.
    pub unit_price: Money,
    /// `unit_price` × `quantity`.
    pub line_total: Money,
}

impl OrderLine {
    /// Create a line, freezing the given unit price.
    #[must_use]
    pub fn new(product_id: ProductId, product_name: &str, quantity: u32, unit_price: Money) -> Self {
        Self {
            product_id,
            product_name: product_name.to_owned(),
            quantity,
            unit_price,
            line_total: unit_price * quantity,
        }
    }
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Unique order ID.
    pub order_id: OrderId,
    /// The customer who placed this order.
    pub customer_id: CustomerId,
    /// Line items, in cart order.
    pub order_lines: Vec<OrderLine>,
    /// Sum of line totals. Zero until [`Order::calculate_totals`] runs.
    pub subtotal: Money,
    /// Tax on the subtotal.
    pub tax_amount: Money,
    /// Flat shipping cost.
    pub shipping_cost: Money,
    /// `subtotal + tax_amount + shipping_cost`.
    pub total_amount: Money,
    /// Payment status.
    pub status: OrderStatus,
    /// Order creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Present once payment has succeeded, never detached after.
    pub invoice: Option<Invoice>,
    /// Present once payment has succeeded, never detached after.
    pub shipment: Option<Shipment>,
}

impl Order {
    /// Create an empty `Pending` order for a customer.
    #[must_use]
    pub fn new(customer_id: CustomerId) -> Self {
        Self {
            order_id: OrderId::generate(),
            customer_id,
            order_lines: Vec::new(),
            subtotal: Money::ZERO,
            tax_amount: Money::ZERO,
            shipping_cost: Money::ZERO,
            total_amount: Money::ZERO,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            invoice: None,
            shipment: None,
        }
    }

    /// Assemble an order from a cart: one line per cart item, in cart order,
    /// freezing each product's current price as the unit price.
    ///
    /// Stock levels are not checked or decremented here.
    #[must_use]
    pub fn from_cart(cart: &ShoppingCart) -> Self {
        let mut order = Self::new(cart.customer_id());
        for item in cart.items() {
            order.add_line(OrderLine::new(
                item.product.product_id,
                &item.product.name,
                item.quantity,
                item.product.price,
            ));
        }
        order
    }

    /// Append a line to the order.
    pub fn add_line(&mut self, line: OrderLine) {
        self.order_lines.push(line);
    }

    /// Compute and store subtotal, tax, shipping, and grand total.
    ///
    /// An order with no lines prices to the shipping cost alone; the checkout
    /// flow separately refuses empty carts.
    pub fn calculate_totals(&mut self, tax_rate: Decimal, shipping_cost: Money) {
        self.subtotal = self.order_lines.iter().map(|line| line.line_total).sum();
        self.tax_amount = self.subtotal.apply_rate(tax_rate);
        self.shipping_cost = shipping_cost;
        self.total_amount = self.subtotal + self.tax_amount + self.shipping_cost;
    }

    /// Transition `Pending` -> `Paid`.
    pub const fn mark_paid(&mut self) {
        self.status = OrderStatus::Paid;
    }
}

/// An invoice for a paid order.
///
/// Holds a copy of the order's lines and totals as they stood at payment
/// time, not a live reference: mutating the order afterwards does not touch
/// the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique invoice ID.
    pub invoice_id: InvoiceId,
    /// The invoiced order.
    pub order_id: OrderId,
    /// The billed customer.
    pub customer_id: CustomerId,
    /// Date the invoice was generated.
    pub invoice_date: NaiveDate,
    /// Payment due date, thirty days after the invoice date.
    pub due_date: NaiveDate,
    /// Snapshot of the order lines.
    pub items: Vec<OrderLine>,
    /// Snapshot of the order subtotal.
    pub subtotal: Money,
    /// Snapshot of the tax amount.
    pub tax_amount: Money,
    /// Snapshot of the grand total.
    pub total_amount: Money,
}

impl Invoice {
    /// Generate an invoice snapshotting the order's current lines and totals.
    ///
    /// Call only after payment approval, and once per order: the generator
    /// itself does not guard against double invocation, the checkout
    /// sequencer does.
    #[must_use]
    pub fn for_order(order: &Order) -> Self {
        let invoice_date = Utc::now().date_naive();
        Self {
            invoice_id: InvoiceId::generate(),
            order_id: order.order_id,
            customer_id: order.customer_id,
            invoice_date,
            due_date: invoice_date
                .checked_add_days(Days::new(INVOICE_TERM_DAYS))
                .unwrap_or(invoice_date),
            items: order.order_lines.clone(),
            subtotal: order.subtotal,
            tax_amount: order.tax_amount,
            total_amount: order.total_amount,
        }
    }
}

/// Shipment information for a paid order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    /// Unique shipment ID.
    pub shipment_id: ShipmentId,
    /// The shipped order.
    pub order_id: OrderId,
    /// Human-readable tracking code, derived from the shipment ID.
    pub tracking_code: String,
    /// Last known status. Stale until refreshed by a carrier lookup.
    pub status: ShipmentStatus,
    /// Shipment creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Shipment {
    /// Create a `Pending` shipment for an order with a derived tracking code.
    #[must_use]
    pub fn for_order(order_id: OrderId) -> Self {
        let shipment_id = ShipmentId::generate();
        Self {
            shipment_id,
            order_id,
            tracking_code: format!("TRACK-{}", shipment_id.fragment().to_uppercase()),
            status: ShipmentStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
