//! Order pricing.

use rust_decimal::Decimal;

use tangelo_core::Money;

use crate::models::Order;

/// Computes subtotal, tax, shipping, and grand total for orders.
///
/// Tax is a fixed decimal fraction of the subtotal; shipping is a flat
/// constant regardless of cart size or weight. There is no free-shipping
/// threshold and no currency-specific rounding: amounts stay exact and only
/// round at display time.
#[derive(Debug, Clone, Copy)]
pub struct PricingEngine {
    tax_rate: Decimal,
    shipping_cost: Money,
}

impl PricingEngine {
    /// Create a pricing engine with a tax rate (e.g. `0.10`) and flat
    /// shipping cost.
    #[must_use]
    pub const fn new(tax_rate: Decimal, shipping_cost: Money) -> Self {
        Self {
            tax_rate,
            shipping_cost,
        }
    }

    /// The configured tax rate.
    #[must_use]
    pub const fn tax_rate(&self) -> Decimal {
        self.tax_rate
    }

    /// The configured flat shipping cost.
    #[must_use]
    pub const fn shipping_cost(&self) -> Money {
        self.shipping_cost
    }

    /// Price an order, mutating its stored totals.
    ///
    /// Must run exactly once per order, before payment. Imposes no
    /// restriction of its own on empty orders: no lines prices to the
    /// shipping cost alone.
    pub fn price(&self, order: &mut Order) {
        order.calculate_totals(self.tax_rate, self.shipping_cost);
    }

    /// Tax amount for a given subtotal.
    #[must_use]
    pub fn tax_amount(&self, subtotal: Money) -> Money {
        subtotal.apply_rate(self.tax_rate)
    }

    /// Subtotal plus tax plus shipping.
    #[must_use]
    pub fn total(&self, subtotal: Money) -> Money {
        subtotal + self.tax_amount(subtotal) + self.shipping_cost
    }
}
