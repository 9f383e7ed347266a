//! Mocked payment authorization.
//!
//! Each [`PaymentMethod`] variant has an authorizer; the match in
//! [`authorize`] is exhaustive, so adding a method without wiring an
//! authorizer is a compile error. A real gateway would replace the body of a
//! variant arm without touching the checkout sequencing.

use tracing::info;

use tangelo_core::{Money, OrderId, PaymentMethod};

/// The result of a payment authorization attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentReceipt {
    /// Whether the payment was approved.
    pub approved: bool,
    /// Gateway transaction reference.
    pub transaction_ref: String,
}

/// Authorize a payment for an amount against an order reference.
///
/// Every mock variant approves unconditionally and returns a synthetic
/// reference of the form `{TAG}-{order id fragment}-SUCCESS`. No network
/// call occurs.
#[must_use]
pub fn authorize(method: PaymentMethod, amount: Money, order_id: OrderId) -> PaymentReceipt {
    info!(%method, %amount, %order_id, "processing payment");
    let receipt = match method {
        PaymentMethod::CreditCard => mock_approve(PaymentMethod::CreditCard, order_id),
        PaymentMethod::DigitalWallet => mock_approve(PaymentMethod::DigitalWallet, order_id),
        PaymentMethod::BankTransfer => mock_approve(PaymentMethod::BankTransfer, order_id),
    };
    info!(transaction_ref = %receipt.transaction_ref, "payment approved");
    receipt
}

fn mock_approve(method: PaymentMethod, order_id: OrderId) -> PaymentReceipt {
    PaymentReceipt {
        approved: true,
        transaction_ref: format!("{}-{}-SUCCESS", method.tag(), order_id.fragment()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_every_method_approves() {
        let order_id = OrderId::generate();
        for method in PaymentMethod::ALL {
            let receipt = authorize(method, Money::new(dec!(87.467)), order_id);
            assert!(receipt.approved);
        }
    }

    #[test]
    fn test_transaction_ref_format() {
        let order_id = OrderId::generate();
        let receipt = authorize(PaymentMethod::CreditCard, Money::new(dec!(10)), order_id);
        assert_eq!(
            receipt.transaction_ref,
            format!("CC-{}-SUCCESS", order_id.fragment())
        );

        let receipt = authorize(PaymentMethod::BankTransfer, Money::new(dec!(10)), order_id);
        assert!(receipt.transaction_ref.starts_with("BT-"));
        assert!(receipt.transaction_ref.ends_with("-SUCCESS"));
    }
}
