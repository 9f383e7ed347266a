//! Status enums and the payment method vocabulary.

use serde::{Deserialize, Serialize};

/// Order payment status.
///
/// The only modeled transition is `Pending` -> `Paid`, made immediately after
/// payment authorization. Shipment progress is tracked separately on the
/// shipment record and never folds back into the order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Paid => write!(f, "Paid"),
        }
    }
}

/// Shipment progress status.
///
/// The serialized strings are the fixed carrier vocabulary stored in order
/// records, so the serde renames are contractual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ShipmentStatus {
    #[default]
    Pending,
    #[serde(rename = "Order Confirmed")]
    OrderConfirmed,
    Processing,
    Shipped,
    #[serde(rename = "In Transit")]
    InTransit,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    Delivered,
}

impl ShipmentStatus {
    /// The six statuses a carrier lookup can report, in progress order.
    ///
    /// `Pending` is excluded: it is the initial local state before the
    /// carrier has been queried at all.
    pub const CARRIER_REPORTED: [Self; 6] = [
        Self::OrderConfirmed,
        Self::Processing,
        Self::Shipped,
        Self::InTransit,
        Self::OutForDelivery,
        Self::Delivered,
    ];
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "Pending",
            Self::OrderConfirmed => "Order Confirmed",
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::InTransit => "In Transit",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
        };
        write!(f, "{s}")
    }
}

/// Payment method selected at checkout.
///
/// A closed set: the compiler guarantees every variant has an authorizer.
/// Unrecognized method names fail at parse time, which is a caller error
/// rather than a payment decline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DigitalWallet,
    BankTransfer,
}

impl PaymentMethod {
    /// Every supported method, in menu order.
    pub const ALL: [Self; 3] = [Self::CreditCard, Self::DigitalWallet, Self::BankTransfer];

    /// Short tag used as the transaction reference prefix.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::CreditCard => "CC",
            Self::DigitalWallet => "DW",
            Self::BankTransfer => "BT",
        }
    }

    /// Human-readable label for menus and receipts.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::DigitalWallet => "Digital Wallet",
            Self::BankTransfer => "Bank Transfer",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreditCard => write!(f, "credit_card"),
            Self::DigitalWallet => write!(f, "digital_wallet"),
            Self::BankTransfer => write!(f, "bank_transfer"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit_card" => Ok(Self::CreditCard),
            "digital_wallet" => Ok(Self::DigitalWallet),
            "bank_transfer" => Ok(Self::BankTransfer),
            _ => Err(format!("invalid payment method: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_shipment_status_serializes_carrier_vocabulary() {
        let json = serde_json::to_string(&ShipmentStatus::OutForDelivery).unwrap();
        assert_eq!(json, "\"Out for Delivery\"");

        let back: ShipmentStatus = serde_json::from_str("\"In Transit\"").unwrap();
        assert_eq!(back, ShipmentStatus::InTransit);
    }

    #[test]
    fn test_shipment_status_display_matches_serde() {
        for status in ShipmentStatus::CARRIER_REPORTED {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{status}\""));
        }
    }

    #[test]
    fn test_payment_method_from_str() {
        assert_eq!(
            "credit_card".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::CreditCard
        );
        assert_eq!(
            "bank_transfer".parse::<PaymentMethod>().unwrap(),
            PaymentMethod::BankTransfer
        );
        assert!("bitcoin".parse::<PaymentMethod>().is_err());
    }

    #[test]
    fn test_payment_method_display_roundtrip() {
        for method in PaymentMethod::ALL {
            let parsed: PaymentMethod = method.to_string().parse().unwrap();
            assert_eq!(parsed, method);
        }
    }

    #[test]
    fn test_payment_method_tags() {
        assert_eq!(PaymentMethod::CreditCard.tag(), "CC");
        assert_eq!(PaymentMethod::DigitalWallet.tag(), "DW");
        assert_eq!(PaymentMethod::BankTransfer.tag(), "BT");
    }
}
