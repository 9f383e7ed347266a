//! Business services.
//!
//! The checkout sequencer in [`checkout`] is the heart of the store; the
//! rest are the collaborators it composes.

pub mod auth;
pub mod carrier;
pub mod catalogue;
pub mod checkout;
pub mod payment;
pub mod pricing;

pub use auth::{AuthError, AuthService};
pub use carrier::{CarrierQuery, MockCarrier, TrackingInfo};
pub use catalogue::CatalogueService;
pub use checkout::{CheckoutError, CheckoutReceipt, CheckoutService};
pub use payment::{PaymentReceipt, authorize};
pub use pricing::PricingEngine;
