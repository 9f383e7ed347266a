//! End-to-end shopping journeys through the public service APIs.
//!
//! Each test wires the services the same way the CLI does, rooted at a
//! throwaway data directory.

#![allow(clippy::unwrap_used)]

use chrono::Days;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use tangelo_core::{Email, Money, OrderStatus, PaymentMethod, ShipmentStatus};
use tangelo_store::config::StoreConfig;
use tangelo_store::db::{CustomerRepository, OrderRepository, ProductRepository};
use tangelo_store::models::{Address, Customer};
use tangelo_store::seed;
use tangelo_store::services::{
    AuthService, CarrierQuery, CatalogueService, CheckoutService, MockCarrier, PricingEngine,
};
use tangelo_store::session::Session;

/// Everything the CLI constructs, rooted at a temp directory.
struct Harness {
    _dir: TempDir,
    auth: AuthService,
    catalogue: CatalogueService,
    checkout: CheckoutService,
    orders: OrderRepository,
}

impl Harness {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::with_data_dir(dir.path());
        Self {
            auth: AuthService::new(CustomerRepository::new(&config.customers_file())),
            catalogue: CatalogueService::new(ProductRepository::new(&config.products_file())),
            checkout: CheckoutService::new(
                PricingEngine::new(config.tax_rate, config.shipping_cost),
                OrderRepository::new(&config.orders_file()),
            ),
            orders: OrderRepository::new(&config.orders_file()),
            _dir: dir,
        }
    }

    fn register_and_login(&self, email: &str) -> Customer {
        let email = Email::parse(email).unwrap();
        self.auth
            .register(
                "Jane Doe",
                email.clone(),
                "secret",
                Address {
                    street: "42 High St".to_string(),
                    city: "Springfield".to_string(),
                    postal_code: "12345".to_string(),
                    country: "USA".to_string(),
                },
            )
            .unwrap();
        self.auth.login(&email, "secret").unwrap()
    }
}

// ============================================================================
// Full journey
// ============================================================================

#[test]
fn test_register_browse_cart_checkout_track() {
    let harness = Harness::new();
    let customer = harness.register_and_login("jane@example.com");
    let mut session = Session::new(customer);

    let mouse = harness
        .catalogue
        .add_product("Wireless Mouse", "Ergonomic", Money::new(dec!(29.99)), 50)
        .unwrap();
    let hub = harness
        .catalogue
        .add_product("USB Hub", "7 ports", Money::new(dec!(49.99)), 30)
        .unwrap();
    assert_eq!(harness.catalogue.list().len(), 2);

    // Adding the same product twice merges into one line.
    session.cart.add_item(mouse.clone(), 1);
    session.cart.add_item(mouse, 1);
    session.cart.add_item(hub, 1);
    assert_eq!(session.cart.len(), 2);
    assert_eq!(session.cart.subtotal(), Money::new(dec!(109.97)));

    let receipt = harness
        .checkout
        .checkout(&mut session, PaymentMethod::CreditCard)
        .unwrap();
    let order = &receipt.order;

    // Totals: 109.97 subtotal, 10% tax, flat 5.00 shipping.
    assert_eq!(order.subtotal.amount(), dec!(109.97));
    assert_eq!(order.tax_amount.amount(), dec!(10.997));
    assert_eq!(order.shipping_cost.amount(), dec!(5.00));
    assert_eq!(order.total_amount.amount(), dec!(125.967));
    assert_eq!(order.status, OrderStatus::Paid);
    assert!(session.cart.is_empty());

    // Transaction reference carries the method tag and the order fragment.
    assert!(receipt.transaction_ref.starts_with("CC-"));
    assert!(receipt.transaction_ref.ends_with("-SUCCESS"));

    // Invoice snapshots the totals and is due thirty days out.
    let invoice = order.invoice.as_ref().unwrap();
    assert_eq!(invoice.total_amount, order.total_amount);
    assert_eq!(
        invoice.due_date,
        invoice.invoice_date.checked_add_days(Days::new(30)).unwrap()
    );

    // Shipment starts Pending with a derived tracking code.
    let shipment = order.shipment.as_ref().unwrap();
    assert_eq!(shipment.status, ShipmentStatus::Pending);
    assert!(shipment.tracking_code.starts_with("TRACK-"));

    // The saved order is the receipt's order.
    let history = harness.orders.find_by_customer(order.customer_id);
    assert_eq!(history.len(), 1);
    assert_eq!(&history[0], order);

    // Carrier lookups for the same code always agree.
    let carrier = MockCarrier;
    let first = carrier.lookup(&shipment.tracking_code);
    let second = carrier.lookup(&shipment.tracking_code);
    assert_eq!(first, second);
    assert!(ShipmentStatus::CARRIER_REPORTED.contains(&first.status));
}

#[test]
fn test_cart_management_before_checkout() {
    let harness = Harness::new();
    let customer = harness.register_and_login("cart@example.com");
    let mut session = Session::new(customer);

    let keyboard = harness
        .catalogue
        .add_product("Keyboard", "Mechanical", Money::new(dec!(89.99)), 10)
        .unwrap();
    let stand = harness
        .catalogue
        .add_product("Phone Stand", "Aluminium", Money::new(dec!(14.99)), 25)
        .unwrap();

    session.cart.add_item(keyboard.clone(), 1);
    session.cart.add_item(stand.clone(), 3);

    assert!(session.cart.update_quantity(stand.product_id, 1));
    assert!(session.cart.remove_item(keyboard.product_id));
    assert!(!session.cart.remove_item(keyboard.product_id));

    assert_eq!(session.cart.len(), 1);
    assert_eq!(session.cart.subtotal(), Money::new(dec!(14.99)));

    let receipt = harness
        .checkout
        .checkout(&mut session, PaymentMethod::DigitalWallet)
        .unwrap();
    assert_eq!(receipt.order.order_lines.len(), 1);
    assert_eq!(receipt.order.order_lines[0].quantity, 1);
}

#[test]
fn test_orders_accumulate_per_customer() {
    let harness = Harness::new();
    let jane = harness.register_and_login("jane@example.com");
    let product = harness
        .catalogue
        .add_product("Webcam", "1080p", Money::new(dec!(79.99)), 15)
        .unwrap();

    let mut session = Session::new(jane.clone());
    session.cart.add_item(product.clone(), 1);
    let first = harness
        .checkout
        .checkout(&mut session, PaymentMethod::BankTransfer)
        .unwrap();

    session.cart.add_item(product, 2);
    let second = harness
        .checkout
        .checkout(&mut session, PaymentMethod::CreditCard)
        .unwrap();

    let history = harness.orders.find_by_customer(jane.customer_id);
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].order_id, first.order.order_id);
    assert_eq!(history[1].order_id, second.order.order_id);

    // A different customer sees none of them.
    let other = harness.register_and_login("other@example.com");
    assert!(harness.orders.find_by_customer(other.customer_id).is_empty());
}

// ============================================================================
// Seeding
// ============================================================================

#[test]
fn test_seed_populates_catalogue_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::with_data_dir(dir.path());
    let products = ProductRepository::new(&config.products_file());

    let created = seed::sample_products(&products).unwrap();
    assert_eq!(created, 8);

    // A second run leaves the store untouched.
    assert_eq!(seed::sample_products(&products).unwrap(), 0);
    assert_eq!(products.get_all().len(), 8);
}
