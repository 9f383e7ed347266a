//! The interactive console shop.
//!
//! A plain menu loop: every user-facing operation runs to completion before
//! the next input is read. All state lives in the [`Session`] object while a
//! customer is logged in; nothing is global.

use std::io::{self, BufRead, Write};

use tangelo_core::{Email, PaymentMethod};
use tangelo_store::config::StoreConfig;
use tangelo_store::db::{CustomerRepository, OrderRepository, ProductRepository};
use tangelo_store::models::{Address, Order};
use tangelo_store::seed;
use tangelo_store::services::{
    AuthService, CarrierQuery, CatalogueService, CheckoutError, CheckoutService, MockCarrier,
    PricingEngine,
};
use tangelo_store::session::Session;

const RULE: &str = "============================================================";

/// Run the interactive shop until the user exits.
///
/// # Errors
///
/// Returns an error if configuration is invalid, stdin closes, or a
/// repository write fails outside a recoverable flow.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = StoreConfig::from_env()?;

    let products = ProductRepository::new(&config.products_file());
    seed::sample_products(&products)?;

    let shop = Shop {
        auth: AuthService::new(CustomerRepository::new(&config.customers_file())),
        catalogue: CatalogueService::new(products),
        checkout: CheckoutService::new(
            PricingEngine::new(config.tax_rate, config.shipping_cost),
            OrderRepository::new(&config.orders_file()),
        ),
        orders: OrderRepository::new(&config.orders_file()),
        carrier: MockCarrier,
    };
    shop.main_loop()
}

struct Shop {
    auth: AuthService,
    catalogue: CatalogueService,
    checkout: CheckoutService,
    orders: OrderRepository,
    carrier: MockCarrier,
}

impl Shop {
    fn main_loop(&self) -> Result<(), Box<dyn std::error::Error>> {
        println!("\n{RULE}");
        println!("Welcome to the Tangelo shop!");
        println!("{RULE}");

        let mut session: Option<Session> = None;
        loop {
            let keep_running = match session.as_mut() {
                Some(active) => {
                    let (running, logged_out) = self.authenticated_menu(active)?;
                    if logged_out {
                        session = None;
                    }
                    running
                }
                None => {
                    let (running, new_session) = self.unauthenticated_menu()?;
                    if new_session.is_some() {
                        session = new_session;
                    }
                    running
                }
            };
            if !keep_running {
                break;
            }
        }

        println!("\n{RULE}");
        println!("Thank you for shopping with Tangelo. Goodbye!");
        println!("{RULE}");
        Ok(())
    }

    /// Returns (keep running, new session if a login happened).
    fn unauthenticated_menu(&self) -> io::Result<(bool, Option<Session>)> {
        println!("\n{RULE}");
        println!("You are not logged in");
        println!("\n1.  Register");
        println!("2.  Login");
        println!("0.  Exit");
        println!("{RULE}");

        match prompt_choice("\nSelect an option: ", 2)? {
            0 => Ok((false, None)),
            1 => {
                self.register()?;
                // Offer an immediate login after registration.
                let answer = prompt("\nWould you like to login now? (yes/no): ")?;
                if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                    return Ok((true, self.login()?));
                }
                Ok((true, None))
            }
            _ => Ok((true, self.login()?)),
        }
    }

    /// Returns (keep running, logged out).
    fn authenticated_menu(&self, session: &mut Session) -> io::Result<(bool, bool)> {
        println!("\n{RULE}");
        println!("Logged in as: {}", session.customer.name);
        println!("\n1.  Browse Products");
        println!("2.  View Shopping Cart");
        println!("3.  Add to Cart");
        println!("4.  Manage Cart Items");
        println!("5.  Checkout");
        println!("6.  View Order History");
        println!("7.  View Order Details");
        println!("8.  Track Shipment");
        println!("9.  Logout");
        println!("0.  Exit");
        println!("{RULE}");

        match prompt_choice("\nSelect an option: ", 9)? {
            0 => Ok((false, false)),
            1 => {
                self.display_catalogue();
                Ok((true, false))
            }
            2 => {
                view_cart(session);
                Ok((true, false))
            }
            3 => {
                self.add_to_cart(session)?;
                Ok((true, false))
            }
            4 => {
                manage_cart(session)?;
                Ok((true, false))
            }
            5 => {
                self.checkout(session)?;
                Ok((true, false))
            }
            6 => {
                self.order_history(session);
                Ok((true, false))
            }
            7 => {
                self.order_details(session)?;
                Ok((true, false))
            }
            8 => {
                self.track_shipment(session)?;
                Ok((true, false))
            }
            _ => {
                println!("\nLogged out. Your cart has been cleared.");
                Ok((true, true))
            }
        }
    }

    fn register(&self) -> io::Result<()> {
        println!("\n{RULE}");
        println!("REGISTER");
        println!("{RULE}");

        let name = prompt_nonempty("Full name: ")?;
        let email = loop {
            let input = prompt_nonempty("Email: ")?;
            match Email::parse(&input) {
                Ok(email) => break email,
                Err(e) => println!("Invalid email: {e}"),
            }
        };
        let password = prompt_nonempty("Password: ")?;
        let address = Address {
            street: prompt_nonempty("Street: ")?,
            city: prompt_nonempty("City: ")?,
            postal_code: prompt_nonempty("Postal code: ")?,
            country: prompt_nonempty("Country: ")?,
        };

        match self.auth.register(&name, email, &password, address) {
            Ok(customer) => println!(
                "\nCustomer registered successfully! Customer ID: {}",
                customer.customer_id
            ),
            Err(e) => println!("\nRegistration failed: {e}"),
        }
        Ok(())
    }

    fn login(&self) -> io::Result<Option<Session>> {
        println!("\n{RULE}");
        println!("LOGIN");
        println!("{RULE}");

        let email = loop {
            let input = prompt_nonempty("Email: ")?;
            match Email::parse(&input) {
                Ok(email) => break email,
                Err(e) => println!("Invalid email: {e}"),
            }
        };
        let password = prompt_nonempty("Password: ")?;

        match self.auth.login(&email, &password) {
            Ok(customer) => {
                println!("\nLogin successful! Welcome back, {}.", customer.name);
                Ok(Some(Session::new(customer)))
            }
            Err(e) => {
                println!("\nLogin failed: {e}");
                Ok(None)
            }
        }
    }

    fn display_catalogue(&self) {
        let products = self.catalogue.list();
        if products.is_empty() {
            println!("\nNo products available in the catalogue.");
            return;
        }

        println!("\n{RULE}");
        println!("PRODUCT CATALOGUE");
        println!("{RULE}");
        for (i, product) in products.iter().enumerate() {
            println!("\n[{}] {}", i + 1, product.name);
            println!("    ID: {}", product.product_id);
            println!("    Price: {}", product.price);
            println!("    Description: {}", product.description);
            println!("    Available: {} units", product.quantity_available);
        }
        println!("\n{RULE}");
    }

    fn add_to_cart(&self, session: &mut Session) -> io::Result<()> {
        let products = self.catalogue.list();
        if products.is_empty() {
            println!("\nNo products available to add.");
            return Ok(());
        }

        println!("\n{RULE}");
        println!("ADD TO CART");
        println!("{RULE}");
        for (i, product) in products.iter().enumerate() {
            println!(
                "[{}] {} - {} ({} available)",
                i + 1,
                product.name,
                product.price,
                product.quantity_available
            );
        }

        let choice = prompt_choice_in_range("\nSelect a product: ", products.len())?;
        let Some(product) = products.get(choice - 1) else {
            return Ok(());
        };
        let quantity = prompt_quantity("Quantity: ")?;

        session.cart.add_item(product.clone(), quantity);
        println!("\nAdded {} x{} to your cart.", product.name, quantity);
        Ok(())
    }

    fn checkout(&self, session: &mut Session) -> io::Result<()> {
        if session.cart.is_empty() {
            println!("\nYour shopping cart is empty. Add items before checking out.");
            return Ok(());
        }

        println!("\n{RULE}");
        println!("CHECKOUT");
        println!("{RULE}");

        // Preview the totals before asking for a payment method.
        let mut preview = Order::from_cart(&session.cart);
        self.checkout.pricing().price(&mut preview);
        print_order_lines(&preview);
        print_totals(&preview);

        println!("\nSelect payment method:");
        for (i, method) in PaymentMethod::ALL.iter().enumerate() {
            println!("{}. {}", i + 1, method.label());
        }
        let choice =
            prompt_choice_in_range("\nSelect payment method: ", PaymentMethod::ALL.len())?;
        let Some(method) = PaymentMethod::ALL.get(choice - 1).copied() else {
            return Ok(());
        };

        println!("\nProcessing payment with {}...", method.label());
        match self.checkout.checkout(session, method) {
            Ok(receipt) => {
                let order = &receipt.order;
                println!("Payment successful! Transaction ID: {}", receipt.transaction_ref);
                println!("\n{RULE}");
                println!("ORDER COMPLETED SUCCESSFULLY!");
                println!("{RULE}");
                println!("Order ID: {}", order.order_id);
                if let Some(invoice) = &order.invoice {
                    println!("Invoice ID: {}", invoice.invoice_id);
                }
                if let Some(shipment) = &order.shipment {
                    println!("Shipment Tracking: {}", shipment.tracking_code);
                }
                println!("{RULE}");
            }
            Err(CheckoutError::Repository(e)) => {
                println!("\nCould not save your order: {e}");
            }
            Err(e) => println!("\nCheckout failed: {e}"),
        }
        Ok(())
    }

    fn order_history(&self, session: &Session) {
        let orders = self.orders.find_by_customer(session.customer.customer_id);

        println!("\n{RULE}");
        println!("ORDER HISTORY");
        println!("{RULE}");
        if orders.is_empty() {
            println!("\nYou have no orders yet.");
            return;
        }

        println!("\nCustomer: {}", session.customer.name);
        for (i, order) in orders.iter().enumerate() {
            println!(
                "[{}] Order {} - Status: {} - Total: {}",
                i + 1,
                order.order_id,
                order.status,
                order.total_amount
            );
        }
    }

    fn order_details(&self, session: &Session) -> io::Result<()> {
        let orders = self.orders.find_by_customer(session.customer.customer_id);
        if orders.is_empty() {
            println!("\nYou have no orders yet.");
            return Ok(());
        }

        println!("\n{RULE}");
        println!("ORDER DETAILS");
        println!("{RULE}");
        for (i, order) in orders.iter().enumerate() {
            println!("[{}] Order {} ({})", i + 1, order.order_id, order.status);
        }

        let choice = prompt_choice_in_range("\nSelect order: ", orders.len())?;
        let Some(order) = orders.get(choice - 1) else {
            return Ok(());
        };

        println!("\nOrder ID: {}", order.order_id);
        println!("Placed: {}", order.created_at.format("%Y-%m-%d %H:%M UTC"));
        println!("Status: {}", order.status);
        print_order_lines(order);
        print_totals(order);
        if let Some(invoice) = &order.invoice {
            println!("\nInvoice {} - issued {}, due {}", invoice.invoice_id, invoice.invoice_date, invoice.due_date);
        }
        if let Some(shipment) = &order.shipment {
            println!(
                "Shipment {} - Tracking: {} - Status: {}",
                shipment.shipment_id, shipment.tracking_code, shipment.status
            );
        }
        Ok(())
    }

    fn track_shipment(&self, session: &Session) -> io::Result<()> {
        let orders = self.orders.find_by_customer(session.customer.customer_id);
        let shipped: Vec<&Order> = orders.iter().filter(|o| o.shipment.is_some()).collect();
        if shipped.is_empty() {
            println!("\nYou have no shipments to track.");
            return Ok(());
        }

        println!("\n{RULE}");
        println!("TRACK SHIPMENT");
        println!("{RULE}");
        for (i, order) in shipped.iter().enumerate() {
            if let Some(shipment) = &order.shipment {
                println!(
                    "[{}] Order {} - Tracking: {}",
                    i + 1,
                    order.order_id,
                    shipment.tracking_code
                );
            }
        }

        let choice = prompt_choice_in_range("\nSelect order: ", shipped.len())?;
        let Some(order) = shipped.get(choice - 1) else {
            return Ok(());
        };
        let Some(shipment) = &order.shipment else {
            return Ok(());
        };

        let info = self.carrier.lookup(&shipment.tracking_code);
        println!("\n{RULE}");
        println!("TRACKING INFORMATION");
        println!("{RULE}");
        println!("\nOrder ID: {}", order.order_id);
        println!("Tracking code: {}", shipment.tracking_code);
        println!("Status: {}", info.status);
        println!("Estimated delivery: {}", info.estimated_delivery);
        Ok(())
    }
}

fn view_cart(session: &Session) {
    println!("\n{RULE}");
    println!("SHOPPING CART");
    println!("{RULE}");
    if session.cart.is_empty() {
        println!("\nYour cart is empty.");
        return;
    }

    for (i, item) in session.cart.items().enumerate() {
        println!(
            "[{}] {} x{} @ {} = {}",
            i + 1,
            item.product.name,
            item.quantity,
            item.product.price,
            item.subtotal()
        );
    }
    println!("\nSubtotal: {}", session.cart.subtotal());
}

fn manage_cart(session: &mut Session) -> io::Result<()> {
    if session.cart.is_empty() {
        println!("\nYour cart is empty.");
        return Ok(());
    }

    view_cart(session);
    let items: Vec<_> = session.cart.items().cloned().collect();
    let choice = prompt_choice_in_range("\nSelect item: ", items.len())?;
    let Some(item) = items.get(choice - 1) else {
        return Ok(());
    };
    let product_id = item.product.product_id;

    println!("\n1.  Update quantity");
    println!("2.  Remove item");
    match prompt_choice_in_range("\nSelect action: ", 2)? {
        1 => {
            let quantity = prompt_quantity("New quantity: ")?;
            if session.cart.update_quantity(product_id, quantity) {
                println!("\nQuantity updated.");
            }
        }
        _ => {
            if session.cart.remove_item(product_id) {
                println!("\nItem removed.");
            }
        }
    }
    Ok(())
}

fn print_order_lines(order: &Order) {
    println!("\nOrder Summary:");
    println!("------------------------------------------------------------");
    for line in &order.order_lines {
        println!(
            "  {} x{} @ {} = {}",
            line.product_name, line.quantity, line.unit_price, line.line_total
        );
    }
    println!("------------------------------------------------------------");
}

fn print_totals(order: &Order) {
    println!("Subtotal:      {}", order.subtotal);
    println!("Tax:           {}", order.tax_amount);
    println!("Shipping:      {}", order.shipping_cost);
    println!("TOTAL:         {}", order.total_amount);
}

// ============================================================================
// Input helpers
// ============================================================================

/// Read one trimmed line of input after showing a prompt.
fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed",
        ));
    }
    Ok(line.trim().to_string())
}

/// Prompt until the user enters a non-empty value.
fn prompt_nonempty(label: &str) -> io::Result<String> {
    loop {
        let value = prompt(label)?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("A value is required.");
    }
}

/// Prompt until the user enters an integer in `0..=max`.
fn prompt_choice(label: &str, max: usize) -> io::Result<usize> {
    loop {
        let value = prompt(label)?;
        match value.parse::<usize>() {
            Ok(choice) if choice <= max => return Ok(choice),
            _ => println!("Please enter a number between 0 and {max}."),
        }
    }
}

/// Prompt until the user enters an integer in `1..=max`.
fn prompt_choice_in_range(label: &str, max: usize) -> io::Result<usize> {
    loop {
        let value = prompt(label)?;
        match value.parse::<usize>() {
            Ok(choice) if (1..=max).contains(&choice) => return Ok(choice),
            _ => println!("Please enter a number between 1 and {max}."),
        }
    }
}

/// Prompt until the user enters a positive quantity.
fn prompt_quantity(label: &str) -> io::Result<u32> {
    loop {
        let value = prompt(label)?;
        match value.parse::<u32>() {
            Ok(quantity) if quantity > 0 => return Ok(quantity),
            _ => println!("Please enter a positive whole number."),
        }
    }
}
