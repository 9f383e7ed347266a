//! Domain models.
//!
//! Record shapes here are contractual: they serialize 1:1 into the JSON
//! collections on disk.

pub mod cart;
pub mod customer;
pub mod order;
pub mod product;

pub use cart::{CartItem, ShoppingCart};
pub use customer::{Address, Customer};
pub use order::{Invoice, Order, OrderLine, Shipment};
pub use product::Product;
