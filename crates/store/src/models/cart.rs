//! Session-scoped shopping cart.
//!
//! Carts are never persisted: they live only as long as the authenticated
//! session and are destroyed on logout or successful checkout.

use tangelo_core::{CustomerId, Money, ProductId};

use super::product::Product;

/// One product + quantity pair in a cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    /// The product being purchased.
    pub product: Product,
    /// Quantity of the product.
    pub quantity: u32,
}

impl CartItem {
    /// Price × quantity for this item.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// A shopping cart for one customer session.
///
/// Items are kept in insertion order and are unique by product id: adding a
/// product already present increases its quantity instead of duplicating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingCart {
    customer_id: CustomerId,
    items: Vec<CartItem>,
}

impl ShoppingCart {
    /// Create an empty cart for a customer.
    #[must_use]
    pub const fn new(customer_id: CustomerId) -> Self {
        Self {
            customer_id,
            items: Vec::new(),
        }
    }

    /// The customer this cart belongs to.
    #[must_use]
    pub const fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Add a product to the cart, merging with an existing line if present.
    pub fn add_item(&mut self, product: Product, quantity: u32) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.product.product_id == product.product_id)
        {
            item.quantity += quantity;
            return;
        }
        self.items.push(CartItem { product, quantity });
    }

    /// Remove a product from the cart. Returns false if it was not present.
    pub fn remove_item(&mut self, product_id: ProductId) -> bool {
        let before = self.items.len();
        self.items
            .retain(|item| item.product.product_id != product_id);
        self.items.len() < before
    }

    /// Set the quantity of a product already in the cart.
    ///
    /// Returns false if the product is not in the cart.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: u32) -> bool {
        match self
            .items
            .iter_mut()
            .find(|item| item.product.product_id == product_id)
        {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Sum of all item subtotals, before tax and shipping.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// True if the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &CartItem> {
        self.items.iter()
    }
}
