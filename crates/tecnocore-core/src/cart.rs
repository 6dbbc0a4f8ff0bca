//! # Shopping Cart
//!
//! The cart holds an ordered collection of line items for the current
//! browsing session. It is ephemeral: unlike order history it is never
//! persisted, and it is cleared the moment an order is confirmed.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  UI Action                Operation               Cart State Change     │
//! │  ───────────              ─────────────           ─────────────────     │
//! │  Click Product ─────────► add_item() ───────────► merge or append       │
//! │  Change Quantity ───────► update_quantity() ────► qty = n (0 deletes)   │
//! │  Click Remove ──────────► remove_item() ────────► line deleted          │
//! │  Order Confirmed ───────► clear() ──────────────► items emptied         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Item ids are unique within the cart (adding the same product merges
//!   quantities)
//! - `quantity >= 1` for every present line; a line reaching 0 is deleted,
//!   never retained at zero
//! - Insertion order is preserved for display

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Cart Item
// =============================================================================

/// One product entry in the cart with its own quantity.
///
/// The price is frozen at the moment of adding: catalog updates after that
/// point do not affect lines already in the cart, and a confirmed order
/// carries these frozen values forward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product id (catalog identifier).
    pub id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Optional description shown in the drawer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unit price in base-currency cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Quantity in cart. Always >= 1 while the line exists.
    pub quantity: i64,
}

impl CartItem {
    /// Creates a line with quantity 1.
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Money) -> Self {
        CartItem {
            id: id.into(),
            name: name.into(),
            description: None,
            unit_price_cents: unit_price.cents(),
            quantity: 1,
        }
    }

    /// Sets the quantity (builder style).
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the description (builder style).
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Returns the line total as Money.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents())
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in insertion order.
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds an item to the cart.
    ///
    /// ## Behavior
    /// - If a line with the same `id` exists: its quantity grows by the new
    ///   item's quantity (re-add of the same product)
    /// - Otherwise: the item is appended as a new line
    pub fn add_item(&mut self, item: CartItem) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            existing.quantity += item.quantity;
            return;
        }
        self.items.push(item);
    }

    /// Removes a line by product id. Silently does nothing if absent.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|i| i.id != id);
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0` is equivalent to [`Cart::remove_item`]
    /// - Unknown ids are silently ignored
    pub fn update_quantity(&mut self, id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity;
        }
    }

    /// Clears all items. Called after successful order confirmation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total quantity across all lines (the badge number).
    pub fn total_item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of line totals in base-currency cents.
    pub fn total_price_cents(&self) -> i64 {
        self.items.iter().map(|i| i.line_total_cents()).sum()
    }

    /// Sum of line totals as Money.
    pub fn total_price(&self) -> Money {
        Money::from_cents(self.total_price_cents())
    }
}

// =============================================================================
// Cart Totals Summary
// =============================================================================

/// Cart totals summary for display surfaces (drawer, badge).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub line_count: usize,
    pub total_item_count: i64,
    pub total_price_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.len(),
            total_item_count: cart.total_item_count(),
            total_price_cents: cart.total_price_cents(),
        }
    }
}

// =============================================================================
// Shared Cart Handle
// =============================================================================

/// Shared, session-scoped cart handle.
///
/// The cart has a single conceptual writer (the UI event loop), but display
/// surfaces and the checkout workflow hold the same cart. `Arc<Mutex<_>>`
/// keeps every access exclusive; operations are short and never await while
/// holding the lock.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(CartTotals::from);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(|e| e.into_inner());
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(item));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut cart)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price_major: i64, qty: i64) -> CartItem {
        CartItem::new(id, format!("Product {}", id), Money::from_major(price_major))
            .with_quantity(qty)
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add_item(item("p1", 500, 2));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_item_count(), 2);
        assert_eq!(cart.total_price(), Money::from_major(1000));
    }

    #[test]
    fn test_add_same_product_merges_quantities() {
        let mut cart = Cart::new();
        cart.add_item(item("p1", 500, 2));
        cart.add_item(item("p1", 500, 3));

        assert_eq!(cart.len(), 1); // still one line
        assert_eq!(cart.total_item_count(), 5);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add_item(item("b", 10, 1));
        cart.add_item(item("a", 20, 1));
        cart.add_item(item("b", 10, 1)); // merge must not reorder

        let ids: Vec<&str> = cart.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = Cart::new();
        cart.add_item(item("p1", 500, 1));
        cart.remove_item("nope");
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_update_quantity_zero_equals_remove() {
        let mut removed = Cart::new();
        removed.add_item(item("p1", 500, 2));
        removed.remove_item("p1");

        let mut updated = Cart::new();
        updated.add_item(item("p1", 500, 2));
        updated.update_quantity("p1", 0);

        assert_eq!(removed.items(), updated.items());
        assert!(updated.is_empty());

        // Negative quantities behave the same.
        let mut negative = Cart::new();
        negative.add_item(item("p1", 500, 2));
        negative.update_quantity("p1", -3);
        assert!(negative.is_empty());
    }

    #[test]
    fn test_quantity_invariant_holds_across_mutations() {
        let mut cart = Cart::new();
        cart.add_item(item("a", 100, 1));
        cart.add_item(item("b", 200, 4));
        cart.update_quantity("a", 7);
        cart.update_quantity("b", 0);
        cart.add_item(item("c", 300, 2));
        cart.remove_item("missing");

        assert!(cart.items().iter().all(|i| i.quantity >= 1));
        let expected: i64 = cart.items().iter().map(|i| i.quantity).sum();
        assert_eq!(cart.total_item_count(), expected);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add_item(item("p1", 500, 2));
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
        assert_eq!(cart.total_price_cents(), 0);
    }

    #[test]
    fn test_cart_state_shares_underlying_cart() {
        let state = CartState::new();
        let clone = state.clone();

        state.with_cart_mut(|c| c.add_item(item("p1", 500, 2)));
        let count = clone.with_cart(|c| c.total_item_count());
        assert_eq!(count, 2);
    }
}
