//! # Cart State
//!
//! In-memory cart provider: the line items and the discount flag.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` so the store can be cloned into
//! whatever owns the page and still serialize its own updates, as the
//! `CartProvider` contract requires.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Panel Event              Provider Call           Cart State Change     │
//! │  ───────────              ─────────────           ─────────────────     │
//! │                                                                         │
//! │  Click [+] ──────────────► update_item(id, +1) ──► qty = min(qty+1,999) │
//! │                                                                         │
//! │  Click [-] ──────────────► update_item(id, -1) ──► qty = max(qty-1, 1)  │
//! │                                                                         │
//! │  Click Delete ───────────► remove_item(id) ──────► items.remove(i)      │
//! │                                                                         │
//! │  Submit code ────────────► update_discount(b) ───► discount = b         │
//! │                                                                         │
//! │  Render ─────────────────► cart() / discount() ──► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use basket_core::validation::validate_line_item;
use basket_core::{
    CartProvider, CoreError, CoreResult, DerivedTotals, LineItem, MAX_CART_ITEMS, MAX_ITEM_QUANTITY,
    MIN_ITEM_QUANTITY,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::error::PanelError;

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by `id` (adding the same id increases quantity)
/// - Quantity stays within 1..=999
/// - Maximum line items: 100
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Items in display order
    pub items: Vec<LineItem>,

    /// Discount code applied. Older snapshots stored this as `"true"`.
    #[serde(default, deserialize_with = "flag_from_bool_or_text")]
    pub discount: bool,

    /// When the cart was created/last cleared
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            discount: false,
            created_at: Utc::now(),
        }
    }

    /// Builds a cart from items, validating and merging them in order.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> CoreResult<Self> {
        let mut cart = Cart::new();
        for item in items {
            cart.add_item(item)?;
        }
        Ok(cart)
    }

    /// Adds an item, or increases the quantity if the id is already present.
    pub fn add_item(&mut self, item: LineItem) -> CoreResult<()> {
        validate_line_item(&item)?;

        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            let new_qty = existing.quantity + item.quantity;
            if new_qty > MAX_ITEM_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_ITEM_QUANTITY,
                });
            }
            existing.quantity = new_qty;
            return Ok(());
        }

        if self.items.len() >= MAX_CART_ITEMS {
            return Err(CoreError::CartTooLarge { max: MAX_CART_ITEMS });
        }

        self.items.push(item);
        Ok(())
    }

    /// Applies a signed quantity change, clamped to 1..=999.
    ///
    /// ## Returns
    /// The quantity after clamping.
    pub fn apply_delta(&mut self, id: &str, delta: i64) -> CoreResult<i64> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))?;

        item.quantity = item
            .quantity
            .saturating_add(delta)
            .clamp(MIN_ITEM_QUANTITY, MAX_ITEM_QUANTITY);
        Ok(item.quantity)
    }

    /// Removes an item by id.
    pub fn remove_item(&mut self, id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id != id);

        if self.items.len() == initial_len {
            Err(CoreError::ItemNotFound(id.to_string()))
        } else {
            Ok(())
        }
    }

    /// Clears all items and the discount flag.
    pub fn clear(&mut self) {
        self.items.clear();
        self.discount = false;
        self.created_at = Utc::now();
    }

    /// Returns the number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Totals for the current contents.
    pub fn totals(&self) -> DerivedTotals {
        DerivedTotals::from_items(&self.items)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn flag_from_bool_or_text<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFlag {
        Bool(bool),
        Text(String),
    }

    Ok(match RawFlag::deserialize(deserializer)? {
        RawFlag::Bool(b) => b,
        RawFlag::Text(text) => text == "true",
    })
}

/// Shared, thread-safe cart provider.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    cart: Arc<Mutex<Cart>>,
}

impl CartStore {
    /// Creates a store with an empty cart.
    pub fn new() -> Self {
        Self::from_cart(Cart::new())
    }

    /// Wraps an existing cart.
    pub fn from_cart(cart: Cart) -> Self {
        CartStore {
            cart: Arc::new(Mutex::new(cart)),
        }
    }

    /// Loads a JSON snapshot. Items are validated and merged on the way in.
    pub fn from_json(json: &str) -> Result<Self, PanelError> {
        let snapshot: Cart = serde_json::from_str(json)?;

        let mut cart = Cart::from_items(snapshot.items)?;
        cart.discount = snapshot.discount;
        cart.created_at = snapshot.created_at;

        info!(items = cart.item_count(), discount = cart.discount, "Cart snapshot loaded");
        Ok(Self::from_cart(cart))
    }

    /// Serializes the current cart as pretty JSON.
    pub fn to_json(&self) -> Result<String, PanelError> {
        Ok(self.with_cart(|c| serde_json::to_string_pretty(c))?)
    }

    /// Copy of the current cart.
    pub fn snapshot(&self) -> Cart {
        self.with_cart(Cart::clone)
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        // Every mutation is a single assignment or Vec call, so a poisoned
        // lock still guards a consistent cart.
        let cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cart)
    }
}

impl CartProvider for CartStore {
    fn cart(&self) -> Vec<LineItem> {
        self.with_cart(|c| c.items.clone())
    }

    fn update_item(&self, id: &str, delta: i64) -> CoreResult<()> {
        let quantity = self.with_cart_mut(|c| c.apply_delta(id, delta))?;
        debug!(id = %id, delta, quantity, "Item quantity updated");
        Ok(())
    }

    fn remove_item(&self, id: &str) -> CoreResult<()> {
        self.with_cart_mut(|c| c.remove_item(id))?;
        debug!(id = %id, "Item removed");
        Ok(())
    }

    fn discount(&self) -> bool {
        self.with_cart(|c| c.discount)
    }

    fn update_discount(&self, value: bool) {
        self.with_cart_mut(|c| c.discount = value);
        debug!(discount = value, "Discount flag updated");
    }
}
