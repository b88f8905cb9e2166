//! # Collaborator Traits
//!
//! The two things the cart panel talks to but does not own.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   CartPanel ── reads ─────► CartProvider::cart() / discount()           │
//! │       │                                                                 │
//! │       ├──── requests ─────► update_item(id, ±1) / remove_item(id)       │
//! │       │                     update_discount(bool)                       │
//! │       │                                                                 │
//! │       └──── open/close ───► ScrollLock::lock(bool)                      │
//! │                                                                         │
//! │  The provider owns the line items and serializes its own updates.       │
//! │  The panel never clamps quantities: that is the provider's job.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::CoreResult;
use crate::types::LineItem;

// =============================================================================
// Cart Provider
// =============================================================================

/// Owner of the cart contents and the discount-applied flag.
///
/// Methods take `&self`: implementations hold their state behind their own
/// synchronization, the same way a shared store would.
pub trait CartProvider {
    /// Current line items, in display order.
    fn cart(&self) -> Vec<LineItem>;

    /// Changes an item's quantity by `delta`.
    ///
    /// Implementations must keep the quantity at or above 1.
    fn update_item(&self, id: &str, delta: i64) -> CoreResult<()>;

    /// Removes an item from the cart.
    fn remove_item(&self, id: &str) -> CoreResult<()>;

    /// Whether the discount code is applied.
    fn discount(&self) -> bool;

    /// Sets the discount-applied flag.
    fn update_discount(&self, value: bool);
}

impl<T: CartProvider + ?Sized> CartProvider for &T {
    fn cart(&self) -> Vec<LineItem> {
        (**self).cart()
    }

    fn update_item(&self, id: &str, delta: i64) -> CoreResult<()> {
        (**self).update_item(id, delta)
    }

    fn remove_item(&self, id: &str) -> CoreResult<()> {
        (**self).remove_item(id)
    }

    fn discount(&self) -> bool {
        (**self).discount()
    }

    fn update_discount(&self, value: bool) {
        (**self).update_discount(value)
    }
}

// =============================================================================
// Scroll Lock
// =============================================================================

/// Blocks page scrolling while the panel is shown.
pub trait ScrollLock {
    /// `true` blocks scrolling, `false` releases it.
    fn lock(&self, active: bool);
}

impl<T: ScrollLock + ?Sized> ScrollLock for &T {
    fn lock(&self, active: bool) {
        (**self).lock(active)
    }
}

/// No-op scroll lock for hosts without a scrolling page.
pub struct NoScrollLock;

impl ScrollLock for NoScrollLock {
    fn lock(&self, _active: bool) {}
}
