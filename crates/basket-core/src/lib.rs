//! # basket-core: Pure Cart Logic for the Basket Panel
//!
//! This crate holds the arithmetic and rules behind the storefront cart
//! panel as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Basket Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Rendering layer (web page)                     │   │
//! │  │        Cart rows ──► Discount form ──► Totals footer            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CartView                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                basket-panel (controller + store)                │   │
//! │  │     open / close, increment / decrement / remove, submit code   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ basket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │  pricing  │  │ discount  │  │ provider  │   │   │
//! │  │   │ LineItem  │  │  Totals   │  │  Result   │  │  traits   │   │   │
//! │  │   │ Discount  │  │ line price│  │  Form     │  │           │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO RENDERING • NO GLOBAL STATE                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `LineItem` and `DiscountRate`
//! - [`money`] - Money type with integer arithmetic
//! - [`pricing`] - Total price, discount total, discounted row price
//! - [`discount`] - Discount code validation and form state machine
//! - [`provider`] - Cart provider and scroll lock traits
//! - [`validation`] - Line item input checks
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::{DerivedTotals, DiscountRate, LineItem, Money};
//!
//! let items = vec![
//!     LineItem::new("1", "Rattan Chair", Money::from_pence(1000), 2)
//!         .with_discount(DiscountRate::from_bps(1000)),
//! ];
//!
//! let totals = DerivedTotals::from_items(&items);
//! assert_eq!(totals.total_price.to_string(), "£20.00");
//! assert_eq!(totals.discount_total.to_string(), "£2.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod money;
pub mod pricing;
pub mod provider;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use discount::{validate_discount_code, DiscountForm, DiscountFormState, DiscountResult};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, UnitPrice};
pub use pricing::{compute_discount_total, compute_total_price, discounted_line_price, DerivedTotals};
pub use provider::{CartProvider, NoScrollLock, ScrollLock};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The one discount code the storefront accepts.
pub const DISCOUNT_CODE: &str = "DISCOUNT";

/// Lowest quantity a line item can have. Providers clamp to this.
pub const MIN_ITEM_QUANTITY: i64 = 1;

/// Maximum quantity of a single item in cart.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum line items in a single cart.
pub const MAX_CART_ITEMS: usize = 100;

/// 100% in parts per million.
pub const MAX_DISCOUNT_PPM: u32 = 1_000_000;

/// Highest unit price accepted, in pence (£1,000,000,000).
///
/// A full cart at this price and `MAX_ITEM_QUANTITY` still fits in `i64`.
pub const MAX_UNIT_PRICE_PENCE: i64 = 100_000_000_000;
