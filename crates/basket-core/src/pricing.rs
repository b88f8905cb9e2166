//! # Pricing Calculator
//!
//! Derives the cart totals from the provider's line items.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Every render pass                                   │
//! │                                                                         │
//! │  provider.cart() ──► &[LineItem] ──┬──► compute_total_price()           │
//! │                                    │                                    │
//! │                                    └──► compute_discount_total()        │
//! │                                                 │                       │
//! │                                                 ▼                       │
//! │                                           DerivedTotals                 │
//! │                                                                         │
//! │  Nothing is cached: a quantity change shows up in the very next render. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//! Unit prices are held in hundredths of a penny and rates in parts per
//! million, so every product and sum is exact. Each total is rounded
//! half-up to the penny once, at the end. Sums run in `i128` and saturate,
//! so an oversized price from an unvalidated provider cannot overflow.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{Money, STEPS_PER_PENNY};
use crate::types::LineItem;

/// `price steps × ppm × qty` per penny of discount:
/// 100 steps per penny, 10^6 ppm per whole.
const DISCOUNT_DENOMINATOR: i128 = STEPS_PER_PENNY as i128 * 1_000_000;

/// Totals shown in the panel footer.
///
/// Computed, never stored: build a fresh one from the current items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DerivedTotals {
    /// Sum of `price × quantity`.
    pub total_price: Money,

    /// Sum of `(price / 100) × discountPercentage × quantity`.
    pub discount_total: Money,
}

impl DerivedTotals {
    /// Computes both totals for the given items.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{DerivedTotals, DiscountRate, LineItem, Money};
    ///
    /// let items = vec![
    ///     LineItem::new("1", "Lamp", Money::from_pence(1000), 2)
    ///         .with_discount(DiscountRate::from_bps(1000)),
    /// ];
    ///
    /// let totals = DerivedTotals::from_items(&items);
    /// assert_eq!(totals.total_price.pence(), 2000);
    /// assert_eq!(totals.discount_total.pence(), 200);
    /// assert_eq!(totals.discounted_total().pence(), 1800);
    /// ```
    pub fn from_items(items: &[LineItem]) -> Self {
        DerivedTotals {
            total_price: compute_total_price(items),
            discount_total: compute_discount_total(items),
        }
    }

    /// Total price after the discount total is taken off.
    pub fn discounted_total(&self) -> Money {
        self.total_price - self.discount_total
    }
}

/// Sum of `price × quantity` over all items, to the penny. Zero for an
/// empty cart.
///
/// ## Example
/// ```rust
/// use basket_core::money::UnitPrice;
/// use basket_core::pricing::compute_total_price;
/// use basket_core::LineItem;
///
/// // 2 × £0.125 = £0.25
/// let items = vec![LineItem::new("1", "Clip", UnitPrice::from_major_units(0.125), 2)];
/// assert_eq!(compute_total_price(&items).pence(), 25);
/// ```
pub fn compute_total_price(items: &[LineItem]) -> Money {
    let steps = items
        .iter()
        .map(|item| (item.price.steps() as i128).saturating_mul(item.quantity as i128))
        .fold(0i128, i128::saturating_add);

    Money::from_scaled(steps, STEPS_PER_PENNY as i128)
}

/// Sum of `(price / 100) × discountPercentage × quantity`, to the penny.
///
/// ## Example
/// ```rust
/// use basket_core::pricing::compute_discount_total;
/// use basket_core::{DiscountRate, LineItem, Money};
///
/// // 3 × £0.99 at 12.5% = £0.37125 → £0.37
/// let items = vec![
///     LineItem::new("1", "Pen", Money::from_pence(99), 3)
///         .with_discount(DiscountRate::from_bps(1250)),
/// ];
/// assert_eq!(compute_discount_total(&items).pence(), 37);
/// ```
pub fn compute_discount_total(items: &[LineItem]) -> Money {
    let scaled = items
        .iter()
        .map(|item| {
            (item.price.steps() as i128)
                .saturating_mul(item.discount.ppm() as i128)
                .saturating_mul(item.quantity as i128)
        })
        .fold(0i128, i128::saturating_add);

    Money::from_scaled(scaled, DISCOUNT_DENOMINATOR)
}

/// Per-row price shown next to the struck-through unit price.
///
/// Computed as `price - discountPercentage × quantity`, with the percentage
/// taken as a raw currency amount: 10% on a £25.00 item at quantity 2 shows
/// £5.00. This is what the storefront has always displayed and it is kept
/// as-is; the result can be negative.
///
/// ## Example
/// ```rust
/// use basket_core::pricing::discounted_line_price;
/// use basket_core::{DiscountRate, LineItem, Money};
///
/// let item = LineItem::new("1", "Rug", Money::from_pence(2500), 2)
///     .with_discount(DiscountRate::from_bps(1000));
/// assert_eq!(discounted_line_price(&item).pence(), 500);
/// ```
pub fn discounted_line_price(item: &LineItem) -> Money {
    // n% as a currency amount is n × 10_000 steps, which is exactly the ppm value
    let raw_percentage = (item.discount.ppm() as i128).saturating_mul(item.quantity as i128);
    let steps = (item.price.steps() as i128).saturating_sub(raw_percentage);

    Money::from_scaled(steps, STEPS_PER_PENNY as i128)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::UnitPrice;
    use crate::types::DiscountRate;

    fn item(id: &str, price_pence: i64, quantity: i64, discount_bps: u32) -> LineItem {
        LineItem::new(id, format!("Product {}", id), Money::from_pence(price_pence), quantity)
            .with_discount(DiscountRate::from_bps(discount_bps))
    }

    #[test]
    fn test_empty_cart_totals_are_zero() {
        let totals = DerivedTotals::from_items(&[]);
        assert!(totals.total_price.is_zero());
        assert!(totals.discount_total.is_zero());
        assert!(totals.discounted_total().is_zero());
    }

    #[test]
    fn test_single_item_ten_percent() {
        // £10 × 2 at 10%
        let items = vec![item("1", 1000, 2, 1000)];

        assert_eq!(compute_total_price(&items), Money::from_pence(2000));
        assert_eq!(compute_discount_total(&items), Money::from_pence(200));
    }

    #[test]
    fn test_totals_over_several_items() {
        let items = vec![
            item("1", 1299, 1, 1296), // £12.99 at 12.96% = 168.3504p
            item("2", 450, 4, 0),     // £18.00, no discount
            item("3", 54900, 2, 1750), // £1098 at 17.5% = 19215p
        ];

        assert_eq!(compute_total_price(&items).pence(), 1299 + 1800 + 109800);
        // 168.3504 + 0 + 19215 = 19383.3504 → 19383
        assert_eq!(compute_discount_total(&items).pence(), 19383);
    }

    #[test]
    fn test_discount_rounds_once_on_the_sum() {
        // Each line is 0.5p: per-line rounding would give 2p, the sum gives 1p.
        let items = vec![item("1", 5, 1, 1000), item("2", 5, 1, 1000)];
        assert_eq!(compute_discount_total(&items).pence(), 1);
    }

    #[test]
    fn test_discount_half_penny_rounds_up() {
        let items = vec![item("1", 5, 1, 1000)];
        assert_eq!(compute_discount_total(&items).pence(), 1);
    }

    #[test]
    fn test_full_discount_matches_total() {
        let items = vec![item("1", 1999, 3, 10_000)];
        let totals = DerivedTotals::from_items(&items);
        assert_eq!(totals.discount_total, totals.total_price);
        assert!(totals.discounted_total().is_zero());
    }

    #[test]
    fn test_discounted_line_price_keeps_raw_formula() {
        // £10.00 at 10%, qty 2: 10.00 - 10 × 2 = -10.00
        let row = item("1", 1000, 2, 1000);
        assert_eq!(discounted_line_price(&row), Money::from_pence(-1000));

        // £549.00 at 12.96%, qty 1: 549.00 - 12.96 = 536.04
        let row = item("2", 54900, 1, 1296);
        assert_eq!(discounted_line_price(&row), Money::from_pence(53604));

        // No discount: unchanged
        let row = item("3", 750, 5, 0);
        assert_eq!(discounted_line_price(&row), Money::from_pence(750));
    }

    #[test]
    fn test_sub_penny_price_rounds_after_quantity() {
        // round2(0.125 × 2) = 0.25; rounding the unit price first gives 0.26
        let items = vec![LineItem::new("1", "Clip", UnitPrice::from_major_units(0.125), 2)];
        assert_eq!(compute_total_price(&items).pence(), 25);

        // Three lines of £0.333: £0.999 → £1.00
        let items = vec![
            LineItem::new("1", "A", UnitPrice::from_major_units(0.333), 1),
            LineItem::new("2", "B", UnitPrice::from_major_units(0.333), 1),
            LineItem::new("3", "C", UnitPrice::from_major_units(0.333), 1),
        ];
        assert_eq!(compute_total_price(&items).pence(), 100);
    }

    #[test]
    fn test_discount_keeps_third_percentage_decimal() {
        // £10 at 12.345% = 123.45p → 123p; 12.35% would give 123.5p → 124p
        let items = vec![LineItem::new("1", "Lamp", Money::from_pence(1000), 1)
            .with_discount(DiscountRate::from_percentage(12.345))];
        assert_eq!(compute_discount_total(&items).pence(), 123);

        // £0.125 × 2 at 10% = 2.5p → 3p
        let items = vec![LineItem::new("1", "Clip", UnitPrice::from_major_units(0.125), 2)
            .with_discount(DiscountRate::from_bps(1000))];
        assert_eq!(compute_discount_total(&items).pence(), 3);
    }

    #[test]
    fn test_huge_prices_saturate_instead_of_overflowing() {
        let items = vec![
            LineItem::new("1", "Yacht", UnitPrice::from_steps(i64::MAX), 999)
                .with_discount(DiscountRate::from_bps(10_000)),
            LineItem::new("2", "Yacht", UnitPrice::from_steps(i64::MAX), 999),
        ];

        let totals = DerivedTotals::from_items(&items);
        assert_eq!(totals.total_price.pence(), i64::MAX);
        assert!(totals.discount_total.is_positive());
        assert!(discounted_line_price(&items[0]).pence() > 0);
    }

    #[test]
    fn test_totals_follow_item_changes() {
        let mut items = vec![item("1", 1000, 1, 1000)];
        let before = DerivedTotals::from_items(&items);

        items[0].quantity = 3;
        let after = DerivedTotals::from_items(&items);

        assert_eq!(before.total_price.pence(), 1000);
        assert_eq!(after.total_price.pence(), 3000);
        assert_eq!(after.discount_total.pence(), 300);
    }
}
