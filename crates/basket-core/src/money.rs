//! # Money Module
//!
//! Provides the `Money` type for handling prices and totals in the cart.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing float prices in a render loop:                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Pence                                            │
//! │    Every line total and every sum is exact.                             │
//! │    Unit prices keep sub-penny digits; each total is rounded once.       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use basket_core::money::Money;
//!
//! let price = Money::from_pence(1099); // £10.99
//!
//! let doubled = price * 2;
//! assert_eq!(doubled.pence(), 2198);
//!
//! let total = price + Money::from_pence(500);
//! assert_eq!(total.to_string(), "£15.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (pence for GBP).
///
/// ## Design Decisions
/// - **i64 (signed)**: the discounted line price can legitimately go negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Saturating arithmetic**: totals clamp at the `i64` limits, never wrap
///
/// ## Where Money is Used
/// ```text
/// LineItem.price (UnitPrice) ──┬──► price × quantity ──► DerivedTotals.total_price
///                              │
///                              ├──► price × pct × qty ─► DerivedTotals.discount_total
///                              │
///                              └──► rounded, displayed as "£10.99"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let price = Money::from_pence(1099);
    /// assert_eq!(price.pence(), 1099);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Creates a Money value from pounds and pence.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -£5.50.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(10, 99).pence(), 1099);
    /// assert_eq!(Money::from_major_minor(-5, 50).pence(), -550);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the whole-pounds portion.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// assert_eq!(Money::from_pence(1099).pounds(), 10);
    /// assert_eq!(Money::from_pence(-550).pounds(), -5);
    /// ```
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the pence portion (always 0-99).
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity, saturating at the `i64` limits.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::money::Money;
    ///
    /// let unit_price = Money::from_pence(299);
    /// assert_eq!(unit_price.multiply_quantity(3).pence(), 897);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Unit Price
// =============================================================================

/// Steps of a [`UnitPrice`] in one penny.
pub const STEPS_PER_PENNY: i64 = 100;

/// Steps of a [`UnitPrice`] in one pound.
const STEPS_PER_POUND: f64 = 10_000.0;

/// A line item's unit price, in hundredths of a penny.
///
/// The product feed can send prices with more than two decimals (`0.125`).
/// They are kept at this scale so a line total is rounded to the penny
/// after multiplying by quantity, not before.
///
/// ## Example
/// ```rust
/// use basket_core::money::{Money, UnitPrice};
///
/// let price = UnitPrice::from_major_units(0.125);
/// assert_eq!(price.steps(), 1250);
/// assert_eq!(price.to_money(), Money::from_pence(13));
/// assert_eq!(UnitPrice::from(Money::from_pence(1099)).steps(), 109_900);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UnitPrice(i64);

impl UnitPrice {
    /// Creates a price from hundredths of a penny.
    #[inline]
    pub const fn from_steps(steps: i64) -> Self {
        UnitPrice(steps)
    }

    /// Creates a price from whole pence.
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        UnitPrice(pence.saturating_mul(STEPS_PER_PENNY))
    }

    /// Converts a decimal amount in pounds, to the nearest hundredth of a
    /// penny. Out-of-range input saturates; validation rejects it later.
    ///
    /// Only used at the JSON boundary. Arithmetic never goes through floats.
    pub fn from_major_units(amount: f64) -> Self {
        UnitPrice((amount * STEPS_PER_POUND).round() as i64)
    }

    /// Returns the value as a decimal amount in pounds (boundary use only).
    pub fn to_major_units(&self) -> f64 {
        self.0 as f64 / STEPS_PER_POUND
    }

    /// Returns the value in hundredths of a penny.
    #[inline]
    pub const fn steps(&self) -> i64 {
        self.0
    }

    /// Rounds half-up to the penny.
    pub fn to_money(&self) -> Money {
        Money::from_scaled(self.0 as i128, STEPS_PER_PENNY as i128)
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

impl From<Money> for UnitPrice {
    fn from(money: Money) -> Self {
        UnitPrice::from_pence(money.pence())
    }
}

impl fmt::Display for UnitPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_money(), f)
    }
}

impl Money {
    /// Rounds `value / denominator` half-up (away from zero) to the penny.
    ///
    /// Saturates at the `i64` limits instead of wrapping.
    pub(crate) fn from_scaled(value: i128, denominator: i128) -> Self {
        let pence = round_half_up(value, denominator);
        Money(i64::try_from(pence).unwrap_or(if pence < 0 { i64::MIN } else { i64::MAX }))
    }
}

fn round_half_up(value: i128, denominator: i128) -> i128 {
    if value >= 0 {
        value.saturating_add(denominator / 2) / denominator
    } else {
        value.saturating_sub(denominator / 2) / denominator
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `£10.99` / `-£5.50`.
///
/// The panel config has its own `format_currency` for other symbols; this
/// one is the storefront default.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}£{}.{:02}", sign, self.pounds().abs(), self.pence_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

/// Multiplication by i64 (quantities).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Summing an iterator of Money, used by the pricing calculator.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pence() {
        let money = Money::from_pence(1099);
        assert_eq!(money.pence(), 1099);
        assert_eq!(money.pounds(), 10);
        assert_eq!(money.pence_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_pence(1099)), "£10.99");
        assert_eq!(format!("{}", Money::from_pence(500)), "£5.00");
        assert_eq!(format!("{}", Money::from_pence(-550)), "-£5.50");
        assert_eq!(format!("{}", Money::from_pence(-5)), "-£0.05");
        assert_eq!(format!("{}", Money::zero()), "£0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_pence(1000);
        let b = Money::from_pence(500);

        assert_eq!((a + b).pence(), 1500);
        assert_eq!((a - b).pence(), 500);
        assert_eq!((a * 3).pence(), 3000);
        assert_eq!((b - a).pence(), -500);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 5].into_iter().map(Money::from_pence).sum();
        assert_eq!(total.pence(), 355);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_major_units_boundary() {
        // 0.1 + 0.2 style noise must not leak into the price
        assert_eq!(UnitPrice::from_major_units(0.1 + 0.2).steps(), 3000);
        assert_eq!(UnitPrice::from_major_units(549.0).steps(), 5_490_000);
        assert_eq!(UnitPrice::from_major_units(12.99).steps(), 129_900);
        assert_eq!(UnitPrice::from_pence(1299).to_major_units(), 12.99);
    }

    #[test]
    fn test_unit_price_keeps_sub_penny_digits() {
        let price = UnitPrice::from_major_units(0.125);
        assert_eq!(price.steps(), 1250);
        assert_eq!(price.to_money().pence(), 13);
        assert_eq!(UnitPrice::from_steps(-1250).to_money().pence(), -13);
        assert_eq!(UnitPrice::from_steps(1249).to_money().pence(), 12);
    }

    #[test]
    fn test_unit_price_saturates_on_huge_input() {
        assert_eq!(UnitPrice::from_major_units(1e300).steps(), i64::MAX);
        assert_eq!(UnitPrice::from_pence(i64::MAX).steps(), i64::MAX);
        assert_eq!(Money::from_scaled(i128::MAX, 1).pence(), i64::MAX);
        assert_eq!(Money::from_scaled(i128::MIN, 1).pence(), i64::MIN);
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_pence(100).is_positive());
        assert!(Money::from_pence(-100).is_negative());
        assert_eq!(Money::from_pence(-100).abs().pence(), 100);
    }
}
