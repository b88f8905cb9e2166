//! # Domain Types
//!
//! The line item and its discount rate, as handed over by the cart provider.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                │
//! │  │      LineItem       │        │    DiscountRate     │                │
//! │  │  ─────────────────  │        │  ─────────────────  │                │
//! │  │  id (provider key)  │        │  ppm (u32)          │                │
//! │  │  title              │───────►│  100_000 = 10%      │                │
//! │  │  price (UnitPrice)  │        └─────────────────────┘                │
//! │  │  quantity (>= 1)    │                                                │
//! │  │  thumbnail          │                                                │
//! │  └─────────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! The product feed sends items as
//! `{ "id": 1, "title": "...", "price": 549, "quantity": 2,
//!    "discountPercentage": 12.96, "thumbnail": "https://..." }`.
//! Prices and percentages are plain JSON numbers there; they are converted
//! to hundredths of a penny and parts per million on the way in and never
//! touched as floats again.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::money::{Money, UnitPrice};
use crate::pricing::compute_total_price;

// =============================================================================
// Discount Rate
// =============================================================================

/// Parts per million in one percent.
pub const PPM_PER_PERCENT: u32 = 10_000;

/// Parts per million in one basis point.
const PPM_PER_BPS: u32 = 100;

/// A line item's discount percentage, in parts per million.
///
/// ## Why Parts Per Million?
/// 1 ppm = 0.0001%. The feed usually sends two decimals (12.96) but is not
/// limited to them; 12.345% is held exactly as 123_450 ppm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountRate(u32);

impl DiscountRate {
    /// Creates a rate from parts per million.
    #[inline]
    pub const fn from_ppm(ppm: u32) -> Self {
        DiscountRate(ppm)
    }

    /// Creates a rate from basis points (1000 bps = 10%).
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps.saturating_mul(PPM_PER_BPS))
    }

    /// Creates a rate from a percentage, rounded to the nearest ppm.
    ///
    /// Negative input clamps to zero.
    pub fn from_percentage(pct: f64) -> Self {
        DiscountRate((pct * PPM_PER_PERCENT as f64).round().max(0.0) as u32)
    }

    /// Returns the rate in parts per million.
    #[inline]
    pub const fn ppm(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (display and wire only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / PPM_PER_PERCENT as f64
    }

    /// Zero discount.
    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

/// Shows the rate the way the feed wrote it: `10%`, `12.5%`, `12.96%`.
impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / PPM_PER_PERCENT;
        let frac = self.0 % PPM_PER_PERCENT;

        if frac == 0 {
            return write!(f, "{}%", whole);
        }

        let digits = format!("{:04}", frac);
        write!(f, "{}.{}%", whole, digits.trim_end_matches('0'))
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One product row in the cart.
///
/// Owned by the cart provider. The panel reads these and asks the provider
/// for changes by `id`; it never builds or drops one itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineItem {
    /// Provider key. The feed uses numeric ids, stored here as text.
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,

    /// Product title shown on the row.
    pub title: String,

    /// Unit price.
    #[serde(with = "major_units")]
    #[ts(type = "number")]
    pub price: UnitPrice,

    /// Quantity in cart, at least 1.
    pub quantity: i64,

    /// Discount percentage (0-100%).
    #[serde(rename = "discountPercentage", with = "percentage", default)]
    #[ts(type = "number")]
    pub discount: DiscountRate,

    /// Thumbnail image reference.
    #[serde(default)]
    pub thumbnail: String,
}

impl LineItem {
    /// Creates a line item with no discount and no thumbnail.
    ///
    /// Takes whole pence as [`Money`] or a finer [`UnitPrice`].
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        price: impl Into<UnitPrice>,
        quantity: i64,
    ) -> Self {
        LineItem {
            id: id.into(),
            title: title.into(),
            price: price.into(),
            quantity,
            discount: DiscountRate::zero(),
            thumbnail: String::new(),
        }
    }

    /// Sets the discount rate.
    pub fn with_discount(mut self, discount: DiscountRate) -> Self {
        self.discount = discount;
        self
    }

    /// Sets the thumbnail reference.
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = thumbnail.into();
        self
    }

    /// Unit price × quantity, rounded to the penny.
    pub fn line_total(&self) -> Money {
        compute_total_price(std::slice::from_ref(self))
    }
}

// =============================================================================
// Serde Helpers
// =============================================================================

fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(n) => n.to_string(),
    })
}

/// `UnitPrice` as a decimal number of pounds.
mod major_units {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::money::UnitPrice;

    pub fn serialize<S: Serializer>(price: &UnitPrice, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(price.to_major_units())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<UnitPrice, D::Error> {
        f64::deserialize(deserializer).map(UnitPrice::from_major_units)
    }
}

/// `DiscountRate` as a percentage number.
mod percentage {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DiscountRate;

    pub fn serialize<S: Serializer>(rate: &DiscountRate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(rate.percentage())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DiscountRate, D::Error> {
        f64::deserialize(deserializer).map(DiscountRate::from_percentage)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discount_rate_display() {
        assert_eq!(DiscountRate::from_bps(1000).to_string(), "10%");
        assert_eq!(DiscountRate::from_bps(1250).to_string(), "12.5%");
        assert_eq!(DiscountRate::from_bps(1296).to_string(), "12.96%");
        assert_eq!(DiscountRate::from_bps(5).to_string(), "0.05%");
        assert_eq!(DiscountRate::from_ppm(123_450).to_string(), "12.345%");
        assert_eq!(DiscountRate::from_ppm(1).to_string(), "0.0001%");
        assert_eq!(DiscountRate::zero().to_string(), "0%");
    }

    #[test]
    fn test_discount_rate_from_percentage() {
        assert_eq!(DiscountRate::from_percentage(12.96), DiscountRate::from_bps(1296));
        assert_eq!(DiscountRate::from_percentage(10.0), DiscountRate::from_bps(1000));
        assert_eq!(DiscountRate::from_percentage(12.345).ppm(), 123_450);
        assert_eq!(DiscountRate::from_percentage(-3.0).ppm(), 0);
    }

    #[test]
    fn test_line_total() {
        let item = LineItem::new("1", "Lamp", Money::from_pence(1250), 3);
        assert_eq!(item.line_total().pence(), 3750);
    }

    #[test]
    fn test_line_total_rounds_after_quantity() {
        // 0.125 × 2 = 0.25, not round(0.125) × 2 = 0.26
        let item = LineItem::new("1", "Clip", UnitPrice::from_major_units(0.125), 2);
        assert_eq!(item.line_total().pence(), 25);
    }

    #[test]
    fn test_deserialize_feed_shape() {
        let json = r#"{
            "id": 7,
            "title": "Rattan Chair",
            "price": 549,
            "quantity": 2,
            "discountPercentage": 12.96,
            "thumbnail": "https://cdn.example/7.jpg"
        }"#;

        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "7");
        assert_eq!(item.price, UnitPrice::from_pence(54900));
        assert_eq!(item.quantity, 2);
        assert_eq!(item.discount, DiscountRate::from_bps(1296));
        assert_eq!(item.thumbnail, "https://cdn.example/7.jpg");
    }

    #[test]
    fn test_deserialize_defaults_and_text_id() {
        let json = r#"{ "id": "sku-9", "title": "Mug", "price": 4.5, "quantity": 1 }"#;

        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "sku-9");
        assert_eq!(item.price.to_money().pence(), 450);
        assert!(item.discount.is_zero());
        assert!(item.thumbnail.is_empty());
    }

    #[test]
    fn test_serialize_uses_feed_names() {
        let item = LineItem::new("3", "Vase", Money::from_pence(1999), 1)
            .with_discount(DiscountRate::from_bps(1500));

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["price"], 19.99);
        assert_eq!(value["discountPercentage"], 15.0);
        assert!(value.get("discount").is_none());
    }

    #[test]
    fn test_sub_penny_feed_values_survive() {
        let json = r#"{ "id": 5, "title": "Clip", "price": 0.125, "quantity": 2,
                        "discountPercentage": 12.345 }"#;

        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.price.steps(), 1250);
        assert_eq!(item.discount.ppm(), 123_450);

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["price"], 0.125);
        assert_eq!(value["discountPercentage"], 12.345);
    }
}
