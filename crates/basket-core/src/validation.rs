//! # Validation Module
//!
//! Input checks for line items entering a cart provider.
//!
//! The pricing calculator trusts its input: a provider is expected to run
//! these before it accepts an item, so malformed rows never reach a render.
//!
//! ## Usage
//! ```rust
//! use basket_core::validation::{validate_line_item, validate_quantity};
//! use basket_core::{LineItem, Money};
//!
//! let item = LineItem::new("1", "Lamp", Money::from_pence(1999), 1);
//! assert!(validate_line_item(&item).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::UnitPrice;
use crate::types::{DiscountRate, LineItem, PPM_PER_PERCENT};
use crate::{MAX_DISCOUNT_PPM, MAX_ITEM_QUANTITY, MAX_UNIT_PRICE_PENCE, MIN_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest title accepted.
const MAX_TITLE_LEN: usize = 200;

/// Validates an item id: non-empty after trimming.
pub fn validate_item_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    Ok(())
}

/// Validates a product title.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LEN,
        });
    }

    Ok(())
}

/// Validates a quantity.
///
/// ## Rules
/// - At least `MIN_ITEM_QUANTITY` (1)
/// - At most `MAX_ITEM_QUANTITY` (999)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < MIN_ITEM_QUANTITY {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: MIN_ITEM_QUANTITY,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
///
/// ## Rules
/// - Not negative
/// - At most `MAX_UNIT_PRICE_PENCE` (£1,000,000,000), so totals never
///   leave `i64`
///
/// ## Example
/// ```rust
/// use basket_core::money::{Money, UnitPrice};
/// use basket_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_pence(1099).into()).is_ok());
/// assert!(validate_unit_price(UnitPrice::from_pence(0)).is_ok());
/// assert!(validate_unit_price(UnitPrice::from_pence(-100)).is_err());
/// assert!(validate_unit_price(UnitPrice::from_major_units(5e16)).is_err());
/// ```
pub fn validate_unit_price(price: UnitPrice) -> ValidationResult<()> {
    if price.is_negative() || price > UnitPrice::from_pence(MAX_UNIT_PRICE_PENCE) {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_UNIT_PRICE_PENCE / 100,
        });
    }

    Ok(())
}

/// Validates a discount rate: 0% to 100%.
pub fn validate_discount_rate(rate: DiscountRate) -> ValidationResult<()> {
    if rate.ppm() > MAX_DISCOUNT_PPM {
        return Err(ValidationError::OutOfRange {
            field: "discountPercentage".to_string(),
            min: 0,
            max: (MAX_DISCOUNT_PPM / PPM_PER_PERCENT) as i64,
        });
    }

    Ok(())
}

/// Runs every field check on a line item.
pub fn validate_line_item(item: &LineItem) -> ValidationResult<()> {
    validate_item_id(&item.id)?;
    validate_title(&item.title)?;
    validate_unit_price(item.price)?;
    validate_quantity(item.quantity)?;
    validate_discount_rate(item.discount)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_validate_item_id() {
        assert!(validate_item_id("1").is_ok());
        assert!(validate_item_id("").is_err());
        assert!(validate_item_id("   ").is_err());
    }

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Rattan Chair").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
        assert!(validate_quantity(1000).is_err());
    }

    #[test]
    fn test_validate_discount_rate() {
        assert!(validate_discount_rate(DiscountRate::zero()).is_ok());
        assert!(validate_discount_rate(DiscountRate::from_bps(1296)).is_ok());
        assert!(validate_discount_rate(DiscountRate::from_bps(10_000)).is_ok());
        assert!(validate_discount_rate(DiscountRate::from_ppm(1_000_001)).is_err());
    }

    #[test]
    fn test_validate_unit_price_bounds() {
        let ceiling = UnitPrice::from_pence(MAX_UNIT_PRICE_PENCE);
        assert!(validate_unit_price(ceiling).is_ok());
        assert!(validate_unit_price(UnitPrice::from_steps(ceiling.steps() + 1)).is_err());
        assert!(validate_unit_price(UnitPrice::from_steps(-1)).is_err());

        // 5e16 pounds, as a snapshot could carry it
        let huge = UnitPrice::from_major_units(50_000_000_000_000_000.0);
        assert!(matches!(
            validate_unit_price(huge),
            Err(ValidationError::OutOfRange { max: 1_000_000_000, .. })
        ));
    }

    #[test]
    fn test_validate_line_item() {
        let good = LineItem::new("1", "Lamp", Money::from_pence(1999), 2)
            .with_discount(DiscountRate::from_bps(1000));
        assert!(validate_line_item(&good).is_ok());

        let free = LineItem::new("2", "Sticker", Money::zero(), 1);
        assert!(validate_line_item(&free).is_ok());

        let negative = LineItem::new("3", "Refund", Money::from_pence(-1), 1);
        assert!(validate_line_item(&negative).is_err());

        let over = good.clone().with_discount(DiscountRate::from_bps(12_000));
        assert!(matches!(
            validate_line_item(&over),
            Err(ValidationError::OutOfRange { .. })
        ));

        let untitled = LineItem::new("4", " ", Money::from_pence(100), 1);
        assert!(matches!(
            validate_line_item(&untitled),
            Err(ValidationError::Required { .. })
        ));
    }
}
