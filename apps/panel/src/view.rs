//! # Cart View
//!
//! Render-ready description of the cart panel.
//!
//! The rendering layer draws exactly what is in here: which rows exist,
//! which prices are struck through, which messages are visible. All the
//! conditional logic lives in [`CartView::build`], so it is testable without
//! a page.
//!
//! ## Panel Layout
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  Cart                                               [Close]    │
//! ├────────────────────────────────────────────────────────────────┤
//! │  [thumbnail]                                                   │
//! │  Rattan Chair                      Discount applied: 10%   (*) │
//! │  £10.00 (struck while discounted)  -£10.00                 (*) │
//! │  [-] 2 [+]                                 [Delete from cart]  │
//! ├────────────────────────────────────────────────────────────────┤
//! │  [DISCOUNT CODE] [APPLY]                                       │
//! │  Invalid discount code                                    (**) │
//! │  Total price: £20.00 (struck while discounted)  £18.00     (*) │
//! │                                                  [Pay now]     │
//! │  Discount code applied!                                    (*) │
//! │  Total savings £2.00                                       (*) │
//! └────────────────────────────────────────────────────────────────┘
//!   (*)  only while the discount flag is on
//!   (**) only after an invalid code
//! ```
//! An empty cart shows "YOUR CART IS EMPTY" and no footer at all.

use std::fmt;

use basket_core::{discounted_line_price, DerivedTotals, DiscountForm, LineItem, Money};
use serde::Serialize;
use ts_rs::TS;

use crate::state::PanelConfig;

/// Shown instead of rows when the cart has no items.
pub const EMPTY_CART_MESSAGE: &str = "YOUR CART IS EMPTY";

/// First line of the savings banner.
pub const DISCOUNT_APPLIED_MESSAGE: &str = "Discount code applied!";

/// Everything the panel shows for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartView {
    /// Whether the panel is slid in.
    pub visible: bool,

    /// One entry per line item, in provider order.
    pub lines: Vec<LineView>,

    /// True when there are no lines.
    pub empty: bool,

    /// Discount form and totals; absent for an empty cart.
    pub footer: Option<FooterView>,

    /// Savings banner; only for a non-empty cart with the discount on.
    pub savings: Option<SavingsView>,
}

/// One cart row.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LineView {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub quantity: i64,

    /// Unit price.
    pub price: Money,

    /// Unit price is drawn struck through.
    pub price_struck: bool,

    /// Row price after discount, only while the discount is on.
    pub discounted_price: Option<Money>,

    /// "Discount applied: 10%", only while the discount is on.
    pub discount_label: Option<String>,
}

/// Footer under the rows.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FooterView {
    pub total_price: Money,

    /// Total price is drawn struck through.
    pub total_struck: bool,

    /// `total_price - discount_total`, only while the discount is on.
    pub discounted_total: Option<Money>,

    /// "Invalid discount code" after a rejected submit.
    pub error_message: Option<String>,
}

/// Banner confirming the discount.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SavingsView {
    pub message: String,
    pub total_savings: Money,
}

impl CartView {
    /// Builds the view from the provider's items and flag plus the panel's
    /// local state. Totals are computed here, fresh, every time.
    pub fn build(items: &[LineItem], discount: bool, form: &DiscountForm, visible: bool) -> Self {
        let lines: Vec<LineView> = items.iter().map(|item| LineView::build(item, discount)).collect();
        let empty = lines.is_empty();

        let (footer, savings) = if empty {
            (None, None)
        } else {
            let totals = DerivedTotals::from_items(items);

            let footer = FooterView {
                total_price: totals.total_price,
                total_struck: discount,
                discounted_total: discount.then(|| totals.discounted_total()),
                error_message: form.error_message().map(str::to_string),
            };

            let savings = discount.then(|| SavingsView {
                message: DISCOUNT_APPLIED_MESSAGE.to_string(),
                total_savings: totals.discount_total,
            });

            (Some(footer), savings)
        };

        CartView {
            visible,
            lines,
            empty,
            footer,
            savings,
        }
    }

    /// Plain-text rendering with the configured currency.
    pub fn to_text(&self, config: &PanelConfig) -> String {
        let money = |m: Money| config.format_currency(m.pence());
        let struck = |m: Money, on: bool| {
            if on {
                format!("~{}~", money(m))
            } else {
                money(m)
            }
        };

        let mut out = String::new();
        out.push_str("Cart  [Close]\n");

        if self.empty {
            out.push('\n');
            out.push_str(EMPTY_CART_MESSAGE);
            out.push('\n');
            return out;
        }

        for line in &self.lines {
            out.push('\n');
            out.push_str(&line.title);
            if let Some(label) = &line.discount_label {
                out.push_str("  ");
                out.push_str(label);
            }
            out.push('\n');

            out.push_str("  ");
            out.push_str(&struck(line.price, line.price_struck));
            if let Some(discounted) = line.discounted_price {
                out.push(' ');
                out.push_str(&money(discounted));
            }
            out.push('\n');

            out.push_str(&format!("  [-] {} [+]  [Delete from cart]\n", line.quantity));
        }

        if let Some(footer) = &self.footer {
            out.push_str("\n[DISCOUNT CODE] [APPLY]\n");
            if let Some(error) = &footer.error_message {
                out.push_str(error);
                out.push('\n');
            }
            out.push_str("Total price: ");
            out.push_str(&struck(footer.total_price, footer.total_struck));
            if let Some(discounted) = footer.discounted_total {
                out.push(' ');
                out.push_str(&money(discounted));
            }
            out.push_str("\n[Pay now]\n");
        }

        if let Some(savings) = &self.savings {
            out.push('\n');
            out.push_str(&savings.message);
            out.push('\n');
            out.push_str("Total savings ");
            out.push_str(&money(savings.total_savings));
            out.push('\n');
        }

        out
    }
}

/// Text rendering with the default (GBP) configuration.
impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(&PanelConfig::default()))
    }
}

impl LineView {
    fn build(item: &LineItem, discount: bool) -> Self {
        LineView {
            id: item.id.clone(),
            title: item.title.clone(),
            thumbnail: item.thumbnail.clone(),
            quantity: item.quantity,
            price: item.price.to_money(),
            price_struck: discount,
            discounted_price: discount.then(|| discounted_line_price(item)),
            discount_label: discount.then(|| format!("Discount applied: {}", item.discount)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::{DiscountFormState, DiscountRate};

    fn items() -> Vec<LineItem> {
        vec![
            LineItem::new("1", "Rattan Chair", Money::from_pence(1000), 2)
                .with_discount(DiscountRate::from_bps(1000))
                .with_thumbnail("chair.jpg"),
            LineItem::new("2", "Oak Shelf", Money::from_pence(2550), 1)
                .with_discount(DiscountRate::from_bps(1250)),
        ]
    }

    #[test]
    fn test_empty_cart_has_no_footer() {
        let view = CartView::build(&[], true, &DiscountForm::new(), true);

        assert!(view.empty);
        assert!(view.lines.is_empty());
        assert!(view.footer.is_none());
        assert!(view.savings.is_none());
        assert!(view.to_string().contains(EMPTY_CART_MESSAGE));
    }

    #[test]
    fn test_without_discount() {
        let view = CartView::build(&items(), false, &DiscountForm::new(), true);

        assert!(!view.empty);
        assert_eq!(view.lines.len(), 2);
        for line in &view.lines {
            assert!(!line.price_struck);
            assert!(line.discounted_price.is_none());
            assert!(line.discount_label.is_none());
        }

        let footer = view.footer.unwrap();
        assert_eq!(footer.total_price, Money::from_pence(4550));
        assert!(!footer.total_struck);
        assert!(footer.discounted_total.is_none());
        assert!(footer.error_message.is_none());
        assert!(view.savings.is_none());
    }

    #[test]
    fn test_with_discount() {
        let view = CartView::build(&items(), true, &DiscountForm::new(), true);

        let chair = &view.lines[0];
        assert!(chair.price_struck);
        assert_eq!(chair.thumbnail, "chair.jpg");
        assert_eq!(chair.discount_label.as_deref(), Some("Discount applied: 10%"));
        // £10.00 - 10 × 2
        assert_eq!(chair.discounted_price, Some(Money::from_pence(-1000)));

        let shelf = &view.lines[1];
        assert_eq!(shelf.discount_label.as_deref(), Some("Discount applied: 12.5%"));
        // £25.50 - 12.50 × 1
        assert_eq!(shelf.discounted_price, Some(Money::from_pence(1300)));

        // discount: 200 + 318.75 = 518.75 → 519
        let footer = view.footer.as_ref().unwrap();
        assert!(footer.total_struck);
        assert_eq!(footer.discounted_total, Some(Money::from_pence(4550 - 519)));

        let savings = view.savings.as_ref().unwrap();
        assert_eq!(savings.message, DISCOUNT_APPLIED_MESSAGE);
        assert_eq!(savings.total_savings, Money::from_pence(519));
    }

    #[test]
    fn test_invalid_code_message_in_footer() {
        let form = DiscountForm {
            state: DiscountFormState::Invalid,
        };
        let view = CartView::build(&items(), false, &form, true);

        let footer = view.footer.unwrap();
        assert_eq!(footer.error_message.as_deref(), Some("Invalid discount code"));
    }

    #[test]
    fn test_text_rendering() {
        let view = CartView::build(&items(), true, &DiscountForm::new(), true);
        let text = view.to_string();

        assert!(text.contains("Rattan Chair  Discount applied: 10%"));
        assert!(text.contains("~£10.00~ -£10.00"));
        assert!(text.contains("[-] 2 [+]"));
        assert!(text.contains("Total price: ~£45.50~ £40.31"));
        assert!(text.contains("Discount code applied!"));
        assert!(text.contains("Total savings £5.19"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let view = CartView::build(&items(), true, &DiscountForm::new(), false);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["visible"], false);
        assert_eq!(json["lines"][0]["priceStruck"], true);
        assert_eq!(json["footer"]["totalPrice"], 4550);
        assert_eq!(json["savings"]["totalSavings"], 519);
    }
}
