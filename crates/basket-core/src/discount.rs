//! # Discount Code
//!
//! Validation of the shopper's discount code and the little state machine
//! behind the discount form.
//!
//! ## Form States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │                   submit("DISCOUNT")                                    │
//! │   ┌──────────────┐ ─────────────────► ┌──────────┐                      │
//! │   │ NoCodeEntered│                    │ Applied  │                      │
//! │   └──────────────┘ ◄───────────────── └──────────┘                      │
//! │        ▲    │          submit("")          │  ▲                         │
//! │        │    │ submit("FOO")                │  │                         │
//! │        │    ▼                submit("FOO") ▼  │ submit("DISCOUNT")      │
//! │        │  ┌──────────┐ ◄───────────────────┘  │                         │
//! │        └──│ Invalid  │ ───────────────────────┘                         │
//! │ submit("")└──────────┘                                                  │
//! │                                                                         │
//! │  Every submit is evaluated on its own: no state is ever locked.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The transition is pure. It hands back the next form and, separately, the
//! flag write the caller must perform on the cart provider.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::DISCOUNT_CODE;

/// Message shown under the form after an invalid code.
pub const INVALID_CODE_MESSAGE: &str = "Invalid discount code";

// =============================================================================
// Code Validation
// =============================================================================

/// Outcome of checking a submitted code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DiscountResult {
    /// The accepted code: the discount flag turns on.
    Applied,

    /// Empty submission: the discount flag turns off.
    Cleared,

    /// Anything else: the flag stays as it was and an error is shown.
    Invalid,
}

impl DiscountResult {
    /// The value the provider's discount flag should take, if any.
    pub const fn flag(&self) -> Option<bool> {
        match self {
            DiscountResult::Applied => Some(true),
            DiscountResult::Cleared => Some(false),
            DiscountResult::Invalid => None,
        }
    }

    /// Whether the invalid-code message should be displayed.
    pub const fn shows_error(&self) -> bool {
        matches!(self, DiscountResult::Invalid)
    }
}

/// Checks a discount code.
///
/// The match is exact: no trimming, no case folding.
///
/// ## Example
/// ```rust
/// use basket_core::discount::{validate_discount_code, DiscountResult};
///
/// assert_eq!(validate_discount_code("DISCOUNT"), DiscountResult::Applied);
/// assert_eq!(validate_discount_code(""), DiscountResult::Cleared);
/// assert_eq!(validate_discount_code("discount"), DiscountResult::Invalid);
/// ```
pub fn validate_discount_code(code: &str) -> DiscountResult {
    if code == DISCOUNT_CODE {
        DiscountResult::Applied
    } else if code.is_empty() {
        DiscountResult::Cleared
    } else {
        DiscountResult::Invalid
    }
}

// =============================================================================
// Form State Machine
// =============================================================================

/// Where the discount form currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum DiscountFormState {
    #[default]
    NoCodeEntered,
    Applied,
    Invalid,
}

/// The discount form's local state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DiscountForm {
    pub state: DiscountFormState,
}

/// Result of one submit: the next form plus the flag write to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountTransition {
    /// Form to render from now on.
    pub form: DiscountForm,

    /// How the code was judged.
    pub result: DiscountResult,

    /// Flag value to write to the provider. `None` when the code was invalid
    /// or the flag already holds the target value.
    pub flag_update: Option<bool>,
}

impl DiscountForm {
    /// A fresh form with nothing submitted.
    pub const fn new() -> Self {
        DiscountForm {
            state: DiscountFormState::NoCodeEntered,
        }
    }

    /// Whether the invalid-code message is on screen.
    pub fn shows_error(&self) -> bool {
        self.state == DiscountFormState::Invalid
    }

    /// The message to show under the form, if any.
    pub fn error_message(&self) -> Option<&'static str> {
        self.shows_error().then_some(INVALID_CODE_MESSAGE)
    }

    /// Evaluates a submitted code against the current discount flag.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::discount::{DiscountForm, DiscountFormState};
    ///
    /// let step = DiscountForm::new().submit("DISCOUNT", false);
    /// assert_eq!(step.form.state, DiscountFormState::Applied);
    /// assert_eq!(step.flag_update, Some(true));
    ///
    /// // Same code again: same state, nothing to write.
    /// let again = step.form.submit("DISCOUNT", true);
    /// assert_eq!(again.form, step.form);
    /// assert_eq!(again.flag_update, None);
    /// ```
    pub fn submit(self, code: &str, current_flag: bool) -> DiscountTransition {
        let result = validate_discount_code(code);

        let state = match result {
            DiscountResult::Applied => DiscountFormState::Applied,
            DiscountResult::Cleared => DiscountFormState::NoCodeEntered,
            DiscountResult::Invalid => DiscountFormState::Invalid,
        };

        let flag_update = result.flag().filter(|&target| target != current_flag);

        DiscountTransition {
            form: DiscountForm { state },
            result,
            flag_update,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
