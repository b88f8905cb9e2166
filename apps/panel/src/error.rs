//! # Panel Error Type
//!
//! Unified error type for panel operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Panel                              │
//! │                                                                         │
//! │  Click [+] on a row                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  CartPanel::increment ── Result<CartView, PanelError>                   │
//! │         │                                                               │
//! │         ├── Stale id? ──── CoreError::ItemNotFound ──┐                  │
//! │         │                                            ▼                  │
//! │         ├── Bad snapshot? ─ serde_json::Error ───► PanelError ──► UI    │
//! │         │                                                               │
//! │         └── Success ──► fresh CartView                                  │
//! │                                                                         │
//! │  An invalid discount code is not in this flow: it is part of the view.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use basket_core::CoreError;
use serde::Serialize;

/// Error returned from panel operations.
///
/// ## Serialization
/// What the rendering layer receives when an operation fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Item not found in cart: 42"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for panel responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Line item not in the cart
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Cart limits exceeded
    CartError,

    /// Snapshot could not be read or parsed
    SnapshotError,
}

impl PanelError {
    /// Creates a new panel error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        PanelError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        PanelError::new(ErrorCode::NotFound, format!("{} not found in cart: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        PanelError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a snapshot error.
    pub fn snapshot(message: impl Into<String>) -> Self {
        PanelError::new(ErrorCode::SnapshotError, message)
    }
}

/// Converts core errors to panel errors.
impl From<CoreError> for PanelError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(id) => PanelError::not_found("Item", &id),
            CoreError::QuantityTooLarge { requested, max } => PanelError::validation(format!(
                "Quantity {} exceeds maximum allowed ({})",
                requested, max
            )),
            CoreError::CartTooLarge { max } => PanelError::new(
                ErrorCode::CartError,
                format!("Cart cannot have more than {} items", max),
            ),
            CoreError::Validation(e) => PanelError::validation(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(err: serde_json::Error) -> Self {
        PanelError::snapshot(format!("Invalid cart snapshot: {}", err))
    }
}

impl From<std::io::Error> for PanelError {
    fn from(err: std::io::Error) -> Self {
        PanelError::snapshot(format!("Cannot read cart snapshot: {}", err))
    }
}

impl std::fmt::Display for PanelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for PanelError {}
