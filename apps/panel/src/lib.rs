//! # basket-panel: Storefront Cart Panel
//!
//! Library setup for the cart overlay.
//!
//! ## Module Structure
//! ```text
//! basket_panel/
//! ├── lib.rs          ← You are here (module wiring, logging setup)
//! ├── main.rs         ← Demo binary
//! ├── error.rs        ← PanelError type
//! ├── panel.rs        ← CartPanel controller (open/close, +/-, delete, code)
//! ├── view.rs         ← CartView render model
//! └── state/
//!     ├── mod.rs
//!     ├── cart.rs     ← CartStore (in-memory CartProvider)
//!     ├── config.rs   ← PanelConfig (currency display)
//!     └── scroll.rs   ← ScrollState (ScrollLock)
//! ```

pub mod error;
pub mod panel;
pub mod state;
pub mod view;

use tracing_subscriber::EnvFilter;

pub use error::{ErrorCode, PanelError};
pub use panel::CartPanel;
pub use state::{Cart, CartStore, PanelConfig, ScrollState};
pub use view::CartView;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=basket_panel=trace` - Show trace for this crate only
/// - Default: INFO, with DEBUG for this crate
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,basket_panel=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
