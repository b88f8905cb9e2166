//! # State Module
//!
//! The panel's collaborators and settings, each a separate type.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐      │
//! │  │    CartStore     │  │   ScrollState    │  │   PanelConfig    │      │
//! │  │                  │  │                  │  │                  │      │
//! │  │  Arc<Mutex<      │  │  AtomicBool      │  │  currency code   │      │
//! │  │    Cart          │  │                  │  │  symbol          │      │
//! │  │  >>              │  │  impl ScrollLock │  │  decimals        │      │
//! │  │  impl            │  │                  │  │                  │      │
//! │  │  CartProvider    │  │                  │  │                  │      │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────┘      │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartStore: Protected by Arc<Mutex<T>> for exclusive access          │
//! │  • ScrollState: single atomic flag                                     │
//! │  • PanelConfig: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod scroll;

pub use cart::{Cart, CartStore};
pub use config::PanelConfig;
pub use scroll::ScrollState;
