//! # Scroll State
//!
//! Tracks whether page scrolling is blocked behind the open panel.

use std::sync::atomic::{AtomicBool, Ordering};

use basket_core::ScrollLock;
use tracing::debug;

/// Scroll lock that records its current state.
///
/// A real page hook would toggle `overflow: hidden` on the body; the host
/// reads [`is_locked`](Self::is_locked) and applies it.
#[derive(Debug, Default)]
pub struct ScrollState {
    locked: AtomicBool,
}

impl ScrollState {
    /// Creates an unlocked scroll state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether scrolling is currently blocked.
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::SeqCst)
    }
}

impl ScrollLock for ScrollState {
    fn lock(&self, active: bool) {
        let was = self.locked.swap(active, Ordering::SeqCst);
        if was != active {
            debug!(locked = active, "Page scroll lock changed");
        }
    }
}
