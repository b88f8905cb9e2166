//! # Cart Panel
//!
//! The overlay controller. Holds only local UI state (visibility and the
//! discount form); everything else is read from the cart provider on every
//! render.
//!
//! ## Panel Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐   open()    ┌──────────┐   close()   ┌──────────┐         │
//! │  │  Hidden  │ ──────────► │  Shown   │ ──────────► │  Hidden  │         │
//! │  └──────────┘ lock(true)  └──────────┘ lock(false) └──────────┘         │
//! │                                │                                        │
//! │          increment / decrement / remove / submit_discount               │
//! │                                │                                        │
//! │                                ▼                                        │
//! │                 provider call ──► render() ──► CartView                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Quantity buttons send the raw delta (+1 / -1) every time. Keeping the
//! quantity at 1 or more is the provider's job.

use basket_core::{CartProvider, DiscountForm, ScrollLock};
use tracing::{debug, info, warn};

use crate::error::PanelError;
use crate::view::CartView;

/// Quantity change sent by the [+] button.
const INCREMENT: i64 = 1;

/// Quantity change sent by the [-] button.
const DECREMENT: i64 = -1;

/// Cart overlay controller.
pub struct CartPanel<P, S> {
    provider: P,
    scroll: S,
    visible: bool,
    form: DiscountForm,
}

impl<P: CartProvider, S: ScrollLock> CartPanel<P, S> {
    /// Creates a hidden panel. Scrolling is left alone until it opens.
    pub fn new(provider: P, scroll: S) -> Self {
        CartPanel {
            provider,
            scroll,
            visible: false,
            form: DiscountForm::new(),
        }
    }

    /// Whether the panel is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current discount form state.
    pub fn form(&self) -> DiscountForm {
        self.form
    }

    /// Shows the panel and blocks page scroll.
    pub fn open(&mut self) -> CartView {
        self.set_visible(true);
        self.render()
    }

    /// Hides the panel and releases page scroll.
    pub fn close(&mut self) -> CartView {
        self.set_visible(false);
        self.render()
    }

    /// Flips visibility.
    pub fn toggle(&mut self) -> CartView {
        self.set_visible(!self.visible);
        self.render()
    }

    /// Reads the provider and builds a fresh view.
    pub fn render(&self) -> CartView {
        let items = self.provider.cart();
        let discount = self.provider.discount();
        CartView::build(&items, discount, &self.form, self.visible)
    }

    /// [+] on a row.
    pub fn increment(&mut self, id: &str) -> Result<CartView, PanelError> {
        self.adjust(id, INCREMENT)
    }

    /// [-] on a row.
    pub fn decrement(&mut self, id: &str) -> Result<CartView, PanelError> {
        self.adjust(id, DECREMENT)
    }

    /// "Delete from cart" on a row.
    pub fn remove(&mut self, id: &str) -> Result<CartView, PanelError> {
        debug!(id = %id, "remove event");

        self.provider.remove_item(id).map_err(|e| {
            warn!(id = %id, error = %e, "Provider rejected remove");
            PanelError::from(e)
        })?;

        Ok(self.render())
    }

    /// Discount form submit.
    ///
    /// Never fails: an unknown code is shown in the view, not returned.
    pub fn submit_discount(&mut self, code: &str) -> CartView {
        debug!(code = %code, "submit_discount event");

        let step = self.form.submit(code, self.provider.discount());
        self.form = step.form;

        if let Some(flag) = step.flag_update {
            self.provider.update_discount(flag);
            info!(applied = flag, "Discount flag changed");
        } else if step.result.shows_error() {
            info!("Invalid discount code submitted");
        }

        self.render()
    }

    fn adjust(&mut self, id: &str, delta: i64) -> Result<CartView, PanelError> {
        debug!(id = %id, delta, "update_item event");

        self.provider.update_item(id, delta).map_err(|e| {
            warn!(id = %id, delta, error = %e, "Provider rejected quantity change");
            PanelError::from(e)
        })?;

        Ok(self.render())
    }

    fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }

        self.visible = visible;
        self.scroll.lock(visible);
        info!(visible, "Cart panel visibility changed");
    }
}
