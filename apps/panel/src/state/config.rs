//! # Configuration State
//!
//! Display settings for the cart panel, loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BASKET_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Panel configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,
}

impl Default for PanelConfig {
    /// Storefront defaults: GBP, "£", 2 decimals.
    fn default() -> Self {
        PanelConfig {
            currency_code: "GBP".to_string(),
            currency_symbol: "£".to_string(),
            currency_decimals: 2,
        }
    }
}

impl PanelConfig {
    /// Creates a PanelConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BASKET_CURRENCY_CODE`: Override currency code
    /// - `BASKET_CURRENCY_SYMBOL`: Override currency symbol
    /// - `BASKET_CURRENCY_DECIMALS`: Override decimal places (0-4)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = PanelConfig::default();

        if let Some(code) = lookup("BASKET_CURRENCY_CODE") {
            config.currency_code = code;
        }

        if let Some(symbol) = lookup("BASKET_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("BASKET_CURRENCY_DECIMALS") {
            match decimals.parse::<u8>() {
                Ok(d) if d <= 4 => config.currency_decimals = d,
                _ => warn!(value = %decimals, "Ignoring invalid BASKET_CURRENCY_DECIMALS"),
            }
        }

        config
    }

    /// Formats an amount in minor units as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use basket_panel::state::PanelConfig;
    ///
    /// let config = PanelConfig::default();
    /// assert_eq!(config.format_currency(1234), "£12.34");
    /// ```
    pub fn format_currency(&self, minor: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = minor / divisor;
        let frac = (minor % divisor).abs();

        format!(
            "{}{}{}",
            if minor < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_positive() {
        let config = PanelConfig::default();
        assert_eq!(config.format_currency(1234), "£12.34");
        assert_eq!(config.format_currency(100), "£1.00");
        assert_eq!(config.format_currency(1), "£0.01");
        assert_eq!(config.format_currency(0), "£0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = PanelConfig::default();
        assert_eq!(config.format_currency(-1234), "-£12.34");
        assert_eq!(config.format_currency(-5), "-£0.05");
    }

    #[test]
    fn test_format_currency_zero_decimals() {
        let config = PanelConfig {
            currency_code: "JPY".to_string(),
            currency_symbol: "¥".to_string(),
            currency_decimals: 0,
        };
        assert_eq!(config.format_currency(1500), "¥1500");
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = PanelConfig::from_lookup(|key| match key {
            "BASKET_CURRENCY_CODE" => Some("USD".to_string()),
            "BASKET_CURRENCY_SYMBOL" => Some("$".to_string()),
            _ => None,
        });
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.format_currency(999), "$9.99");
    }

    #[test]
    fn test_from_lookup_rejects_bad_decimals() {
        let config = PanelConfig::from_lookup(|key| {
            (key == "BASKET_CURRENCY_DECIMALS").then(|| "nine".to_string())
        });
        assert_eq!(config.currency_decimals, 2);

        let config = PanelConfig::from_lookup(|key| {
            (key == "BASKET_CURRENCY_DECIMALS").then(|| "3".to_string())
        });
        assert_eq!(config.format_currency(1234), "£1.234");
    }
}
