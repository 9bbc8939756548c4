//! # Cart Configuration
//!
//! Validation policy for carts. Every flag defaults to off, which keeps
//! the lenient behavior: negative prices and quantities are accepted and
//! removing a missing id is a silent no-op.

use serde::{Deserialize, Serialize};
use std::env;

/// Policy flags copied into every cart a user owns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Log a warning when `Cart::remove_product` (and so `User::remove_from_cart`)
    /// matches nothing
    #[serde(default)]
    pub strict_removal: bool,

    /// Reject products with a negative or non-finite price in `try_add_product`
    #[serde(default)]
    pub reject_negative_prices: bool,

    /// Reject products with a negative quantity in `try_add_product`
    #[serde(default)]
    pub reject_negative_quantities: bool,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads (all optional, default `false`):
    /// - `CART_STRICT_REMOVAL`
    /// - `CART_REJECT_NEGATIVE_PRICES`
    /// - `CART_REJECT_NEGATIVE_QUANTITIES`
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |key: &str| lookup(key).and_then(|v| parse_flag(&v)).unwrap_or(false);

        Self {
            strict_removal: flag("CART_STRICT_REMOVAL"),
            reject_negative_prices: flag("CART_REJECT_NEGATIVE_PRICES"),
            reject_negative_quantities: flag("CART_REJECT_NEGATIVE_QUANTITIES"),
        }
    }

    /// Config with every check enabled
    pub fn strict() -> Self {
        Self {
            strict_removal: true,
            reject_negative_prices: true,
            reject_negative_quantities: true,
        }
    }

    /// Builder: toggle strict removal
    pub fn with_strict_removal(mut self, enabled: bool) -> Self {
        self.strict_removal = enabled;
        self
    }

    /// True if any product validation is switched on
    pub fn validates_products(&self) -> bool {
        self.reject_negative_prices || self.reject_negative_quantities
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_lenient() {
        let config = CartConfig::default();
        assert!(!config.strict_removal);
        assert!(!config.validates_products());
    }

    #[test]
    fn test_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("CART_STRICT_REMOVAL", "true"),
            ("CART_REJECT_NEGATIVE_PRICES", "1"),
            ("CART_REJECT_NEGATIVE_QUANTITIES", "garbage"),
        ]
        .into_iter()
        .collect();

        let config = CartConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()));
        assert!(config.strict_removal);
        assert!(config.reject_negative_prices);
        assert!(!config.reject_negative_quantities);
    }

    #[test]
    fn test_strict_builder() {
        let config = CartConfig::default().with_strict_removal(true);
        assert!(config.strict_removal);
        assert!(!config.reject_negative_prices);

        assert!(CartConfig::strict().validates_products());
    }

    #[test]
    fn test_from_toml() {
        let config: CartConfig = toml::from_str("strict_removal = true").unwrap();
        assert!(config.strict_removal);
        assert!(!config.reject_negative_quantities);
    }
}
