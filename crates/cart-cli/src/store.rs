//! # Store Configuration
//!
//! Products, coupon codes and cart policy for the demo, loaded from
//! `config/store.toml`. Environment flags can switch cart checks on
//! even when the file leaves them off.

use anyhow::Context;
use cart_core::{CartConfig, CouponSpec, DiscountRegistry, Product, ProductCatalog};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Env var naming an explicit store config file
pub const STORE_CONFIG_ENV: &str = "CART_STORE_CONFIG";

/// Store configuration file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// Cart policy
    #[serde(default)]
    pub cart: CartConfig,

    /// Catalog products
    #[serde(default)]
    pub products: Vec<Product>,

    /// Coupon codes
    #[serde(default)]
    pub discounts: Vec<CouponSpec>,
}

impl StoreConfig {
    /// Parse from a TOML string
    pub fn from_toml(toml_str: &str) -> anyhow::Result<Self> {
        toml::from_str(toml_str).context("Failed to parse store config")
    }

    /// Read and parse a config file
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid store config {}", path.display()))
    }

    /// Product catalog built from the configured products
    pub fn catalog(&self) -> ProductCatalog {
        ProductCatalog {
            products: self.products.clone(),
        }
    }

    /// Coupon registry, validating every discount
    pub fn discount_registry(&self) -> anyhow::Result<DiscountRegistry> {
        DiscountRegistry::from_specs(&self.discounts).context("Invalid discount in store config")
    }

    /// File policy combined with environment flags (either side enables a check)
    pub fn effective_cart_config(&self, env: CartConfig) -> CartConfig {
        CartConfig {
            strict_removal: self.cart.strict_removal || env.strict_removal,
            reject_negative_prices: self.cart.reject_negative_prices || env.reject_negative_prices,
            reject_negative_quantities: self.cart.reject_negative_quantities
                || env.reject_negative_quantities,
        }
    }
}

/// Load the store config.
///
/// Uses `CART_STORE_CONFIG` when set, otherwise searches `config/store.toml`
/// upward from the working directory. A missing file yields an empty store.
pub fn load_store_config() -> anyhow::Result<StoreConfig> {
    if let Ok(path) = std::env::var(STORE_CONFIG_ENV) {
        let store = StoreConfig::from_path(Path::new(&path))?;
        tracing::info!("Loaded store config from {}", path);
        return Ok(store);
    }

    match find_store_config() {
        Some(path) => {
            let store = StoreConfig::from_path(&path)?;
            tracing::info!(
                "Loaded {} products and {} discounts from {}",
                store.products.len(),
                store.discounts.len(),
                path.display()
            );
            Ok(store)
        }
        None => {
            tracing::warn!("No store config found, using empty store");
            Ok(StoreConfig::default())
        }
    }
}

fn find_store_config() -> Option<PathBuf> {
    let config_paths = [
        "config/store.toml",
        "../config/store.toml",
        "../../config/store.toml",
    ];

    config_paths
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [cart]
        reject_negative_prices = true

        [[products]]
        id = 10
        name = "Ceramic Mug"
        price = 12.5

        [[products]]
        id = 12
        name = "Desk Lamp"
        price = 39.0
        kind = { type = "physical", weight = "1.4kg", manufacturer = "Lumen Works" }

        [[discounts]]
        code = "SAVE10"
        discount = { kind = "percent", percentage = 10.0 }
    "#;

    #[test]
    fn test_parse_store_config() {
        let store = StoreConfig::from_toml(SAMPLE).unwrap();

        assert!(store.cart.reject_negative_prices);
        assert!(!store.cart.strict_removal);

        let catalog = store.catalog();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.get(12).unwrap().is_physical());

        let registry = store.discount_registry().unwrap();
        assert_eq!(registry.codes(), vec!["SAVE10"]);
    }

    #[test]
    fn test_empty_store_config() {
        let store = StoreConfig::from_toml("").unwrap();
        assert_eq!(store.cart, CartConfig::default());
        assert!(store.products.is_empty());
        assert!(store.discount_registry().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_discount_rejected() {
        let store = StoreConfig::from_toml(
            r#"
            [[discounts]]
            code = "NEG"
            discount = { kind = "fixed_amount", amount = -5.0 }
            "#,
        )
        .unwrap();
        assert!(store.discount_registry().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(StoreConfig::from_toml("[[products]]\nid = \"one\"").is_err());
    }

    #[test]
    fn test_effective_cart_config() {
        let store = StoreConfig::from_toml(SAMPLE).unwrap();
        let env = CartConfig::default().with_strict_removal(true);

        let config = store.effective_cart_config(env);
        assert!(config.strict_removal);
        assert!(config.reject_negative_prices);
        assert!(!config.reject_negative_quantities);
    }

    #[test]
    fn test_missing_file() {
        let result = StoreConfig::from_path(Path::new("does/not/exist.toml"));
        assert!(result.is_err());
    }
}
