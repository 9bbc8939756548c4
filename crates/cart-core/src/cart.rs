//! # Cart
//!
//! Ordered, mutable collection of products. Totals are recomputed on every
//! call and never cached.

use crate::config::CartConfig;
use crate::discount::DiscountStrategy;
use crate::error::{CartError, CartResult};
use crate::product::Product;
use tracing::{debug, warn};

/// A shopping cart
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<Product>,
    config: CartConfig,
}

impl Cart {
    /// Create an empty cart with the lenient default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart with an explicit policy
    pub fn with_config(config: CartConfig) -> Self {
        Self {
            items: Vec::new(),
            config,
        }
    }

    /// Append a product. Duplicate ids are allowed.
    pub fn add_product(&mut self, product: Product) {
        debug!(product_id = product.id, "Adding product to cart");
        self.items.push(product);
    }

    /// Validate a product against the cart policy, then append it
    pub fn try_add_product(&mut self, product: Product) -> CartResult<()> {
        let bad_price = !product.price.is_finite() || product.price < 0.0;
        if self.config.reject_negative_prices && bad_price {
            return Err(CartError::InvalidPrice {
                product_id: product.id,
                price: product.price,
            });
        }
        if self.config.reject_negative_quantities && product.quantity < 0 {
            return Err(CartError::InvalidQuantity {
                product_id: product.id,
                quantity: product.quantity,
            });
        }

        self.add_product(product);
        Ok(())
    }

    /// Remove every product with the given id.
    ///
    /// Returns how many entries were removed; zero means the cart is unchanged.
    /// With `strict_removal` set, a miss is logged as a warning.
    pub fn remove_product(&mut self, product_id: u64) -> usize {
        let removed = self.retain_other_ids(product_id);
        if removed == 0 && self.config.strict_removal {
            warn!(product_id, "Nothing to remove from cart");
        }
        removed
    }

    /// Like `remove_product`, but fails when nothing matched
    pub fn try_remove_product(&mut self, product_id: u64) -> CartResult<usize> {
        match self.retain_other_ids(product_id) {
            0 => {
                warn!(product_id, "Strict removal found no matching product");
                Err(CartError::ProductNotFound { product_id })
            }
            removed => Ok(removed),
        }
    }

    /// Descriptions of every product, in cart order
    pub fn view_cart(&self) -> Vec<String> {
        self.items.iter().map(Product::get_product_info).collect()
    }

    /// Sum of prices.
    ///
    /// Quantity is not used as a multiplier.
    pub fn calculate_total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Total after the given discount. Does not modify the cart.
    pub fn apply_discount(&self, discount: &dyn DiscountStrategy) -> f64 {
        discount.apply_discount(self.calculate_total())
    }

    /// Products in cart order
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Check if any entry has the given id
    pub fn contains(&self, product_id: u64) -> bool {
        self.items.iter().any(|item| item.id == product_id)
    }

    /// Sum of quantities (informational), saturating at the `i64` bounds
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, item| acc.saturating_add(item.quantity))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Policy this cart was created with
    pub fn config(&self) -> CartConfig {
        self.config
    }

    fn retain_other_ids(&mut self, product_id: u64) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id != product_id);
        let removed = before - self.items.len();

        debug!(product_id, removed, "Removed product from cart");
        removed
    }
}
