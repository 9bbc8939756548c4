//! # User
//!
//! A user owns exactly one cart at a time and drives checkout. Checkout
//! discards the current cart and installs a fresh empty one.

use crate::cart::Cart;
use crate::config::CartConfig;
use crate::discount::DiscountStrategy;
use crate::error::CartResult;
use crate::product::Product;
use crate::receipt::Receipt;
use tracing::{info, instrument};

/// A shopper with a private cart
#[derive(Debug, Clone)]
pub struct User {
    pub id: u64,
    pub name: String,
    cart: Cart,
}

impl User {
    /// Create a user with an empty cart and the default policy
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self::with_config(id, name, CartConfig::default())
    }

    /// Create a user whose carts follow the given policy
    pub fn with_config(id: u64, name: impl Into<String>, config: CartConfig) -> Self {
        Self {
            id,
            name: name.into(),
            cart: Cart::with_config(config),
        }
    }

    /// The current cart
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn add_to_cart(&mut self, product: Product) {
        self.cart.add_product(product);
    }

    /// Validating variant of `add_to_cart`
    pub fn try_add_to_cart(&mut self, product: Product) -> CartResult<()> {
        self.cart.try_add_product(product)
    }

    /// Remove every entry with the given id. Missing ids are ignored.
    pub fn remove_from_cart(&mut self, product_id: u64) {
        self.cart.remove_product(product_id);
    }

    /// Strict variant of `remove_from_cart`
    pub fn try_remove_from_cart(&mut self, product_id: u64) -> CartResult<usize> {
        self.cart.try_remove_product(product_id)
    }

    /// Finalize the cart and return the (optionally discounted) total.
    ///
    /// The cart is always replaced with an empty one.
    pub fn checkout(&mut self, discount: Option<&dyn DiscountStrategy>) -> f64 {
        self.checkout_with_receipt(discount).total
    }

    /// Same as `checkout`, returning a full receipt
    #[instrument(skip(self, discount), fields(user_id = self.id))]
    pub fn checkout_with_receipt(
        &mut self,
        discount: Option<&dyn DiscountStrategy>,
    ) -> Receipt {
        let config = self.cart.config();
        let cart = std::mem::replace(&mut self.cart, Cart::with_config(config));

        let subtotal = cart.calculate_total();
        let total = match discount {
            Some(d) => cart.apply_discount(d),
            None => subtotal,
        };

        let mut receipt = Receipt::new(self.id, cart.len(), subtotal, total);
        if let Some(d) = discount {
            receipt = receipt.with_discount(d.describe());
        }

        info!(
            items = receipt.item_count,
            subtotal,
            total,
            discount = discount.map(|d| d.kind()).unwrap_or("none"),
            "Checkout complete"
        );

        receipt
    }
}
