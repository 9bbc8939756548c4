//! # cart-core
//!
//! Core types for the cart-rs shopping flow.
//!
//! This crate provides:
//! - `Product` (generic, digital, physical) and `ProductCatalog`
//! - `Cart` for collecting products and computing totals
//! - `DiscountStrategy` with `PercentDiscount` and `FixedAmountDiscount`
//! - `User` for owning a cart and checking out
//! - `CartConfig` validation policy and `CartError` for typed errors
//!
//! ## Example
//!
//! ```rust
//! use cart_core::{PercentDiscount, Product, User};
//!
//! let mut user = User::new(1, "Ada");
//! user.add_to_cart(Product::new(1, "Notebook", 100.0, 1));
//! user.add_to_cart(Product::new(2, "Pen", 100.0, 3));
//!
//! let total = user.checkout(Some(&PercentDiscount::new(10.0)));
//! assert_eq!(total, 180.0);
//! assert!(user.cart().is_empty());
//! ```

pub mod cart;
pub mod config;
pub mod discount;
pub mod error;
pub mod product;
pub mod receipt;
pub mod user;

#[cfg(test)]
mod test_support;

// Re-exports for convenience
pub use cart::Cart;
pub use config::CartConfig;
pub use discount::{
    BoxedDiscount, CouponSpec, DiscountRegistry, DiscountSpec, DiscountStrategy,
    FixedAmountDiscount, PercentDiscount,
};
pub use error::{CartError, CartResult};
pub use product::{Product, ProductCatalog, ProductKind};
pub use receipt::Receipt;
pub use user::User;
