//! # cart-cli
//!
//! Demonstration driver for cart-rs.
//!
//! This crate provides:
//! - `StoreConfig` loading from `config/store.toml`
//! - `run_demo`, a walkthrough of products, carts, users and discounts
//! - `init_logging` with a pretty or JSON log format

pub mod demo;
pub mod logging;
pub mod store;

pub use demo::{run_demo, DemoOptions};
pub use logging::{init_logging, LogFormat};
pub use store::{load_store_config, StoreConfig};
