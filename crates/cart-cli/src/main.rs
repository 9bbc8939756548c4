//! # cart-demo
//!
//! Walks through the cart-rs shopping flow and prints the results.
//!
//! ## Usage
//!
//! ```bash
//! # Optional: point at a store config and enable checks
//! export CART_STORE_CONFIG=config/store.toml
//! export CART_STRICT_REMOVAL=true
//! export CART_LOG_FORMAT=json
//!
//! # Run, printing receipts as JSON
//! cart-demo --json
//! ```

use cart_cli::{init_logging, load_store_config, run_demo, DemoOptions, LogFormat};
use cart_core::CartConfig;
use tracing::info;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // Load .env file if present

    // Initialize logging
    init_logging(LogFormat::from_env());

    let options = DemoOptions {
        json_receipts: std::env::args().skip(1).any(|arg| arg == "--json"),
    };

    let store = load_store_config()?;
    let cart_config = store.effective_cart_config(CartConfig::from_env());

    info!("Cart policy: {:?}", cart_config);
    info!("Catalog products: {}", store.products.len());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut out, &store, cart_config, options)?;

    Ok(())
}
