//! # Demo Walkthrough
//!
//! Exercises products, carts, users and discounts end to end and writes
//! the results to the given writer.

use crate::store::StoreConfig;
use cart_core::{Cart, CartConfig, FixedAmountDiscount, PercentDiscount, Product, Receipt, User};
use std::io::Write;

/// Output options for the walkthrough
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoOptions {
    /// Print full checkout receipts as JSON
    pub json_receipts: bool,
}

/// Run the walkthrough against `out`
pub fn run_demo<W: Write>(
    out: &mut W,
    store: &StoreConfig,
    cart_config: CartConfig,
    options: DemoOptions,
) -> anyhow::Result<()> {
    let mut product = Product::new(1, "Test Product", 100.0, 10);
    writeln!(out, "{}", product)?;
    product.update_quantity(5);
    writeln!(out, "{}", product)?;

    let digital_product = Product::digital(
        2,
        "Test Digital Product",
        100.0,
        1,
        "Test File Size",
        "Test Download Link",
    );
    writeln!(out, "{}", digital_product)?;

    let physical_product = Product::physical(
        3,
        "Test Physical Product",
        100.0,
        1,
        "Test Weight",
        "Test Manufacturer",
    );
    writeln!(out, "{}", physical_product)?;

    let mut cart = Cart::with_config(cart_config);
    cart.add_product(product);
    cart.add_product(digital_product.clone());
    print_cart(out, "Cart", &cart.view_cart())?;
    writeln!(out, "Total: {}", cart.calculate_total())?;
    cart.remove_product(1);
    print_cart(out, "Cart after removing product 1", &cart.view_cart())?;

    let mut user = User::with_config(1, "User 1", cart_config);
    user.add_to_cart(physical_product);
    print_cart(out, "User cart", &user.cart().view_cart())?;
    user.remove_from_cart(3);
    print_cart(out, "User cart after removing product 3", &user.cart().view_cart())?;

    let percent_discount = PercentDiscount::new(10.0);
    let fixed_discount = FixedAmountDiscount::new(10.0);

    user.add_to_cart(digital_product.clone());
    let receipt = user.checkout_with_receipt(Some(&percent_discount));
    writeln!(out, "Total after 10% discount: {}", receipt.total)?;
    print_receipt(out, &receipt, options)?;

    user.add_to_cart(digital_product);
    let receipt = user.checkout_with_receipt(Some(&fixed_discount));
    writeln!(out, "Total after $10 discount: {}", receipt.total)?;
    print_receipt(out, &receipt, options)?;

    run_store_checkout(out, store, cart_config, options)
}

/// Check out the configured catalog once per configured coupon code
fn run_store_checkout<W: Write>(
    out: &mut W,
    store: &StoreConfig,
    cart_config: CartConfig,
    options: DemoOptions,
) -> anyhow::Result<()> {
    let catalog = store.catalog();
    if catalog.is_empty() {
        return Ok(());
    }
    let registry = store.discount_registry()?;

    let mut shopper = User::with_config(2, "Store Shopper", cart_config);
    let fill = |shopper: &mut User| -> anyhow::Result<()> {
        for product in &catalog.products {
            shopper.try_add_to_cart(product.clone())?;
        }
        Ok(())
    };

    fill(&mut shopper)?;
    print_cart(out, "Store cart", &shopper.cart().view_cart())?;
    let receipt = shopper.checkout_with_receipt(None);
    writeln!(out, "Store total: {}", receipt.total)?;
    print_receipt(out, &receipt, options)?;

    for code in registry.codes() {
        let Some(discount) = registry.get(code) else {
            continue;
        };
        fill(&mut shopper)?;
        let receipt = shopper.checkout_with_receipt(Some(discount.as_ref()));
        writeln!(
            out,
            "Store total with {} ({}): {}",
            code,
            discount.describe(),
            receipt.total
        )?;
        print_receipt(out, &receipt, options)?;
    }

    Ok(())
}

fn print_cart<W: Write>(out: &mut W, title: &str, lines: &[String]) -> std::io::Result<()> {
    writeln!(out, "{} ({} items):", title, lines.len())?;
    for line in lines {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}

fn print_receipt<W: Write>(
    out: &mut W,
    receipt: &Receipt,
    options: DemoOptions,
) -> anyhow::Result<()> {
    if options.json_receipts {
        writeln!(out, "{}", receipt.to_json()?)?;
    }
    Ok(())
}
