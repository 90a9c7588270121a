//! # Storefront Demo
//!
//! Runs one checkout against an in-memory store and prints the receipt.
//!
//! ## Startup Sequence
//! 1. Load configuration from the environment
//! 2. Initialize tracing (logging)
//! 3. Stock the store and register a member
//! 4. Fill the member's cart and check out
//! 5. Print the receipt
//!
//! ## Usage
//! ```bash
//! cargo run -p storefront-demo
//! STOREFRONT_OUTPUT=json RUST_LOG=debug cargo run -p storefront-demo
//! ```

mod config;

use storefront_core::{Customer, Money, Product, Receipt, Store};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{DemoConfig, OutputFormat};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DemoConfig::load()?;
    init_tracing(&config.log_filter);

    info!(
        surcharge_bps = config.surcharge_bps,
        output = ?config.output,
        "Configuration loaded"
    );

    let mut store = Store::with_config(config.store_config()?);
    store.add_product(Product::new(
        "889",
        "Rodent of unusual size",
        "when a rodent of the usual size just won't do",
        Money::from_major_minor(33, 45),
        8,
    ))?;
    store.add_member(Customer::new("Yinsheng", "QWF", false))?;

    for id in store.product_search("rodent") {
        store.add_product_to_member_cart(&id, "QWF")?;
    }

    let receipt = store.check_out_member_with_receipt("QWF")?;

    match config.output {
        OutputFormat::Text => print_receipt(&receipt),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&receipt)?),
    }

    Ok(())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_receipt(receipt: &Receipt) {
    println!("Receipt {} for {}", receipt.id, receipt.customer_id);
    for line in &receipt.lines {
        println!(
            "  {:<30} {:>3} x {:>8} = {:>9}",
            line.title_snapshot, line.fulfilled, line.unit_price, line.line_total
        );
        if line.shortfall() > 0 {
            println!("  ({} not in stock)", line.shortfall());
        }
    }
    for skipped in &receipt.skipped {
        println!("  {} no longer stocked, skipped", skipped.product_id);
    }
    println!("  Subtotal  {:>9}", receipt.subtotal);
    if !receipt.surcharge.is_zero() {
        println!("  Surcharge {:>9}", receipt.surcharge);
    }
    println!("  Total     {:>9}", receipt.total);
}
