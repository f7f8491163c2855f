//! # Available Slots Example
//!
//! Looks up warehouses by name, then lists the dates where a warehouse
//! accepts shipments at the requested coefficient.
//!
//! ## Usage
//!
//! ```bash
//! export WB_API=your_token_here
//! cargo run -p wbmarket-core --example available_slots -- Коледино 1
//! ```

use wbmarket_core::{ClientConfig, MarketplaceClient, WarehouseIds};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let warehouse = args.next().unwrap_or_else(|| String::from("Коледино"));
    let coefficient: f64 = args.next().as_deref().unwrap_or("1").parse()?;

    dotenv::dotenv().ok();
    let client = MarketplaceClient::new(ClientConfig::from_env()?);

    let matches = client.find_warehouses_by_name(&warehouse).await?;
    println!("Warehouses matching '{warehouse}': {}", matches.len());
    for found in &matches {
        println!("  #{} {} ({})", found.id, found.name, found.address);
    }

    let ids = WarehouseIds::new(matches.iter().map(|w| w.id));
    let rows = client.fetch_acceptance_coefficients(Some(&ids)).await?;
    println!("Coefficient rows for those warehouses: {}", rows.len());

    let available = client
        .find_available_coefficients(coefficient, &warehouse)
        .await?;
    println!("Dates open at coefficient {coefficient}:");
    for row in &available {
        println!("  {} {} ({})", row.date, row.warehouse_name, row.box_type_name);
    }

    Ok(())
}
