//! CLI argument definitions for wbmarket.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `supplies` | List supplies page by page |
//! | `supply` | Show one supply by id |
//! | `warehouses` | List acceptance warehouses, optionally by name |
//! | `coefficients` | List acceptance coefficients |
//! | `available` | Dates a warehouse accepts at a given coefficient |
//!
//! # Examples
//!
//! ```bash
//! wbmarket supplies --limit 4
//! wbmarket supply WB-GI-166688565 --pretty
//! wbmarket warehouses --name Брянск --format table
//! wbmarket coefficients --warehouse-ids 302988,215020,301760
//! wbmarket available --coefficient 1 --warehouse Коледино
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Wildberries seller API client.
///
/// Reads the API key from WB_API (a `.env` file in the working directory is
/// loaded first) unless --api-key is given.
#[derive(Debug, Parser)]
#[command(name = "wbmarket", author, version, about = "Wildberries supplies and warehouses client")]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// API key; overrides WB_API.
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// Request timeout in milliseconds; overrides WB_TIMEOUT_MS.
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: Option<u64>,

    /// Log requests to stderr (same as RUST_LOG=debug).
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON document.
    Json,
    /// Aligned columns for terminal display.
    Table,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List supplies.
    ///
    /// Pass the printed `next` value back with --next to get the following page.
    Supplies(SuppliesArgs),

    /// Show one supply by id.
    Supply(SupplyArgs),

    /// List acceptance warehouses.
    Warehouses(WarehousesArgs),

    /// List acceptance coefficients.
    Coefficients(CoefficientsArgs),

    /// Dates a warehouse accepts unloading at exactly the given coefficient.
    Available(AvailableArgs),
}

#[derive(Debug, Args)]
pub struct SuppliesArgs {
    /// Page size (1..=1000).
    #[arg(long, default_value_t = 1)]
    pub limit: u32,

    /// Cursor from the previous page; 0 for the first page.
    #[arg(long, default_value_t = 0)]
    pub next: i64,
}

#[derive(Debug, Args)]
pub struct SupplyArgs {
    /// Supply id, e.g. WB-GI-1234567.
    pub id: String,
}

#[derive(Debug, Args)]
pub struct WarehousesArgs {
    /// Keep warehouses whose name contains this text (case-insensitive).
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Debug, Args)]
pub struct CoefficientsArgs {
    /// Comma-separated warehouse ids, e.g. 302988,215020.
    #[arg(long)]
    pub warehouse_ids: Option<String>,
}

#[derive(Debug, Args)]
pub struct AvailableArgs {
    /// Acceptance coefficient to match exactly.
    #[arg(long)]
    pub coefficient: f64,

    /// Warehouse name to match exactly (case-insensitive).
    #[arg(long)]
    pub warehouse: String,
}
