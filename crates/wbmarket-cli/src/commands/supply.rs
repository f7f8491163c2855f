use wbmarket_core::{MarketplaceClient, SupplyId};

use crate::cli::SupplyArgs;
use crate::error::CliError;
use crate::output::Table;

use super::{yes_no, CommandResult};

pub async fn run(args: &SupplyArgs, client: &MarketplaceClient) -> Result<CommandResult, CliError> {
    let id = SupplyId::parse(&args.id)?;
    let supply = client.fetch_supply(&id).await?;

    let dash = || String::from("-");
    let mut table = Table::new(vec!["field", "value"]);
    for (field, value) in [
        ("id", supply.id.clone()),
        ("name", supply.name.clone()),
        ("done", yes_no(supply.done)),
        ("created", supply.created_at.clone()),
        ("closed", supply.closed_at.clone().unwrap_or_else(dash)),
        ("scanned", supply.scan_dt.clone().unwrap_or_else(dash)),
        ("cargo type", supply.cargo_type.to_string()),
    ] {
        table.push_row(vec![String::from(field), value]);
    }

    Ok(CommandResult::new(serde_json::to_value(&supply)?, table))
}
