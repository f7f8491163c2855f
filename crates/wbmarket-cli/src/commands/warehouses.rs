use wbmarket_core::MarketplaceClient;

use crate::cli::WarehousesArgs;
use crate::error::CliError;
use crate::output::Table;

use super::{yes_no, CommandResult};

pub async fn run(
    args: &WarehousesArgs,
    client: &MarketplaceClient,
) -> Result<CommandResult, CliError> {
    let warehouses = match args.name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => client.find_warehouses_by_name(name).await?,
        _ => client.fetch_warehouses().await?,
    };

    let mut table = Table::new(vec!["id", "name", "work time", "qr", "active", "transit", "address"]);
    for warehouse in &warehouses {
        table.push_row(vec![
            warehouse.id.to_string(),
            warehouse.name.clone(),
            warehouse.work_time.clone(),
            yes_no(warehouse.accepts_qr),
            yes_no(warehouse.is_active),
            yes_no(warehouse.is_transit_active),
            warehouse.address.clone(),
        ]);
    }

    Ok(CommandResult::new(serde_json::to_value(&warehouses)?, table))
}
