use wbmarket_core::MarketplaceClient;

use crate::cli::AvailableArgs;
use crate::error::CliError;

use super::coefficients::coefficient_table;
use super::CommandResult;

pub async fn run(args: &AvailableArgs, client: &MarketplaceClient) -> Result<CommandResult, CliError> {
    let rows = client
        .find_available_coefficients(args.coefficient, args.warehouse.trim())
        .await?;
    tracing::info!(
        warehouse = %args.warehouse,
        coefficient = args.coefficient,
        matches = rows.len(),
        "available acceptance dates"
    );

    Ok(CommandResult::new(
        serde_json::to_value(&rows)?,
        coefficient_table(&rows),
    ))
}
