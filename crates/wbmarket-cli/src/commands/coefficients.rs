use wbmarket_core::{AcceptanceCoefficient, MarketplaceClient, WarehouseIds};

use crate::cli::CoefficientsArgs;
use crate::error::CliError;
use crate::output::Table;

use super::{yes_no, CommandResult};

pub async fn run(
    args: &CoefficientsArgs,
    client: &MarketplaceClient,
) -> Result<CommandResult, CliError> {
    let ids = args
        .warehouse_ids
        .as_deref()
        .map(WarehouseIds::parse)
        .transpose()?;
    let rows = client.fetch_acceptance_coefficients(ids.as_ref()).await?;

    Ok(CommandResult::new(
        serde_json::to_value(&rows)?,
        coefficient_table(&rows),
    ))
}

pub(super) fn coefficient_table(rows: &[AcceptanceCoefficient]) -> Table {
    let mut table = Table::new(vec![
        "date",
        "warehouse id",
        "warehouse",
        "coefficient",
        "unload",
        "box type",
        "sorting center",
    ]);
    for row in rows {
        table.push_row(vec![
            row.date.clone(),
            row.warehouse_id.to_string(),
            row.warehouse_name.clone(),
            row.coefficient
                .map(|value| value.to_string())
                .unwrap_or_else(|| String::from("-")),
            yes_no(row.allow_unload),
            row.box_type_name.clone(),
            yes_no(row.is_sorting_center),
        ]);
    }
    table
}
