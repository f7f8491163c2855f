use wbmarket_core::{MarketplaceClient, Pagination};

use crate::cli::SuppliesArgs;
use crate::error::CliError;
use crate::output::Table;

use super::{yes_no, CommandResult};

pub async fn run(args: &SuppliesArgs, client: &MarketplaceClient) -> Result<CommandResult, CliError> {
    let pagination = Pagination::new(args.limit, args.next)?;
    let page = client.fetch_supplies_page(pagination).await?;

    let mut table = Table::new(vec!["id", "name", "done", "created", "closed", "cargo"]);
    for supply in &page.supplies {
        table.push_row(vec![
            supply.id.clone(),
            supply.name.clone(),
            yes_no(supply.done),
            supply.created_at.clone(),
            supply.closed_at.clone().unwrap_or_else(|| String::from("-")),
            supply.cargo_type.to_string(),
        ]);
    }
    let table = table.with_footer(format!("next: {}", page.next));

    Ok(CommandResult::new(serde_json::to_value(&page)?, table))
}
