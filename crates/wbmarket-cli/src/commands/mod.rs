mod available;
mod coefficients;
mod supplies;
mod supply;
mod warehouses;

use serde_json::Value;
use wbmarket_core::config::ENV_API_KEY;
use wbmarket_core::{ClientConfig, MarketplaceClient};

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::output::Table;

pub struct CommandResult {
    pub data: Value,
    pub table: Table,
}

impl CommandResult {
    pub fn new(data: Value, table: Table) -> Self {
        Self { data, table }
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    let client = MarketplaceClient::new(resolve_config(cli)?);

    match &cli.command {
        Command::Supplies(args) => supplies::run(args, &client).await,
        Command::Supply(args) => supply::run(args, &client).await,
        Command::Warehouses(args) => warehouses::run(args, &client).await,
        Command::Coefficients(args) => coefficients::run(args, &client).await,
        Command::Available(args) => available::run(args, &client).await,
    }
}

fn resolve_config(cli: &Cli) -> Result<ClientConfig, CliError> {
    resolve_config_with(cli, |name| std::env::var(name).ok())
}

/// Flags win over the environment.
fn resolve_config_with<F>(cli: &Cli, lookup: F) -> Result<ClientConfig, CliError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ClientConfig::from_lookup(|name| match (&cli.api_key, name) {
        (Some(key), ENV_API_KEY) => Some(key.clone()),
        _ => lookup(name),
    })?;

    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }

    tracing::debug!(
        marketplace = %config.marketplace_url,
        supplies = %config.supplies_url,
        timeout_ms = config.timeout_ms,
        "client configured"
    );
    Ok(config)
}

fn yes_no(value: bool) -> String {
    String::from(if value { "yes" } else { "no" })
}
