mod catalog;
mod coins;
mod contract;
mod derivatives;
mod exchanges;
mod general;
mod nfts;
mod simple;

use gecko_core::{ClientConfig, CoinGeckoClient, PaginationParams, ValidationError};
use serde::Serialize;
use serde_json::Value;

use crate::cli::{Cli, Command, PaginationArgs};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    let client = build_client(cli)?;
    tracing::debug!(client = ?client, "dispatching command");

    match &cli.command {
        Command::Ping => json(&client.ping().await?),
        Command::Price(args) => simple::price(args, &client).await,
        Command::TokenPrice(args) => simple::token_price(args, &client).await,
        Command::Currencies => json(&client.supported_vs_currencies().await?),
        Command::Coins(args) => coins::run(&args.command, &client).await,
        Command::Contract(args) => contract::run(&args.command, &client).await,
        Command::Platforms(args) => catalog::platforms(args, &client).await,
        Command::Categories(args) => catalog::categories(&args.command, &client).await,
        Command::Exchanges(args) => exchanges::run(&args.command, &client).await,
        Command::Derivatives(args) => derivatives::run(&args.command, &client).await,
        Command::Nfts(args) => nfts::run(&args.command, &client).await,
        Command::Rates => json(&client.exchange_rates().await?),
        Command::Search(args) => general::search(args, &client).await,
        Command::Trending => json(&client.trending().await?),
        Command::Global(args) => general::global(args, &client).await,
        Command::Treasury(args) => general::treasury(args, &client).await,
    }
}

fn build_client(cli: &Cli) -> Result<CoinGeckoClient, CliError> {
    if cli.timeout_ms == 0 {
        return Err(ValidationError::InvalidTimeout {
            value: cli.timeout_ms.to_string(),
        }
        .into());
    }

    let mut config = ClientConfig::new(cli.tier).with_timeout_ms(cli.timeout_ms);
    if let Some(key) = cli.api_key.as_deref().filter(|key| !key.trim().is_empty()) {
        config = config.with_api_key(key);
    }

    Ok(CoinGeckoClient::new(config))
}

fn json<T: Serialize>(value: &T) -> Result<Value, CliError> {
    serde_json::to_value(value).map_err(CliError::from)
}

fn pagination(args: &PaginationArgs) -> PaginationParams {
    PaginationParams {
        per_page: args.per_page,
        page: args.page,
    }
}
