use gecko_core::{CoinGeckoClient, CompanyDataParams};
use serde_json::Value;

use crate::cli::{GlobalArgs, SearchArgs, TreasuryArgs};
use crate::error::CliError;

use super::json;

pub async fn search(args: &SearchArgs, client: &CoinGeckoClient) -> Result<Value, CliError> {
    let query = args.query.trim();
    if query.is_empty() {
        return Err(CliError::Command(String::from("query must not be empty")));
    }

    json(&client.search(query).await?)
}

pub async fn global(args: &GlobalArgs, client: &CoinGeckoClient) -> Result<Value, CliError> {
    if args.defi {
        json(&client.global_defi().await?)
    } else {
        json(&client.global().await?)
    }
}

pub async fn treasury(args: &TreasuryArgs, client: &CoinGeckoClient) -> Result<Value, CliError> {
    let params = CompanyDataParams::new(args.coin);
    json(&client.companies_public_treasury(&params).await?)
}
