use gecko_core::{
    CoinGeckoClient, DerivativeExchangeByIdParams, DerivativeExchangeParams, DerivativeParams,
};
use serde_json::Value;

use crate::cli::DerivativesCommand;
use crate::error::CliError;

use super::{json, pagination};

pub async fn run(
    command: &DerivativesCommand,
    client: &CoinGeckoClient,
) -> Result<Value, CliError> {
    match command {
        DerivativesCommand::Tickers { include_tickers } => {
            let params = DerivativeParams {
                include_tickers: *include_tickers,
            };
            json(&client.derivatives(&params).await?)
        }
        DerivativesCommand::Exchanges {
            order,
            pagination: page,
        } => {
            let params = DerivativeExchangeParams {
                order: *order,
                pagination: pagination(page),
            };
            json(&client.derivatives_exchanges(&params).await?)
        }
        DerivativesCommand::Exchange {
            id,
            include_tickers,
        } => {
            let params = DerivativeExchangeByIdParams {
                include_tickers: *include_tickers,
                ..DerivativeExchangeByIdParams::new(id)
            };
            json(&client.derivatives_exchange(&params).await?)
        }
        DerivativesCommand::Ids => json(&client.derivatives_exchanges_list().await?),
    }
}
