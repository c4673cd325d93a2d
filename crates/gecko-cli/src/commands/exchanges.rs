use gecko_core::{
    CoinGeckoClient, ExchangeByIdParams, ExchangeTickerParams, ExchangeVolumeChartParams,
};
use serde_json::Value;

use crate::cli::ExchangesCommand;
use crate::error::CliError;

use super::{json, pagination};

pub async fn run(command: &ExchangesCommand, client: &CoinGeckoClient) -> Result<Value, CliError> {
    match command {
        ExchangesCommand::List { pagination: page } => {
            json(&client.exchanges(&pagination(page)).await?)
        }
        ExchangesCommand::Ids => json(&client.exchanges_list().await?),
        ExchangesCommand::Get { id } => {
            json(&client.exchange(&ExchangeByIdParams::new(id)).await?)
        }
        ExchangesCommand::Tickers {
            id,
            coin_ids,
            include_exchange_logo,
            page,
            order,
            depth,
        } => {
            let params = ExchangeTickerParams {
                coin_ids: coin_ids.clone(),
                include_exchange_logo: *include_exchange_logo,
                page: *page,
                order: *order,
                depth: *depth,
                ..ExchangeTickerParams::new(id)
            };
            json(&client.exchange_tickers(&params).await?)
        }
        ExchangesCommand::VolumeChart { id, days } => {
            let params = ExchangeVolumeChartParams::new(id, *days);
            json(&client.exchange_volume_chart(&params).await?)
        }
    }
}
