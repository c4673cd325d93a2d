use gecko_core::{
    CoinGeckoClient, ContractInfoParams, ContractMarketChartParams,
    ContractMarketChartRangeParams,
};
use serde_json::Value;

use crate::cli::ContractCommand;
use crate::error::CliError;

use super::json;

pub async fn run(command: &ContractCommand, client: &CoinGeckoClient) -> Result<Value, CliError> {
    match command {
        ContractCommand::Info(target) => {
            let params = ContractInfoParams::new(&target.platform, &target.contract_address);
            json(&client.contract_info(&params).await?)
        }
        ContractCommand::Chart {
            target,
            vs_currency,
            days,
            precision,
        } => {
            let params = ContractMarketChartParams {
                precision: *precision,
                ..ContractMarketChartParams::new(
                    &target.platform,
                    &target.contract_address,
                    vs_currency,
                    *days,
                )
            };
            json(&client.contract_market_chart(&params).await?)
        }
        ContractCommand::ChartRange {
            target,
            vs_currency,
            from,
            to,
            precision,
        } => {
            let params = ContractMarketChartRangeParams {
                precision: *precision,
                ..ContractMarketChartRangeParams::new(
                    &target.platform,
                    &target.contract_address,
                    vs_currency,
                    *from,
                    *to,
                )
            };
            json(&client.contract_market_chart_range(&params).await?)
        }
    }
}
