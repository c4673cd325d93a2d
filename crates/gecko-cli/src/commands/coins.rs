use gecko_core::{
    CoinByIdParams, CoinGeckoClient, CoinHistoryParams, CoinListParams, CoinOhlcParams,
    HistoryDate, MarketChartParams, MarketChartRangeParams, MarketParams, TickerParams,
};
use serde_json::Value;
use time::macros::format_description;
use time::Date;

use crate::cli::{CoinsCommand, HistoryArgs};
use crate::error::CliError;

use super::json;

pub async fn run(command: &CoinsCommand, client: &CoinGeckoClient) -> Result<Value, CliError> {
    match command {
        CoinsCommand::List { include_platform } => {
            let params = CoinListParams {
                include_platform: include_platform.then_some(true),
            };
            json(&client.coin_list(&params).await?)
        }
        CoinsCommand::Markets(args) => {
            let params = MarketParams {
                ids: args.ids.clone(),
                category: args.category.clone(),
                order: args.order,
                per_page: args.per_page,
                page: args.page,
                sparkline: args.sparkline,
                price_change_percentage: args.price_change_percentage.clone(),
                locale: args.locale,
                precision: args.precision,
                ..MarketParams::new(&args.vs_currency)
            };
            json(&client.coin_markets(&params).await?)
        }
        CoinsCommand::Get(args) => {
            let params = CoinByIdParams {
                localization: args.localization,
                tickers: args.tickers,
                market_data: args.market_data,
                community_data: args.community_data,
                developer_data: args.developer_data,
                sparkline: args.sparkline,
                ..CoinByIdParams::new(&args.id)
            };
            json(&client.coin(&params).await?)
        }
        CoinsCommand::Tickers(args) => {
            let params = TickerParams {
                exchange_ids: args.exchange_ids.clone(),
                include_exchange_logo: args.include_exchange_logo,
                page: args.page,
                order: args.order,
                depth: args.depth,
                ..TickerParams::new(&args.id)
            };
            json(&client.coin_tickers(&params).await?)
        }
        CoinsCommand::History(args) => {
            let params = CoinHistoryParams {
                localization: args.localization,
                ..CoinHistoryParams::new(&args.id, history_date(args)?)
            };
            json(&client.coin_history(&params).await?)
        }
        CoinsCommand::Chart(args) => {
            let params = MarketChartParams {
                interval: args.interval,
                precision: args.precision,
                ..MarketChartParams::new(&args.id, &args.vs_currency, args.days)
            };
            json(&client.coin_market_chart(&params).await?)
        }
        CoinsCommand::ChartRange(args) => {
            let params = MarketChartRangeParams {
                precision: args.precision,
                ..MarketChartRangeParams::new(&args.id, &args.vs_currency, args.from, args.to)
            };
            json(&client.coin_market_chart_range(&params).await?)
        }
        CoinsCommand::Ohlc(args) => {
            let params = CoinOhlcParams {
                precision: args.precision,
                ..CoinOhlcParams::new(&args.id, &args.vs_currency, args.days)
            };
            json(&client.coin_ohlc(&params).await?)
        }
    }
}

fn history_date(args: &HistoryArgs) -> Result<HistoryDate, CliError> {
    match (&args.date, args.unix) {
        (Some(raw), _) => {
            let date = Date::parse(raw.trim(), format_description!("[year]-[month]-[day]"))
                .map_err(|error| {
                    CliError::Command(format!("invalid --date '{raw}': {error}, expected YYYY-MM-DD"))
                })?;
            Ok(HistoryDate::Date(date))
        }
        (None, Some(seconds)) => Ok(HistoryDate::Unix(seconds)),
        (None, None) => Err(CliError::Command(String::from(
            "either --date or --unix is required",
        ))),
    }
}
