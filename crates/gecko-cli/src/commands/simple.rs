use gecko_core::{CoinGeckoClient, PriceByContractParams, PriceByIdParams, PriceOptions};
use serde_json::Value;

use crate::cli::{PriceArgs, PriceFlags, TokenPriceArgs};
use crate::error::CliError;

use super::json;

pub async fn price(args: &PriceArgs, client: &CoinGeckoClient) -> Result<Value, CliError> {
    let params = PriceByIdParams::new(&args.ids, &args.vs_currencies)
        .with_options(price_options(&args.flags));
    json(&client.price_by_id(&params).await?)
}

pub async fn token_price(
    args: &TokenPriceArgs,
    client: &CoinGeckoClient,
) -> Result<Value, CliError> {
    let params = PriceByContractParams::new(
        args.platform.as_str(),
        &args.contract_addresses,
        &args.vs_currencies,
    )
    .with_options(price_options(&args.flags));
    json(&client.price_by_contract(&params).await?)
}

// Unset flags are left out of the request rather than sent as `false`.
fn price_options(flags: &PriceFlags) -> PriceOptions {
    PriceOptions {
        include_market_cap: flags.include_market_cap.then_some(true),
        include_24hr_vol: flags.include_24hr_vol.then_some(true),
        include_24hr_change: flags.include_24hr_change.then_some(true),
        include_last_updated_at: flags.include_last_updated_at.then_some(true),
        precision: flags.precision,
    }
}
