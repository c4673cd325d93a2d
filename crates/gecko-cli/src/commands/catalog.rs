use gecko_core::{AssetPlatformParams, CoinCategoryParams, CoinGeckoClient};
use serde_json::Value;

use crate::cli::{CategoriesCommand, PlatformsArgs};
use crate::error::CliError;

use super::json;

pub async fn platforms(args: &PlatformsArgs, client: &CoinGeckoClient) -> Result<Value, CliError> {
    let params = AssetPlatformParams {
        filter: args.filter,
    };
    json(&client.asset_platforms(&params).await?)
}

pub async fn categories(
    command: &CategoriesCommand,
    client: &CoinGeckoClient,
) -> Result<Value, CliError> {
    match command {
        CategoriesCommand::List => json(&client.coin_categories_list().await?),
        CategoriesCommand::Markets { order } => {
            let params = CoinCategoryParams { order: *order };
            json(&client.coin_categories(&params).await?)
        }
    }
}
