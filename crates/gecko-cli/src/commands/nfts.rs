use gecko_core::{CoinGeckoClient, NftByContractParams, NftByIdParams, NftListParams};
use serde_json::Value;

use crate::cli::NftsCommand;
use crate::error::CliError;

use super::{json, pagination};

pub async fn run(command: &NftsCommand, client: &CoinGeckoClient) -> Result<Value, CliError> {
    match command {
        NftsCommand::List {
            asset_platform_id,
            order,
            pagination: page,
        } => {
            let params = NftListParams {
                asset_platform_id: asset_platform_id.clone(),
                order: *order,
                pagination: pagination(page),
            };
            json(&client.nfts_list(&params).await?)
        }
        NftsCommand::Get { id } => json(&client.nft(&NftByIdParams::new(id)).await?),
        NftsCommand::Contract(target) => {
            let params = NftByContractParams::new(&target.platform, &target.contract_address);
            json(&client.nft_by_contract(&params).await?)
        }
    }
}
