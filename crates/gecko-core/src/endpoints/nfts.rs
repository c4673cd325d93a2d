use super::PaginationParams;
use crate::query::{path_segment, QueryParams};
use crate::types::{NftItem, NftListItem};
use crate::{CoinGeckoClient, Result};

option_enum! {
    NftOrder, "order" {
        H24VolumeNativeAsc => "h24_volume_native_asc",
        H24VolumeNativeDesc => "h24_volume_native_desc",
        FloorPriceNativeAsc => "floor_price_native_asc",
        FloorPriceNativeDesc => "floor_price_native_desc",
        MarketCapNativeAsc => "market_cap_native_asc",
        MarketCapNativeDesc => "market_cap_native_desc",
        MarketCapUsdAsc => "market_cap_usd_asc",
        MarketCapUsdDesc => "market_cap_usd_desc",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NftListParams {
    pub asset_platform_id: Option<String>,
    pub order: Option<NftOrder>,
    pub pagination: PaginationParams,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftByIdParams {
    pub id: String,
}

impl NftByIdParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NftByContractParams {
    pub asset_platform_id: String,
    pub contract_address: String,
}

impl NftByContractParams {
    pub fn new(asset_platform_id: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self {
            asset_platform_id: asset_platform_id.into(),
            contract_address: contract_address.into(),
        }
    }
}

impl CoinGeckoClient {
    /// `GET /nfts/list`
    pub async fn nfts_list(&self, params: &NftListParams) -> Result<Vec<NftListItem>> {
        let mut query = QueryParams::new();
        query
            .push_opt("asset_platform_id", params.asset_platform_id.as_deref())
            .push_opt("order", params.order);
        params.pagination.apply(&mut query);

        self.get("nfts/list", query).await
    }

    /// `GET /nfts/{id}`
    pub async fn nft(&self, params: &NftByIdParams) -> Result<NftItem> {
        let endpoint = format!("nfts/{}", path_segment(&params.id));
        self.get(&endpoint, QueryParams::new()).await
    }

    /// `GET /nfts/{asset_platform_id}/contract/{contract_address}`
    pub async fn nft_by_contract(&self, params: &NftByContractParams) -> Result<NftItem> {
        let endpoint = format!(
            "nfts/{}/contract/{}",
            path_segment(&params.asset_platform_id),
            path_segment(&params.contract_address)
        );
        self.get(&endpoint, QueryParams::new()).await
    }
}
