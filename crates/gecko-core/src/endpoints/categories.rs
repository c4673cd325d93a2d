use crate::query::QueryParams;
use crate::types::{AssetPlatform, CoinCategory, CoinCategoryListItem};
use crate::{CoinGeckoClient, Result};

option_enum! {
    AssetPlatformFilter, "filter" {
        Nft => "nft",
    }
}

option_enum! {
    CategoryOrder, "order" {
        MarketCapAsc => "market_cap_asc",
        MarketCapDesc => "market_cap_desc",
        NameDesc => "name_desc",
        NameAsc => "name_asc",
        MarketCapChange24hDesc => "market_cap_change_24h_desc",
        MarketCapChange24hAsc => "market_cap_change_24h_asc",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssetPlatformParams {
    pub filter: Option<AssetPlatformFilter>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoinCategoryParams {
    pub order: Option<CategoryOrder>,
}

impl CoinGeckoClient {
    /// `GET /asset_platforms`
    pub async fn asset_platforms(&self, params: &AssetPlatformParams) -> Result<Vec<AssetPlatform>> {
        let mut query = QueryParams::new();
        query.push_opt("filter", params.filter);

        self.get("asset_platforms", query).await
    }

    /// `GET /coins/categories/list`
    pub async fn coin_categories_list(&self) -> Result<Vec<CoinCategoryListItem>> {
        self.get("coins/categories/list", QueryParams::new()).await
    }

    /// `GET /coins/categories`
    pub async fn coin_categories(&self, params: &CoinCategoryParams) -> Result<Vec<CoinCategory>> {
        let mut query = QueryParams::new();
        query.push_opt("order", params.order);

        self.get("coins/categories", query).await
    }
}
