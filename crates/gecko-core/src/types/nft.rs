use serde::{Deserialize, Serialize};

use super::ImageData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftListItem {
    pub id: String,
    #[serde(default)]
    pub contract_address: Option<String>,
    pub name: String,
    #[serde(default)]
    pub asset_platform_id: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// A value quoted both in the collection's native currency and in USD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NftValues {
    #[serde(default)]
    pub native_currency: Option<f64>,
    #[serde(default)]
    pub usd: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftLinks {
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub discord: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftExplorer {
    pub name: String,
    pub link: String,
}

/// Collection detail from `GET /nfts/{id}` or the contract lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftItem {
    pub id: String,
    #[serde(default)]
    pub contract_address: Option<String>,
    #[serde(default)]
    pub asset_platform_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub image: ImageData,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub native_currency: Option<String>,
    #[serde(default)]
    pub native_currency_symbol: Option<String>,
    #[serde(default)]
    pub floor_price: NftValues,
    #[serde(default)]
    pub market_cap: NftValues,
    #[serde(default)]
    pub volume_24h: NftValues,
    #[serde(default)]
    pub floor_price_in_usd_24h_percentage_change: Option<f64>,
    #[serde(default)]
    pub floor_price_24h_percentage_change: NftValues,
    #[serde(default)]
    pub market_cap_24h_percentage_change: NftValues,
    #[serde(default)]
    pub volume_24h_percentage_change: NftValues,
    #[serde(default)]
    pub number_of_unique_addresses: Option<u64>,
    #[serde(default)]
    pub number_of_unique_addresses_24h_percentage_change: Option<f64>,
    #[serde(default)]
    pub volume_in_usd_24h_percentage_change: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub links: NftLinks,
    #[serde(default)]
    pub floor_price_7d_percentage_change: NftValues,
    #[serde(default)]
    pub floor_price_14d_percentage_change: NftValues,
    #[serde(default)]
    pub floor_price_30d_percentage_change: NftValues,
    #[serde(default)]
    pub floor_price_60d_percentage_change: NftValues,
    #[serde(default)]
    pub floor_price_1y_percentage_change: NftValues,
    #[serde(default)]
    pub explorers: Vec<NftExplorer>,
}
