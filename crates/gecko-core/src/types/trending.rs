use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingCoinItem {
    pub id: String,
    #[serde(default)]
    pub coin_id: Option<u64>,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub price_btc: Option<f64>,
    #[serde(default)]
    pub score: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingCoin {
    pub item: TrendingCoinItem,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingNft {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub nft_contract_id: Option<u64>,
    #[serde(default)]
    pub floor_price_in_native_currency: Option<f64>,
    #[serde(default)]
    pub floor_price_24h_percentage_change: Option<f64>,
}

/// Body of `GET /search/trending`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trending {
    #[serde(default)]
    pub coins: Vec<TrendingCoin>,
    #[serde(default)]
    pub nfts: Vec<TrendingNft>,
}
