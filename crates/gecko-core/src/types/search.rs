use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCoinItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub api_symbol: Option<String>,
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchExchangeItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub market_type: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCategoryItem {
    pub id: serde_json::Value,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchNftItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub thumb: Option<String>,
}

/// Body of `GET /search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default)]
    pub coins: Vec<SearchCoinItem>,
    #[serde(default)]
    pub exchanges: Vec<SearchExchangeItem>,
    #[serde(default)]
    pub categories: Vec<SearchCategoryItem>,
    #[serde(default)]
    pub nfts: Vec<SearchNftItem>,
}
