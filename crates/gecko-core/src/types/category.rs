use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinCategoryListItem {
    pub category_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_change_24h: Option<f64>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub top_3_coins: Vec<String>,
    #[serde(default)]
    pub volume_24h: Option<f64>,
    #[serde(default)]
    pub updated_at: Option<String>,
}
