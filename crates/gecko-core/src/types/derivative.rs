use serde::{Deserialize, Serialize};

/// Row of `GET /derivatives`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Derivative {
    pub market: String,
    pub symbol: String,
    #[serde(default)]
    pub index_id: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub price_percentage_change_24h: Option<f64>,
    #[serde(default)]
    pub contract_type: Option<String>,
    #[serde(default)]
    pub index: Option<f64>,
    #[serde(default)]
    pub basis: Option<f64>,
    #[serde(default)]
    pub spread: Option<f64>,
    #[serde(default)]
    pub funding_rate: Option<f64>,
    #[serde(default)]
    pub open_interest: Option<f64>,
    #[serde(default)]
    pub volume_24h: Option<f64>,
    #[serde(default)]
    pub last_traded_at: Option<i64>,
    #[serde(default)]
    pub expired_at: Option<String>,
}

/// Row of `GET /derivatives/exchanges`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivativeExchange {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub open_interest_btc: Option<f64>,
    #[serde(default)]
    pub trade_volume_24h_btc: Option<String>,
    #[serde(default)]
    pub number_of_perpetual_pairs: Option<u32>,
    #[serde(default)]
    pub number_of_futures_pairs: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub year_established: Option<u32>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Body of `GET /derivatives/exchanges/{id}`: the listing row without `id`,
/// plus tickers when `include_tickers` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivativeExchangeById {
    pub name: String,
    #[serde(default)]
    pub open_interest_btc: Option<f64>,
    #[serde(default)]
    pub trade_volume_24h_btc: Option<String>,
    #[serde(default)]
    pub number_of_perpetual_pairs: Option<u32>,
    #[serde(default)]
    pub number_of_futures_pairs: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub year_established: Option<u32>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub tickers: Vec<serde_json::Value>,
}
