use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalMetrics {
    #[serde(default)]
    pub active_cryptocurrencies: Option<u64>,
    #[serde(default)]
    pub upcoming_icos: Option<u64>,
    #[serde(default)]
    pub ongoing_icos: Option<u64>,
    #[serde(default)]
    pub ended_icos: Option<u64>,
    #[serde(default)]
    pub markets: Option<u64>,
    #[serde(default)]
    pub total_market_cap: BTreeMap<String, f64>,
    #[serde(default)]
    pub total_volume: BTreeMap<String, f64>,
    #[serde(default)]
    pub market_cap_percentage: BTreeMap<String, f64>,
    #[serde(default)]
    pub market_cap_change_percentage_24h_usd: Option<f64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

/// Body of `GET /global`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalData {
    pub data: GlobalMetrics,
}

/// Decimal figures arrive as strings and are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalDeFiMetrics {
    #[serde(default)]
    pub defi_market_cap: Option<String>,
    #[serde(default)]
    pub eth_market_cap: Option<String>,
    #[serde(default)]
    pub defi_to_eth_ratio: Option<String>,
    #[serde(default)]
    pub trading_volume_24h: Option<String>,
    #[serde(default)]
    pub defi_dominance: Option<String>,
    #[serde(default)]
    pub top_coin_name: Option<String>,
    #[serde(default)]
    pub top_coin_defi_dominance: Option<f64>,
}

/// Body of `GET /global/decentralized_finance_defi`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalDeFiData {
    pub data: GlobalDeFiMetrics,
}
