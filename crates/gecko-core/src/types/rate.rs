use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One entry of `GET /exchange_rates`, valued against BTC.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pub name: String,
    pub unit: String,
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    pub rates: BTreeMap<String, ExchangeRate>,
}
