use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub country: Option<String>,
    pub total_holdings: f64,
    #[serde(default)]
    pub total_entry_value_usd: Option<f64>,
    #[serde(default)]
    pub total_current_value_usd: Option<f64>,
    #[serde(default)]
    pub percentage_of_total_supply: Option<f64>,
}

/// Public company treasury holdings for one coin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompaniesData {
    pub total_holdings: f64,
    pub total_value_usd: f64,
    #[serde(default)]
    pub market_cap_dominance: Option<f64>,
    #[serde(default)]
    pub companies: Vec<Company>,
}
