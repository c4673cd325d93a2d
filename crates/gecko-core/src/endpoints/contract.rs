use super::{Days, Precision};
use crate::query::{path_segment, QueryParams};
use crate::types::{CoinVerbose, MarketChart};
use crate::{CoinGeckoClient, Result};

/// Coin lookup by token contract. `id` is the asset platform, e.g. `ethereum`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractInfoParams {
    pub id: String,
    pub contract_address: String,
}

impl ContractInfoParams {
    pub fn new(id: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            contract_address: contract_address.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractMarketChartParams {
    pub id: String,
    pub contract_address: String,
    pub vs_currency: String,
    pub days: Days,
    pub precision: Option<Precision>,
}

impl ContractMarketChartParams {
    pub fn new(
        id: impl Into<String>,
        contract_address: impl Into<String>,
        vs_currency: impl Into<String>,
        days: impl Into<Days>,
    ) -> Self {
        Self {
            id: id.into(),
            contract_address: contract_address.into(),
            vs_currency: vs_currency.into(),
            days: days.into(),
            precision: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractMarketChartRangeParams {
    pub id: String,
    pub contract_address: String,
    pub vs_currency: String,
    pub from: i64,
    pub to: i64,
    pub precision: Option<Precision>,
}

impl ContractMarketChartRangeParams {
    pub fn new(
        id: impl Into<String>,
        contract_address: impl Into<String>,
        vs_currency: impl Into<String>,
        from: i64,
        to: i64,
    ) -> Self {
        Self {
            id: id.into(),
            contract_address: contract_address.into(),
            vs_currency: vs_currency.into(),
            from,
            to,
            precision: None,
        }
    }
}

// The contract address travels in the path and again as a query parameter.
impl CoinGeckoClient {
    /// `GET /coins/{id}/contract/{contract_address}`
    pub async fn contract_info(&self, params: &ContractInfoParams) -> Result<CoinVerbose> {
        let mut query = QueryParams::new();
        query.push("contract_address", &params.contract_address);

        self.get(&contract_path(&params.id, &params.contract_address, ""), query)
            .await
    }

    /// `GET /coins/{id}/contract/{contract_address}/market_chart`
    pub async fn contract_market_chart(
        &self,
        params: &ContractMarketChartParams,
    ) -> Result<MarketChart> {
        let mut query = QueryParams::new();
        query
            .push("contract_address", &params.contract_address)
            .push("vs_currency", &params.vs_currency)
            .push("days", params.days)
            .push_opt("precision", params.precision);

        let endpoint = contract_path(&params.id, &params.contract_address, "/market_chart");
        self.get(&endpoint, query).await
    }

    /// `GET /coins/{id}/contract/{contract_address}/market_chart/range`
    pub async fn contract_market_chart_range(
        &self,
        params: &ContractMarketChartRangeParams,
    ) -> Result<MarketChart> {
        let mut query = QueryParams::new();
        query
            .push("contract_address", &params.contract_address)
            .push("vs_currency", &params.vs_currency)
            .push("from", params.from)
            .push("to", params.to)
            .push_opt("precision", params.precision);

        let endpoint = contract_path(
            &params.id,
            &params.contract_address,
            "/market_chart/range",
        );
        self.get(&endpoint, query).await
    }
}

fn contract_path(id: &str, contract_address: &str, suffix: &str) -> String {
    format!(
        "coins/{}/contract/{}{}",
        path_segment(id),
        path_segment(contract_address),
        suffix
    )
}
