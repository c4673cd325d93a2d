use super::{owned_list, Precision};
use crate::query::{path_segment, QueryParams};
use crate::types::Price;
use crate::{CoinGeckoClient, Result};

/// Optional columns shared by both price lookups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceOptions {
    pub include_market_cap: Option<bool>,
    pub include_24hr_vol: Option<bool>,
    pub include_24hr_change: Option<bool>,
    pub include_last_updated_at: Option<bool>,
    pub precision: Option<Precision>,
}

impl PriceOptions {
    fn apply(&self, query: &mut QueryParams) {
        query
            .push_opt("include_market_cap", self.include_market_cap)
            .push_opt("include_24hr_vol", self.include_24hr_vol)
            .push_opt("include_24hr_change", self.include_24hr_change)
            .push_opt("include_last_updated_at", self.include_last_updated_at)
            .push_opt("precision", self.precision);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceByIdParams {
    pub ids: Vec<String>,
    pub vs_currencies: Vec<String>,
    pub options: PriceOptions,
}

impl PriceByIdParams {
    pub fn new<I, S, C, T>(ids: I, vs_currencies: C) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        C: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            ids: owned_list(ids),
            vs_currencies: owned_list(vs_currencies),
            options: PriceOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PriceOptions) -> Self {
        self.options = options;
        self
    }
}

/// Token prices looked up by contract address on one asset platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceByContractParams {
    /// Asset platform id, e.g. `ethereum`.
    pub id: String,
    pub contract_addresses: Vec<String>,
    pub vs_currencies: Vec<String>,
    pub options: PriceOptions,
}

impl PriceByContractParams {
    pub fn new<A, S, C, T>(id: impl Into<String>, contract_addresses: A, vs_currencies: C) -> Self
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
        C: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            id: id.into(),
            contract_addresses: owned_list(contract_addresses),
            vs_currencies: owned_list(vs_currencies),
            options: PriceOptions::default(),
        }
    }

    pub fn with_options(mut self, options: PriceOptions) -> Self {
        self.options = options;
        self
    }
}

impl CoinGeckoClient {
    /// `GET /simple/price`
    pub async fn price_by_id(&self, params: &PriceByIdParams) -> Result<Price> {
        let mut query = QueryParams::new();
        query
            .push_list("ids", &params.ids)
            .push_list("vs_currencies", &params.vs_currencies);
        params.options.apply(&mut query);

        self.get("simple/price", query).await
    }

    /// `GET /simple/token_price/{id}`
    pub async fn price_by_contract(&self, params: &PriceByContractParams) -> Result<Price> {
        let mut query = QueryParams::new();
        query
            .push_list("contract_addresses", &params.contract_addresses)
            .push_list("vs_currencies", &params.vs_currencies);
        params.options.apply(&mut query);

        let endpoint = format!("simple/token_price/{}", path_segment(&params.id));
        self.get(&endpoint, query).await
    }

    /// `GET /simple/supported_vs_currencies`
    pub async fn supported_vs_currencies(&self) -> Result<Vec<String>> {
        self.get("simple/supported_vs_currencies", QueryParams::new())
            .await
    }
}
