use crate::query::QueryParams;
use crate::types::{
    CompaniesData, ExchangeRates, GlobalData, GlobalDeFiData, Ping, SearchResult, StatusReport,
    Trending,
};
use crate::{CoinGeckoClient, Result};

option_enum! {
    /// Coins for which public company treasuries are tracked.
    CompanyCoin, "coin_id" {
        Bitcoin => "bitcoin",
        Ethereum => "ethereum",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanyDataParams {
    pub coin_id: CompanyCoin,
}

impl CompanyDataParams {
    pub fn new(coin_id: CompanyCoin) -> Self {
        Self { coin_id }
    }
}

impl CoinGeckoClient {
    /// `GET /ping`, interpreted as active or inactive.
    pub async fn ping(&self) -> Result<StatusReport> {
        let ping: Ping = self.get("ping", QueryParams::new()).await?;
        Ok(StatusReport::from(&ping))
    }

    /// `GET /exchange_rates`
    pub async fn exchange_rates(&self) -> Result<ExchangeRates> {
        self.get("exchange_rates", QueryParams::new()).await
    }

    /// `GET /search`
    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        let mut params = QueryParams::new();
        params.push("query", query);

        self.get("search", params).await
    }

    /// `GET /search/trending`
    pub async fn trending(&self) -> Result<Trending> {
        self.get("search/trending", QueryParams::new()).await
    }

    /// `GET /global`
    pub async fn global(&self) -> Result<GlobalData> {
        self.get("global", QueryParams::new()).await
    }

    /// `GET /global/decentralized_finance_defi`
    pub async fn global_defi(&self) -> Result<GlobalDeFiData> {
        self.get("global/decentralized_finance_defi", QueryParams::new())
            .await
    }

    /// `GET /companies/public_treasury/{coin_id}`
    pub async fn companies_public_treasury(
        &self,
        params: &CompanyDataParams,
    ) -> Result<CompaniesData> {
        let endpoint = format!("companies/public_treasury/{}", params.coin_id);
        self.get(&endpoint, QueryParams::new()).await
    }
}
