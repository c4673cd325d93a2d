use super::PaginationParams;
use crate::query::{path_segment, QueryParams};
use crate::types::{Derivative, DerivativeExchange, DerivativeExchangeById, ExchangeListItem};
use crate::{CoinGeckoClient, Result};

option_enum! {
    IncludeTickers, "include_tickers" {
        Unexpired => "unexpired",
        All => "all",
    }
}

option_enum! {
    DerivativeExchangeOrder, "order" {
        NameAsc => "name_asc",
        NameDesc => "name_desc",
        OpenInterestBtcAsc => "open_interest_btc_asc",
        OpenInterestBtcDesc => "open_interest_btc_desc",
        TradeVolume24hBtcAsc => "trade_volume_24h_btc_asc",
        TradeVolume24hBtcDesc => "trade_volume_24h_btc_desc",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DerivativeParams {
    pub include_tickers: Option<IncludeTickers>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DerivativeExchangeParams {
    pub order: Option<DerivativeExchangeOrder>,
    pub pagination: PaginationParams,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivativeExchangeByIdParams {
    pub id: String,
    pub include_tickers: Option<IncludeTickers>,
}

impl DerivativeExchangeByIdParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            include_tickers: None,
        }
    }
}

impl CoinGeckoClient {
    /// `GET /derivatives`
    pub async fn derivatives(&self, params: &DerivativeParams) -> Result<Vec<Derivative>> {
        let mut query = QueryParams::new();
        query.push_opt("include_tickers", params.include_tickers);

        self.get("derivatives", query).await
    }

    /// `GET /derivatives/exchanges`
    pub async fn derivatives_exchanges(
        &self,
        params: &DerivativeExchangeParams,
    ) -> Result<Vec<DerivativeExchange>> {
        let mut query = QueryParams::new();
        query.push_opt("order", params.order);
        params.pagination.apply(&mut query);

        self.get("derivatives/exchanges", query).await
    }

    /// `GET /derivatives/exchanges/{id}`
    pub async fn derivatives_exchange(
        &self,
        params: &DerivativeExchangeByIdParams,
    ) -> Result<DerivativeExchangeById> {
        let mut query = QueryParams::new();
        query.push_opt("include_tickers", params.include_tickers);

        let endpoint = format!("derivatives/exchanges/{}", path_segment(&params.id));
        self.get(&endpoint, query).await
    }

    /// `GET /derivatives/exchanges/list`
    pub async fn derivatives_exchanges_list(&self) -> Result<Vec<ExchangeListItem>> {
        self.get("derivatives/exchanges/list", QueryParams::new())
            .await
    }
}
