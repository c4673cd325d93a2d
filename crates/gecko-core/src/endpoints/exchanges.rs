use super::{PaginationParams, TickerOrder};
use crate::query::{path_segment, QueryParams};
use crate::types::{Exchange, ExchangeListItem, ExchangeTicker, ExchangeVerbose, ExchangeVolumeChart};
use crate::{CoinGeckoClient, Result};

option_enum! {
    VolumeChartDays, "days" {
        One => "1",
        Seven => "7",
        Fourteen => "14",
        Thirty => "30",
        Ninety => "90",
        OneEighty => "180",
        ThreeSixtyFive => "365",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeByIdParams {
    pub id: String,
}

impl ExchangeByIdParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeTickerParams {
    pub id: String,
    pub coin_ids: Option<Vec<String>>,
    pub include_exchange_logo: Option<bool>,
    pub page: Option<u32>,
    pub order: Option<TickerOrder>,
    pub depth: Option<bool>,
}

impl ExchangeTickerParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeVolumeChartParams {
    pub id: String,
    pub days: VolumeChartDays,
}

impl ExchangeVolumeChartParams {
    pub fn new(id: impl Into<String>, days: VolumeChartDays) -> Self {
        Self {
            id: id.into(),
            days,
        }
    }
}

impl CoinGeckoClient {
    /// `GET /exchanges`
    pub async fn exchanges(&self, params: &PaginationParams) -> Result<Vec<Exchange>> {
        let mut query = QueryParams::new();
        params.apply(&mut query);

        self.get("exchanges", query).await
    }

    /// `GET /exchanges/list`
    pub async fn exchanges_list(&self) -> Result<Vec<ExchangeListItem>> {
        self.get("exchanges/list", QueryParams::new()).await
    }

    /// `GET /exchanges/{id}`
    pub async fn exchange(&self, params: &ExchangeByIdParams) -> Result<ExchangeVerbose> {
        self.get(&exchange_path(&params.id, ""), QueryParams::new())
            .await
    }

    /// `GET /exchanges/{id}/tickers`
    pub async fn exchange_tickers(&self, params: &ExchangeTickerParams) -> Result<ExchangeTicker> {
        let mut query = QueryParams::new();
        query
            .push_opt_list("coin_ids", params.coin_ids.as_deref())
            .push_opt("include_exchange_logo", params.include_exchange_logo)
            .push_opt("page", params.page)
            .push_opt("order", params.order)
            .push_opt("depth", params.depth);

        self.get(&exchange_path(&params.id, "/tickers"), query).await
    }

    /// `GET /exchanges/{id}/volume_chart`
    pub async fn exchange_volume_chart(
        &self,
        params: &ExchangeVolumeChartParams,
    ) -> Result<ExchangeVolumeChart> {
        let mut query = QueryParams::new();
        query.push("days", params.days);

        self.get(&exchange_path(&params.id, "/volume_chart"), query)
            .await
    }
}

fn exchange_path(id: &str, suffix: &str) -> String {
    format!("exchanges/{}{}", path_segment(id), suffix)
}
