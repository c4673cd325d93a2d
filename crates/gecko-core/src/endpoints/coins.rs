use super::{Days, Locale, Precision};
use crate::date::HistoryDate;
use crate::query::{path_segment, QueryParams};
use crate::types::{Coin, CoinHistory, CoinOhlc, CoinTickers, CoinVerbose, Market, MarketChart};
use crate::{CoinGeckoClient, Result};

option_enum! {
    MarketOrder, "order" {
        MarketCapAsc => "market_cap_asc",
        MarketCapDesc => "market_cap_desc",
        VolumeAsc => "volume_asc",
        VolumeDesc => "volume_desc",
        IdAsc => "id_asc",
        IdDesc => "id_desc",
    }
}

option_enum! {
    TickerOrder, "order" {
        TrustScoreDesc => "trust_score_desc",
        TrustScoreAsc => "trust_score_asc",
        VolumeDesc => "volume_desc",
    }
}

option_enum! {
    /// Granularity override for market charts.
    ChartInterval, "interval" {
        Daily => "daily",
    }
}

option_enum! {
    /// Windows accepted by the OHLC endpoint.
    OhlcDays, "days" {
        One => "1",
        Seven => "7",
        Fourteen => "14",
        Thirty => "30",
        Ninety => "90",
        OneEighty => "180",
        ThreeSixtyFive => "365",
        Max => "max",
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoinListParams {
    pub include_platform: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketParams {
    pub vs_currency: String,
    pub ids: Option<Vec<String>>,
    pub category: Option<String>,
    pub order: Option<MarketOrder>,
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub sparkline: Option<bool>,
    /// Windows such as `1h`, `24h`, `7d`.
    pub price_change_percentage: Option<Vec<String>>,
    pub locale: Option<Locale>,
    pub precision: Option<Precision>,
}

impl MarketParams {
    pub fn new(vs_currency: impl Into<String>) -> Self {
        Self {
            vs_currency: vs_currency.into(),
            ids: None,
            category: None,
            order: None,
            per_page: None,
            page: None,
            sparkline: None,
            price_change_percentage: None,
            locale: None,
            precision: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoinByIdParams {
    pub id: String,
    pub localization: Option<bool>,
    pub tickers: Option<bool>,
    pub market_data: Option<bool>,
    pub community_data: Option<bool>,
    pub developer_data: Option<bool>,
    pub sparkline: Option<bool>,
}

impl CoinByIdParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerParams {
    pub id: String,
    pub exchange_ids: Option<Vec<String>>,
    pub include_exchange_logo: Option<bool>,
    pub page: Option<u32>,
    pub order: Option<TickerOrder>,
    pub depth: Option<bool>,
}

impl TickerParams {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinHistoryParams {
    pub id: String,
    pub date: HistoryDate,
    pub localization: Option<bool>,
}

impl CoinHistoryParams {
    pub fn new(id: impl Into<String>, date: impl Into<HistoryDate>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            localization: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketChartParams {
    pub id: String,
    pub vs_currency: String,
    pub days: Days,
    pub interval: Option<ChartInterval>,
    pub precision: Option<Precision>,
}

impl MarketChartParams {
    pub fn new(id: impl Into<String>, vs_currency: impl Into<String>, days: impl Into<Days>) -> Self {
        Self {
            id: id.into(),
            vs_currency: vs_currency.into(),
            days: days.into(),
            interval: None,
            precision: None,
        }
    }
}

/// `from` and `to` are Unix timestamps in seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketChartRangeParams {
    pub id: String,
    pub vs_currency: String,
    pub from: i64,
    pub to: i64,
    pub precision: Option<Precision>,
}

impl MarketChartRangeParams {
    pub fn new(id: impl Into<String>, vs_currency: impl Into<String>, from: i64, to: i64) -> Self {
        Self {
            id: id.into(),
            vs_currency: vs_currency.into(),
            from,
            to,
            precision: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinOhlcParams {
    pub id: String,
    pub vs_currency: String,
    pub days: OhlcDays,
    pub precision: Option<Precision>,
}

impl CoinOhlcParams {
    pub fn new(id: impl Into<String>, vs_currency: impl Into<String>, days: OhlcDays) -> Self {
        Self {
            id: id.into(),
            vs_currency: vs_currency.into(),
            days,
            precision: None,
        }
    }
}

impl CoinGeckoClient {
    /// `GET /coins/list`
    pub async fn coin_list(&self, params: &CoinListParams) -> Result<Vec<Coin>> {
        let mut query = QueryParams::new();
        query.push_opt("include_platform", params.include_platform);

        self.get("coins/list", query).await
    }

    /// `GET /coins/markets`
    pub async fn coin_markets(&self, params: &MarketParams) -> Result<Vec<Market>> {
        let mut query = QueryParams::new();
        query
            .push("vs_currency", &params.vs_currency)
            .push_opt_list("ids", params.ids.as_deref())
            .push_opt("category", params.category.as_deref())
            .push_opt("order", params.order)
            .push_opt("per_page", params.per_page)
            .push_opt("page", params.page)
            .push_opt("sparkline", params.sparkline)
            .push_opt_list(
                "price_change_percentage",
                params.price_change_percentage.as_deref(),
            )
            .push_opt("locale", params.locale)
            .push_opt("precision", params.precision);

        self.get("coins/markets", query).await
    }

    /// `GET /coins/{id}`
    pub async fn coin(&self, params: &CoinByIdParams) -> Result<CoinVerbose> {
        let mut query = QueryParams::new();
        query
            .push_opt("localization", params.localization)
            .push_opt("tickers", params.tickers)
            .push_opt("market_data", params.market_data)
            .push_opt("community_data", params.community_data)
            .push_opt("developer_data", params.developer_data)
            .push_opt("sparkline", params.sparkline);

        self.get(&coin_path(&params.id, ""), query).await
    }

    /// `GET /coins/{id}/tickers`
    pub async fn coin_tickers(&self, params: &TickerParams) -> Result<CoinTickers> {
        let mut query = QueryParams::new();
        query
            .push_opt_list("exchange_ids", params.exchange_ids.as_deref())
            .push_opt("include_exchange_logo", params.include_exchange_logo)
            .push_opt("page", params.page)
            .push_opt("order", params.order)
            .push_opt("depth", params.depth);

        self.get(&coin_path(&params.id, "/tickers"), query).await
    }

    /// `GET /coins/{id}/history`, with the date sent as `dd-MM-yyyy`.
    pub async fn coin_history(&self, params: &CoinHistoryParams) -> Result<CoinHistory> {
        let mut query = QueryParams::new();
        query
            .push("date", params.date.to_query_value()?)
            .push_opt("localization", params.localization);

        self.get(&coin_path(&params.id, "/history"), query).await
    }

    /// `GET /coins/{id}/market_chart`
    pub async fn coin_market_chart(&self, params: &MarketChartParams) -> Result<MarketChart> {
        let mut query = QueryParams::new();
        query
            .push("vs_currency", &params.vs_currency)
            .push("days", params.days)
            .push_opt("interval", params.interval)
            .push_opt("precision", params.precision);

        self.get(&coin_path(&params.id, "/market_chart"), query)
            .await
    }

    /// `GET /coins/{id}/market_chart/range`
    pub async fn coin_market_chart_range(
        &self,
        params: &MarketChartRangeParams,
    ) -> Result<MarketChart> {
        let mut query = QueryParams::new();
        query
            .push("vs_currency", &params.vs_currency)
            .push("from", params.from)
            .push("to", params.to)
            .push_opt("precision", params.precision);

        self.get(&coin_path(&params.id, "/market_chart/range"), query)
            .await
    }

    /// `GET /coins/{id}/ohlc`
    pub async fn coin_ohlc(&self, params: &CoinOhlcParams) -> Result<CoinOhlc> {
        let mut query = QueryParams::new();
        query
            .push("vs_currency", &params.vs_currency)
            .push("days", params.days)
            .push_opt("precision", params.precision);

        self.get(&coin_path(&params.id, "/ohlc"), query).await
    }
}

fn coin_path(id: &str, suffix: &str) -> String {
    format!("coins/{}{}", path_segment(id), suffix)
}
