//! Response shapes for every endpoint.
//!
//! Shapes follow CoinGecko's documented JSON. Unknown fields are ignored and
//! values the service is known to null out are `Option`, so additions on the
//! remote side do not break decoding.

mod category;
mod coin;
mod company;
mod derivative;
mod exchange;
mod global;
mod nft;
mod platform;
mod price;
mod rate;
mod search;
mod status;
mod trending;

pub use category::{CoinCategory, CoinCategoryListItem};
pub use coin::{
    CodeChanges, Coin, CoinHistory, CoinLinks, CoinOhlc, CoinTickers, CoinVerbose,
    CommunityData, DetailPlatform, DeveloperData, HistoryMarketData, InterestStats, Market,
    MarketChart, MarketData, Notice, OhlcPoint, ReposUrl, Sparkline, Ticker, TickerMarket,
};
pub use company::{CompaniesData, Company};
pub use derivative::{Derivative, DerivativeExchange, DerivativeExchangeById};
pub use exchange::{
    Exchange, ExchangeListItem, ExchangeTicker, ExchangeVerbose, ExchangeVolumeChart,
    VolumePoint,
};
pub use global::{GlobalData, GlobalDeFiData, GlobalDeFiMetrics, GlobalMetrics};
pub use nft::{NftExplorer, NftItem, NftLinks, NftListItem, NftValues};
pub use platform::AssetPlatform;
pub use price::Price;
pub use rate::{ExchangeRate, ExchangeRates};
pub use search::{
    SearchCategoryItem, SearchCoinItem, SearchExchangeItem, SearchNftItem, SearchResult,
};
pub use status::{ApiStatus, Ping, StatusReport};
pub use trending::{Trending, TrendingCoin, TrendingCoinItem, TrendingNft};

use serde::{Deserialize, Serialize};

/// Image URLs in the three sizes CoinGecko serves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// Deserializes a number that the service sometimes sends as a string.
pub(crate) mod lenient_f64 {
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(value),
            Raw::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| D::Error::invalid_value(Unexpected::Str(&text), &"a numeric value")),
        }
    }
}
