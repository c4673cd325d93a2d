use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ImageData;

type CurrencyMap<T> = BTreeMap<String, T>;

/// Entry of `GET /coins/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    /// Present with `include_platform=true`: platform id to contract address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platforms: Option<BTreeMap<String, Option<String>>>,
}

/// Row of `GET /coins/markets`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Market {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub fully_diluted_valuation: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub high_24h: Option<f64>,
    #[serde(default)]
    pub low_24h: Option<f64>,
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub market_cap_change_24h: Option<f64>,
    #[serde(default)]
    pub market_cap_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub ath: Option<f64>,
    #[serde(default)]
    pub ath_change_percentage: Option<f64>,
    #[serde(default)]
    pub ath_date: Option<String>,
    #[serde(default)]
    pub atl: Option<f64>,
    #[serde(default)]
    pub atl_change_percentage: Option<f64>,
    #[serde(default)]
    pub atl_date: Option<String>,
    /// Documented as a number; the live service sends an object or null.
    #[serde(default)]
    pub roi: Option<Value>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub sparkline_in_7d: Option<Sparkline>,
    /// `price_change_percentage_{window}_in_currency` columns requested via
    /// `price_change_percentage`.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sparkline {
    #[serde(default)]
    pub price: Vec<f64>,
}

/// `public_notice` is a string on some coins and a list on others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Notice {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailPlatform {
    #[serde(default)]
    pub decimal_place: Option<u32>,
    #[serde(default)]
    pub contract_address: String,
}

/// Full coin record from `GET /coins/{id}` and the contract lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinVerbose {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub asset_platform_id: Option<String>,
    #[serde(default)]
    pub platforms: BTreeMap<String, Option<String>>,
    #[serde(default)]
    pub detail_platforms: BTreeMap<String, DetailPlatform>,
    #[serde(default)]
    pub block_time_in_minutes: Option<f64>,
    #[serde(default)]
    pub hashing_algorithm: Option<String>,
    #[serde(default)]
    pub categories: Vec<Option<String>>,
    #[serde(default)]
    pub public_notice: Option<Notice>,
    #[serde(default)]
    pub additional_notices: Vec<String>,
    #[serde(default)]
    pub localization: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub description: BTreeMap<String, String>,
    #[serde(default)]
    pub links: Option<CoinLinks>,
    #[serde(default)]
    pub image: ImageData,
    #[serde(default)]
    pub country_origin: Option<String>,
    #[serde(default)]
    pub genesis_date: Option<String>,
    #[serde(default)]
    pub contract_address: Option<String>,
    #[serde(default)]
    pub sentiment_votes_up_percentage: Option<f64>,
    #[serde(default)]
    pub sentiment_votes_down_percentage: Option<f64>,
    #[serde(default)]
    pub watchlist_portfolio_users: Option<u64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub coingecko_rank: Option<u32>,
    #[serde(default)]
    pub coingecko_score: Option<f64>,
    #[serde(default)]
    pub developer_score: Option<f64>,
    #[serde(default)]
    pub community_score: Option<f64>,
    #[serde(default)]
    pub liquidity_score: Option<f64>,
    #[serde(default)]
    pub public_interest_score: Option<f64>,
    #[serde(default)]
    pub market_data: Option<MarketData>,
    #[serde(default)]
    pub community_data: Option<CommunityData>,
    #[serde(default)]
    pub developer_data: Option<DeveloperData>,
    #[serde(default)]
    pub public_interest_stats: Option<InterestStats>,
    #[serde(default)]
    pub status_updates: Vec<Value>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub tickers: Vec<Ticker>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReposUrl {
    #[serde(default)]
    pub github: Vec<String>,
    #[serde(default)]
    pub bitbucket: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoinLinks {
    #[serde(default)]
    pub homepage: Vec<String>,
    #[serde(default)]
    pub blockchain_site: Vec<String>,
    #[serde(default)]
    pub official_forum_url: Vec<String>,
    #[serde(default)]
    pub chat_url: Vec<String>,
    #[serde(default)]
    pub announcement_url: Vec<String>,
    #[serde(default)]
    pub twitter_screen_name: Option<String>,
    #[serde(default)]
    pub facebook_username: Option<String>,
    /// Numeric on some coins, string on others.
    #[serde(default)]
    pub bitcointalk_thread_identifier: Option<Value>,
    #[serde(default)]
    pub telegram_channel_identifier: Option<String>,
    #[serde(default)]
    pub subreddit_url: Option<String>,
    #[serde(default)]
    pub repos_url: ReposUrl,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickerMarket {
    pub name: String,
    pub identifier: String,
    #[serde(default)]
    pub has_trading_incentive: bool,
    #[serde(default)]
    pub logo: Option<String>,
}

/// One trading pair as reported for a coin or an exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
    pub base: String,
    pub target: String,
    pub market: TickerMarket,
    #[serde(default)]
    pub last: Option<f64>,
    #[serde(default)]
    pub volume: Option<f64>,
    #[serde(default)]
    pub converted_last: CurrencyMap<f64>,
    #[serde(default)]
    pub converted_volume: CurrencyMap<f64>,
    #[serde(default)]
    pub trust_score: Option<String>,
    #[serde(default)]
    pub bid_ask_spread_percentage: Option<f64>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub last_traded_at: Option<String>,
    #[serde(default)]
    pub last_fetch_at: Option<String>,
    #[serde(default)]
    pub is_anomaly: bool,
    #[serde(default)]
    pub is_stale: bool,
    #[serde(default)]
    pub trade_url: Option<String>,
    #[serde(default)]
    pub token_info_url: Option<String>,
    #[serde(default)]
    pub coin_id: Option<String>,
    #[serde(default)]
    pub target_coin_id: Option<String>,
    /// Present with `depth=true`.
    #[serde(default)]
    pub cost_to_move_up_usd: Option<f64>,
    #[serde(default)]
    pub cost_to_move_down_usd: Option<f64>,
}

/// Body of `GET /coins/{id}/tickers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinTickers {
    pub name: String,
    #[serde(default)]
    pub tickers: Vec<Ticker>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunityData {
    #[serde(default)]
    pub facebook_likes: Option<f64>,
    #[serde(default)]
    pub twitter_followers: Option<f64>,
    #[serde(default)]
    pub reddit_average_posts_48h: Option<f64>,
    #[serde(default)]
    pub reddit_average_comments_48h: Option<f64>,
    #[serde(default)]
    pub reddit_subscribers: Option<f64>,
    #[serde(default)]
    pub reddit_accounts_active_48h: Option<f64>,
    #[serde(default)]
    pub telegram_channel_user_count: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeChanges {
    #[serde(default)]
    pub additions: Option<i64>,
    #[serde(default)]
    pub deletions: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeveloperData {
    #[serde(default)]
    pub forks: Option<u64>,
    #[serde(default)]
    pub stars: Option<u64>,
    #[serde(default)]
    pub subscribers: Option<u64>,
    #[serde(default)]
    pub total_issues: Option<u64>,
    #[serde(default)]
    pub closed_issues: Option<u64>,
    #[serde(default)]
    pub pull_requests_merged: Option<u64>,
    #[serde(default)]
    pub pull_request_contributors: Option<u64>,
    #[serde(default)]
    pub code_additions_deletions_4_weeks: CodeChanges,
    #[serde(default)]
    pub commit_count_4_weeks: Option<u64>,
    #[serde(default)]
    pub last_4_weeks_commit_activity_series: Vec<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestStats {
    #[serde(default)]
    pub alexa_rank: Option<f64>,
    #[serde(default)]
    pub bing_matches: Option<f64>,
}

/// Market block of the coin detail response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    #[serde(default)]
    pub current_price: CurrencyMap<f64>,
    #[serde(default)]
    pub total_value_locked: Option<Value>,
    #[serde(default)]
    pub mcap_to_tvl_ratio: Option<f64>,
    #[serde(default)]
    pub fdv_to_tvl_ratio: Option<f64>,
    #[serde(default)]
    pub roi: Option<Value>,
    #[serde(default)]
    pub ath: CurrencyMap<f64>,
    #[serde(default)]
    pub ath_change_percentage: CurrencyMap<f64>,
    #[serde(default)]
    pub ath_date: CurrencyMap<String>,
    #[serde(default)]
    pub atl: CurrencyMap<f64>,
    #[serde(default)]
    pub atl_change_percentage: CurrencyMap<f64>,
    #[serde(default)]
    pub atl_date: CurrencyMap<String>,
    #[serde(default)]
    pub market_cap: CurrencyMap<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub fully_diluted_valuation: CurrencyMap<f64>,
    #[serde(default)]
    pub total_volume: CurrencyMap<f64>,
    #[serde(default)]
    pub high_24h: CurrencyMap<f64>,
    #[serde(default)]
    pub low_24h: CurrencyMap<f64>,
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_14d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_30d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_60d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_200d: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_1y: Option<f64>,
    #[serde(default)]
    pub market_cap_change_24h: Option<f64>,
    #[serde(default)]
    pub market_cap_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price_change_24h_in_currency: CurrencyMap<f64>,
    #[serde(default)]
    pub price_change_percentage_1h_in_currency: CurrencyMap<f64>,
    #[serde(default)]
    pub price_change_percentage_24h_in_currency: CurrencyMap<f64>,
    #[serde(default)]
    pub price_change_percentage_7d_in_currency: CurrencyMap<f64>,
    #[serde(default)]
    pub price_change_percentage_14d_in_currency: CurrencyMap<f64>,
    #[serde(default)]
    pub price_change_percentage_30d_in_currency: CurrencyMap<f64>,
    #[serde(default)]
    pub price_change_percentage_60d_in_currency: CurrencyMap<f64>,
    #[serde(default)]
    pub price_change_percentage_200d_in_currency: CurrencyMap<f64>,
    #[serde(default)]
    pub price_change_percentage_1y_in_currency: CurrencyMap<f64>,
    #[serde(default)]
    pub market_cap_change_24h_in_currency: CurrencyMap<f64>,
    #[serde(default)]
    pub market_cap_change_percentage_24h_in_currency: CurrencyMap<f64>,
    #[serde(default)]
    pub total_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub sparkline_7d: Option<Sparkline>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Reduced market block of the historical snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryMarketData {
    #[serde(default)]
    pub current_price: CurrencyMap<f64>,
    #[serde(default)]
    pub market_cap: CurrencyMap<f64>,
    #[serde(default)]
    pub total_volume: CurrencyMap<f64>,
}

/// Body of `GET /coins/{id}/history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinHistory {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub localization: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub image: ImageData,
    #[serde(default)]
    pub market_data: Option<HistoryMarketData>,
    #[serde(default)]
    pub community_data: Option<CommunityData>,
    #[serde(default)]
    pub developer_data: Option<DeveloperData>,
    #[serde(default)]
    pub public_interest_stats: Option<InterestStats>,
}

/// `[timestamp_ms, value]` series for price, market cap and volume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketChart {
    #[serde(default)]
    pub prices: Vec<[f64; 2]>,
    #[serde(default)]
    pub market_caps: Vec<[f64; 2]>,
    #[serde(default)]
    pub total_volumes: Vec<[f64; 2]>,
}

/// `[timestamp_ms, open, high, low, close]`.
pub type OhlcPoint = [f64; 5];

pub type CoinOhlc = Vec<OhlcPoint>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_notice_accepts_string_or_list() {
        let one: Notice = serde_json::from_str(r#""maintenance""#).expect("must parse");
        let many: Notice = serde_json::from_str(r#"["a","b"]"#).expect("must parse");
        assert_eq!(one, Notice::One(String::from("maintenance")));
        assert_eq!(many, Notice::Many(vec![String::from("a"), String::from("b")]));
    }

    #[test]
    fn market_row_tolerates_nulls_and_keeps_requested_windows() {
        let body = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "current_price": 43000.5,
            "max_supply": null,
            "roi": null,
            "price_change_percentage_7d_in_currency": 4.2,
            "brand_new_field": true
        }"#;

        let market: Market = serde_json::from_str(body).expect("must parse");
        assert_eq!(market.current_price, Some(43000.5));
        assert_eq!(market.max_supply, None);
        assert_eq!(
            market
                .extra
                .get("price_change_percentage_7d_in_currency")
                .and_then(Value::as_f64),
            Some(4.2)
        );
    }

    #[test]
    fn unknown_fields_are_ignored_on_coin_detail() {
        let body = r#"{"id":"ethereum","symbol":"eth","name":"Ethereum","web_slug":"ethereum"}"#;
        let coin: CoinVerbose = serde_json::from_str(body).expect("must parse");
        assert_eq!(coin.id, "ethereum");
        assert!(coin.market_data.is_none());
        assert!(coin.tickers.is_empty());
    }
}
