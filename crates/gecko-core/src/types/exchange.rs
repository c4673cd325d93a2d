use serde::de::{Deserializer, Error as DeError};
use serde::{Deserialize, Serialize};

use super::lenient_f64;
use super::Ticker;

/// Row of `GET /exchanges`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub year_established: Option<u32>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub has_trading_incentive: Option<bool>,
    #[serde(default)]
    pub trust_score: Option<f64>,
    #[serde(default)]
    pub trust_score_rank: Option<u32>,
    #[serde(default)]
    pub trade_volume_24h_btc: Option<f64>,
    #[serde(default)]
    pub trade_volume_24h_btc_normalized: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeListItem {
    pub id: String,
    pub name: String,
}

/// Body of `GET /exchanges/{id}`. Same fields as [`Exchange`] minus `id`,
/// plus social links and the first page of tickers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeVerbose {
    pub name: String,
    #[serde(default)]
    pub year_established: Option<u32>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub has_trading_incentive: Option<bool>,
    #[serde(default)]
    pub trust_score: Option<f64>,
    #[serde(default)]
    pub trust_score_rank: Option<u32>,
    #[serde(default)]
    pub trade_volume_24h_btc: Option<f64>,
    #[serde(default)]
    pub trade_volume_24h_btc_normalized: Option<f64>,
    #[serde(default)]
    pub facebook_url: Option<String>,
    #[serde(default)]
    pub reddit_url: Option<String>,
    #[serde(default)]
    pub telegram_url: Option<String>,
    #[serde(default)]
    pub slack_url: Option<String>,
    #[serde(default)]
    pub other_url_1: Option<String>,
    #[serde(default)]
    pub other_url_2: Option<String>,
    #[serde(default)]
    pub twitter_handle: Option<String>,
    #[serde(default)]
    pub centralized: Option<bool>,
    #[serde(default)]
    pub public_notice: Option<String>,
    #[serde(default)]
    pub alert_notice: Option<String>,
    #[serde(default)]
    pub tickers: Vec<Ticker>,
}

/// Body of `GET /exchanges/{id}/tickers`.
///
/// NOTE: this shape has not been checked against live responses; it mirrors
/// the published schema and may need revisiting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeTicker {
    pub name: String,
    #[serde(default)]
    pub tickers: Vec<Ticker>,
}

/// `[timestamp_ms, volume_btc]`. The service sends the volume as a string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumePoint(pub f64, pub f64);

impl<'de> Deserialize<'de> for VolumePoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Lenient(#[serde(deserialize_with = "lenient_f64::deserialize")] f64);

        let pair = Vec::<Lenient>::deserialize(deserializer)?;
        match pair.as_slice() {
            [timestamp, volume] => Ok(Self(timestamp.0, volume.0)),
            other => Err(D::Error::invalid_length(other.len(), &"a [timestamp, volume] pair")),
        }
    }
}

pub type ExchangeVolumeChart = Vec<VolumePoint>;
