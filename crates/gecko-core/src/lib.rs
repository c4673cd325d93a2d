//! # Gecko Core
//!
//! Typed async client for the CoinGecko market data API.
//!
//! ## Overview
//!
//! - **One method per endpoint** on [`CoinGeckoClient`], each taking a typed
//!   parameter bag and returning a typed response
//! - **Tier-aware dispatch**: the Demo or Pro tier picks the base host and the
//!   query parameter that carries the API key
//! - **Injectable transport** through the [`HttpClient`] trait, with a
//!   reqwest-backed default
//! - **Forward-compatible responses**: unknown fields are ignored
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client construction and the shared request path |
//! | [`endpoints`] | Parameter bags and endpoint methods |
//! | [`types`] | Response shapes |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`query`] | Query-string assembly |
//! | [`date`] | Historical snapshot dates |
//! | [`config`] | Client configuration and environment loading |
//! | [`tier`] | Demo / Pro access tiers |
//! | [`error`] | Error types |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use gecko_core::{ClientConfig, CoinGeckoClient, PriceByIdParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinGeckoClient::new(ClientConfig::from_env()?);
//!
//!     let prices = client
//!         .price_by_id(&PriceByIdParams::new(["bitcoin", "ethereum"], ["usd"]))
//!         .await?;
//!
//!     for (coin, quotes) in &prices {
//!         println!("{coin}: {:?}", quotes.get("usd"));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use gecko_core::{Error, RequestFailure};
//!
//! fn describe(error: &Error) -> String {
//!     match error {
//!         Error::Request(RequestFailure::Api { status, message }) => {
//!             format!("coingecko said {status}: {message}")
//!         }
//!         Error::Request(failure) => failure.message().to_owned(),
//!         Error::Validation(invalid) => invalid.to_string(),
//!     }
//! }
//! ```
//!
//! ## Security
//!
//! - The API key never appears in `Debug` output or log events
//! - All requests go over TLS to CoinGecko's published hosts

pub mod client;
pub mod config;
pub mod date;
pub mod endpoints;
pub mod error;
pub mod http_client;
pub mod query;
pub mod tier;
pub mod types;

pub use client::CoinGeckoClient;
pub use config::ClientConfig;
pub use date::HistoryDate;
pub use endpoints::*;
pub use error::{Error, RequestFailure, ValidationError};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use query::{join_csv, QueryParams};
pub use tier::ApiTier;
pub use types::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;
