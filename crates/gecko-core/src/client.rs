use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http_client::{HttpClient, HttpRequest, HttpResponse, ReqwestHttpClient};
use crate::query::QueryParams;
use crate::{ApiTier, ClientConfig, RequestFailure, Result};

/// Typed CoinGecko API client.
///
/// The tier chosen at construction fixes the base host and the key parameter
/// name for the lifetime of the instance. Cloning is cheap and clones share
/// the same transport.
#[derive(Clone)]
pub struct CoinGeckoClient {
    config: ClientConfig,
    http_client: Arc<dyn HttpClient>,
}

impl CoinGeckoClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, Arc::new(ReqwestHttpClient::new()))
    }

    pub fn with_http_client(config: ClientConfig, http_client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            http_client,
        }
    }

    pub fn demo() -> Self {
        Self::new(ClientConfig::demo())
    }

    pub fn pro(api_key: impl Into<String>) -> Self {
        Self::new(ClientConfig::pro(api_key))
    }

    pub fn tier(&self) -> ApiTier {
        self.config.tier
    }

    pub fn base_url(&self) -> &'static str {
        self.config.tier.base_url()
    }

    pub fn timeout_ms(&self) -> u64 {
        self.config.timeout_ms
    }

    /// Issues `GET {base}/{endpoint}` and decodes the body as `T`.
    pub(crate) async fn get<T>(
        &self,
        endpoint: &str,
        mut query: QueryParams,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let tier = self.config.tier;
        tracing::debug!(
            endpoint,
            tier = tier.as_str(),
            params = query.len(),
            "coingecko request"
        );

        query.push_opt(tier.key_param(), self.config.api_key.as_deref());

        let request = HttpRequest::get(format!("{}/{}", tier.base_url(), endpoint))
            .with_query(query.into_pairs())
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|error| {
            tracing::warn!(endpoint, error = error.message(), "coingecko transport error");
            RequestFailure::Transport {
                message: error.message().to_owned(),
                timed_out: error.timed_out(),
            }
        })?;

        if !response.is_success() {
            let failure = rejected(&response);
            tracing::warn!(
                endpoint,
                status = response.status,
                error = failure.message(),
                "coingecko rejected request"
            );
            return Err(failure.into());
        }

        let decoded = serde_json::from_str(&response.body).map_err(|error| {
            tracing::warn!(endpoint, %error, "coingecko response did not match expected shape");
            RequestFailure::Decode {
                message: error.to_string(),
            }
        })?;

        Ok(decoded)
    }
}

impl Debug for CoinGeckoClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn rejected(response: &HttpResponse) -> RequestFailure {
    let body = response.body.trim();
    let message = remote_message(body).unwrap_or_else(|| {
        if body.is_empty() {
            format!("upstream returned status {}", response.status)
        } else {
            body.to_owned()
        }
    });

    RequestFailure::Api {
        status: response.status,
        message,
    }
}

/// Pulls the service's own error text out of an error body.
///
/// CoinGecko reports errors as `{"status": {"error_message": ...}}` on most
/// endpoints and as `{"error": ...}` on a few others.
fn remote_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    match value.get("status") {
        Some(Value::Object(status)) => {
            if let Some(Value::String(message)) = status.get("error_message") {
                return Some(message.clone());
            }
        }
        Some(Value::String(status)) => return Some(status.clone()),
        _ => {}
    }

    match value.get("error") {
        Some(Value::String(message)) => Some(message.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_nested_status_message() {
        let body = r#"{"status":{"error_code":429,"error_message":"rate limited"}}"#;
        assert_eq!(remote_message(body).as_deref(), Some("rate limited"));
    }

    #[test]
    fn falls_back_to_top_level_error_field() {
        assert_eq!(
            remote_message(r#"{"error":"coin not found"}"#).as_deref(),
            Some("coin not found")
        );
    }

    #[test]
    fn non_json_body_is_surfaced_verbatim() {
        let failure = rejected(&HttpResponse::new(502, "<html>bad gateway</html>"));
        assert_eq!(failure.message(), "<html>bad gateway</html>");
        assert_eq!(failure.status(), Some(502));
    }

    #[test]
    fn empty_body_reports_status_code() {
        let failure = rejected(&HttpResponse::new(503, ""));
        assert_eq!(failure.message(), "upstream returned status 503");
    }

    #[test]
    fn debug_output_hides_transport_and_key() {
        let client = CoinGeckoClient::pro("cg-secret");
        let rendered = format!("{client:?}");
        assert!(rendered.contains("Pro"));
        assert!(!rendered.contains("cg-secret"));
    }
}
