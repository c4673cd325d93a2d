//! Shared test double: a transport that records every request and replays
//! canned responses in order.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use gecko_core::{ApiTier, ClientConfig, CoinGeckoClient, HttpClient, HttpError, HttpRequest, HttpResponse};

#[derive(Debug, Default)]
pub struct RecordingHttpClient {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub fn replying(body: &str) -> Arc<Self> {
        Self::with_responses(vec![Ok(HttpResponse::ok_json(body))])
    }

    pub fn with_responses(responses: Vec<Result<HttpResponse, HttpError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.recorded_requests()
            .pop()
            .expect("at least one request should have been sent")
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self
            .responses
            .lock()
            .expect("response queue should not be poisoned")
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::ok_json("{}")));
        Box::pin(async move { response })
    }
}

pub fn demo_client(transport: &Arc<RecordingHttpClient>) -> CoinGeckoClient {
    CoinGeckoClient::with_http_client(
        ClientConfig::new(ApiTier::Demo).with_api_key("demo-key"),
        transport.clone(),
    )
}

pub fn pro_client(transport: &Arc<RecordingHttpClient>) -> CoinGeckoClient {
    CoinGeckoClient::with_http_client(ClientConfig::pro("pro-key"), transport.clone())
}

pub const DEMO_BASE: &str = "https://api.coingecko.com/api/v3";
