//! The reqwest transport against a local mock server.

use std::time::Duration;

use gecko_core::{HttpClient, HttpRequest, ReqwestHttpClient};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn sends_query_and_headers_and_returns_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/simple/price"))
        .and(query_param("ids", "bitcoin,ethereum"))
        .and(query_param("vs_currencies", "usd"))
        .and(query_param("x-cg-demo-api-key", "demo-key"))
        .and(header("accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"bitcoin":{"usd":65000.0}}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = HttpRequest::get(format!("{}/api/v3/simple/price", mock_server.uri()))
        .with_query(vec![
            (String::from("ids"), String::from("bitcoin,ethereum")),
            (String::from("vs_currencies"), String::from("usd")),
            (String::from("x-cg-demo-api-key"), String::from("demo-key")),
        ])
        .with_header("Accept", "application/json");

    let response = ReqwestHttpClient::new()
        .execute(request)
        .await
        .expect("mock server should answer");

    assert_eq!(response.status, 200);
    assert!(response.is_success());
    assert_eq!(response.body, r#"{"bitcoin":{"usd":65000.0}}"#);
}

#[tokio::test]
async fn error_statuses_are_returned_not_raised() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_string(r#"{"status":{"error_code":429,"error_message":"rate limited"}}"#),
        )
        .mount(&mock_server)
        .await;

    let response = ReqwestHttpClient::default()
        .execute(HttpRequest::get(format!("{}/api/v3/ping", mock_server.uri())))
        .await
        .expect("a 429 is still a response");

    assert_eq!(response.status, 429);
    assert!(!response.is_success());
    assert!(response.body.contains("rate limited"));
}

#[tokio::test]
async fn slow_responses_time_out() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/global"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let request =
        HttpRequest::get(format!("{}/api/v3/global", mock_server.uri())).with_timeout_ms(50);

    let error = ReqwestHttpClient::new()
        .execute(request)
        .await
        .expect_err("request must time out");

    assert!(error.timed_out());
    assert!(error.message().starts_with("request timeout"));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Port 9 (discard) on loopback is closed in test environments.
    let request = HttpRequest::get("http://127.0.0.1:9/api/v3/ping").with_timeout_ms(2_000);

    let error = ReqwestHttpClient::new()
        .execute(request)
        .await
        .expect_err("nothing listens there");

    assert!(!error.message().is_empty());
}
