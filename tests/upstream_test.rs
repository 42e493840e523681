use apod_gateway::{ApodError, ApodSource, GatewayConfig, NasaClient, UpstreamError};
use httpmock::prelude::*;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};

fn client_for(server: &MockServer, api_key: &str) -> NasaClient {
    let config = GatewayConfig::new(api_key).with_endpoint(server.url("/planetary/apod"));
    NasaClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_fetch_sends_api_key_and_parses_payload() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/planetary/apod")
            .query_param("api_key", "DEMO_KEY");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "date": "2024-01-01",
                "media_type": "image",
                "service_version": "v1",
                "title": "M31",
                "hdurl": "http://x/y.jpg",
                "url": "http://x/y_small.jpg",
                "explanation": "A galaxy."
            }));
    });

    let raw = assert_ok!(client_for(&server, "DEMO_KEY").fetch_apod().await);

    api_mock.assert();
    assert_eq!(raw.title.as_deref(), Some("M31"));
    assert_eq!(raw.hdurl.as_deref(), Some("http://x/y.jpg"));
    assert_eq!(raw.explanation.as_deref(), Some("A galaxy."));
}

#[tokio::test]
async fn test_missing_key_is_sent_empty_and_rejection_surfaces() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/planetary/apod")
            .query_param("api_key", "");
        then.status(403).json_body(serde_json::json!({
            "error": { "code": "API_KEY_MISSING", "message": "No api_key was supplied." }
        }));
    });

    let err = assert_err!(client_for(&server, "").fetch_apod().await);

    api_mock.assert();
    assert!(matches!(
        err,
        ApodError::Upstream(UpstreamError::Status { status }) if status.as_u16() == 403
    ));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/planetary/apod");
        then.status(500);
    });

    let err = assert_err!(client_for(&server, "k").fetch_apod().await);

    api_mock.assert_hits(1);
    assert_eq!(err.code(), "UPSTREAM_ERROR");
    assert_eq!(err.to_string(), "upstream API responded with HTTP 500 Internal Server Error");
}

#[tokio::test]
async fn test_malformed_json_is_upstream_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/planetary/apod");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("<html>not json</html>");
    });

    let err = assert_err!(client_for(&server, "k").fetch_apod().await);
    assert!(matches!(err, ApodError::Upstream(UpstreamError::Malformed(_))));
}

#[tokio::test]
async fn test_network_failure_hides_api_key() {
    // Nothing listens on port 9 of localhost in the test environment.
    let config = GatewayConfig::new("secret-key").with_endpoint("http://127.0.0.1:9/planetary/apod");
    let client = NasaClient::new(&config).unwrap();

    let err = assert_err!(client.fetch_apod().await);

    assert!(matches!(err, ApodError::Upstream(UpstreamError::Network(_))));
    assert!(!err.to_string().contains("secret-key"));
}

#[tokio::test]
async fn test_slow_upstream_hits_timeout() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/planetary/apod");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(serde_json::json!({ "title": "late" }));
    });

    let config = GatewayConfig::new("k")
        .with_endpoint(server.url("/planetary/apod"))
        .with_timeout_seconds(1);
    let client = NasaClient::new(&config).unwrap();

    let err = assert_err!(client.fetch_apod().await);
    match err {
        ApodError::Upstream(UpstreamError::Network(cause)) => assert!(cause.is_timeout()),
        other => panic!("expected a timeout, got {:?}", other),
    }
}
