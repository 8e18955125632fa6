#![allow(clippy::unwrap_used)]
// Integration tests for `FeedClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use slider_api::{Error, FeedClient};

// ── Helpers ─────────────────────────────────────────────────────────

const FEED_PATH: &str = "/newmobile/glavnaya/super_top.php";

async fn setup() -> (MockServer, FeedClient) {
    let server = MockServer::start().await;
    let endpoint = Url::parse(&format!("{}{FEED_PATH}?action=topglav", server.uri())).unwrap();
    let client = FeedClient::with_client(reqwest::Client::new(), endpoint);
    (server, client)
}

// ── Fetch tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_returns_body_bytes() {
    let (server, client) = setup().await;

    let body = json!({
        "status": "Success",
        "TOVARY": [{ "ID": 1, "NAME": "Water", "data": [] }]
    });

    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .and(query_param("action", "topglav"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let bytes = client.fetch_feed_bytes().await.unwrap();
    let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(parsed, body);
}

#[tokio::test]
async fn test_fetch_passes_non_json_through() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let bytes = client.fetch_feed_bytes().await.unwrap();
    assert_eq!(&bytes[..], b"<html>maintenance</html>");
}

#[tokio::test]
async fn test_fetch_server_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let result = client.fetch_feed_bytes().await;
    match &result {
        Err(Error::Http {
            status,
            body_preview,
        }) => {
            assert_eq!(*status, 502);
            assert_eq!(body_preview, "Bad Gateway");
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
    assert!(result.unwrap_err().is_transient());
}

#[tokio::test]
async fn test_fetch_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client.fetch_feed_bytes().await.unwrap_err();
    assert!(err.is_not_found(), "expected not-found, got: {err:?}");
}
