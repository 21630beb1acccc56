//! Catalog client against a mock catalog server.

mod common;

use common::mock_catalog::{MockCatalog, MockResponse};
use pictopick::catalog::{CatalogClient, PictogramCatalog, RemoteError};
use pictopick::config::CatalogConfig;

fn client_for(mock: &MockCatalog, language_in_path: bool) -> CatalogClient {
    CatalogClient::new(&CatalogConfig {
        api_url: mock.api_url(),
        image_url: "https://static.example.org/pictograms".to_string(),
        language_in_path,
    })
    .expect("client")
}

#[tokio::test]
async fn search_decodes_records() {
    let mock = MockCatalog::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"[
            {"_id": 2462, "keywords": [{"keyword": "cat", "language": "en"}, {"keyword": "chat", "language": "fr"}], "schematic": false},
            {"_id": "7", "keywords": []}
        ]"#,
    ))
    .await;

    let records = client_for(&mock, false)
        .search("chat", "fr")
        .await
        .expect("search succeeds");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].id.as_str(), "2462");
    assert_eq!(records[0].label_for("fr"), "chat");
    assert_eq!(records[0].label_for("de"), "2462");
    assert_eq!(records[1].id.as_str(), "7");

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/pictograms/search/chat");
}

#[tokio::test]
async fn query_is_percent_encoded() {
    let mock = MockCatalog::start().await;
    client_for(&mock, false)
        .search("pomme de terre", "fr")
        .await
        .expect("search succeeds");

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/api/pictograms/search/pomme%20de%20terre");
}

#[tokio::test]
async fn language_segment_when_configured() {
    let mock = MockCatalog::start().await;
    client_for(&mock, true)
        .search("gato", "es")
        .await
        .expect("search succeeds");

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/api/pictograms/es/search/gato");
}

#[tokio::test]
async fn empty_array_is_not_an_error() {
    let mock = MockCatalog::start().await;
    mock.enqueue_response(MockResponse::json("[]")).await;
    let records = client_for(&mock, false)
        .search("zzzz", "fr")
        .await
        .expect("search succeeds");
    assert!(records.is_empty());
}

#[tokio::test]
async fn http_503_is_a_status_error() {
    let mock = MockCatalog::start().await;
    mock.enqueue_response(MockResponse::status(503)).await;

    let err = client_for(&mock, false)
        .search("chat", "fr")
        .await
        .expect_err("503 must fail");
    assert!(matches!(err, RemoteError::Status { status: 503 }));
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn not_found_is_a_status_error() {
    let mock = MockCatalog::start().await;
    mock.enqueue_response(MockResponse::status(404)).await;

    let err = client_for(&mock, false)
        .search("introuvable", "fr")
        .await
        .expect_err("404 must fail");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn non_array_body_is_malformed() {
    let mock = MockCatalog::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"error": "nope"}"#))
        .await;

    let err = client_for(&mock, false)
        .search("chat", "fr")
        .await
        .expect_err("object body must fail");
    assert!(matches!(err, RemoteError::MalformedBody(_)));
}

#[tokio::test]
async fn unreachable_catalog_is_a_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr")
    };
    let client = CatalogClient::new(&CatalogConfig {
        api_url: format!("http://{}/api/pictograms", addr),
        ..CatalogConfig::default()
    })
    .expect("client");

    let err = client.search("chat", "fr").await.expect_err("nothing listens");
    assert!(matches!(err, RemoteError::Transport(_)));
    assert_eq!(err.status(), None);
}
