mod common;

use common::mock_server::{MockProductApi, MockResponse};
use common::*;
use product_catalog::source::{HttpProductSource, ProductSource, SourceError};

#[tokio::test]
async fn fetch_requests_limited_product_list() {
    let api = MockProductApi::start().await;
    api.enqueue_response(MockResponse::json(&products_json(&shirt_and_mugs())))
        .await;

    let source = HttpProductSource::new(&source_config(&api.base_url())).unwrap();
    let products = source.fetch().await.unwrap();
    assert_eq!(ids(&products), vec![1, 2, 3]);

    let requests = api.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/products");
    assert_eq!(requests[0].query.as_deref(), Some("limit=50"));
}

#[tokio::test]
async fn empty_product_array_is_success() {
    let api = MockProductApi::start().await;
    api.enqueue_response(MockResponse::json(r#"{"products": []}"#)).await;

    let source = HttpProductSource::new(&source_config(&api.base_url())).unwrap();
    assert!(source.fetch().await.unwrap().is_empty());
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let api = MockProductApi::start().await;
    api.enqueue_response(MockResponse::error(500, "down")).await;

    let source = HttpProductSource::new(&source_config(&api.base_url())).unwrap();
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, SourceError::Status { status: 500, .. }), "{err:?}");
}

#[tokio::test]
async fn malformed_payload_maps_to_decode() {
    let api = MockProductApi::start().await;
    api.enqueue_response(MockResponse::json(r#"{"items": "nope"}"#)).await;

    let source = HttpProductSource::new(&source_config(&api.base_url())).unwrap();
    let err = source.fetch().await.unwrap_err();
    assert_eq!(err.kind(), "decode");
}

#[tokio::test]
async fn slow_response_maps_to_timeout() {
    let api = MockProductApi::start().await;
    api.enqueue_response(MockResponse::default().with_delay(1_500))
        .await;

    let mut config = source_config(&api.base_url());
    config.timeout_seconds = 1;
    let source = HttpProductSource::new(&config).unwrap();
    let err = source.fetch().await.unwrap_err();
    assert!(matches!(err, SourceError::Timeout { seconds: 1 }), "{err:?}");
}

#[tokio::test]
async fn unreachable_server_maps_to_transport() {
    // Bind then drop to get a port nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpProductSource::new(&source_config(&format!("http://{addr}"))).unwrap();
    let err = source.fetch().await.unwrap_err();
    assert_eq!(err.kind(), "transport");
}
