//! HTTP cache client against a mock server: keyed GET shapes, 404 as a
//! miss, and the PUT/POST save fallback.

use httpmock::prelude::*;
use serde_json::json;
use stay_store::{CacheBackend, HttpCache, SaveMethod, StoreError};

const PATH: &str = "/api/redis-cache";

#[tokio::test]
async fn fetch_unwraps_nested_caches_shape() {
    let server = MockServer::start_async().await;
    let m = server
        .mock_async(|when, then| {
            when.method(GET).path(PATH).query_param("key", "planner");
            then.status(200)
                .json_body(json!({"caches": [{"key": "planner", "data": [{"id": 1}]}]}));
        })
        .await;

    let cache = HttpCache::new(server.url(PATH));
    let data = cache.fetch("planner").await.unwrap();

    m.assert_async().await;
    assert_eq!(data, Some(json!([{"id": 1}])));
}

#[tokio::test]
async fn fetch_accepts_flat_data_shape() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(PATH).query_param("key", "cruises");
            then.status(200).json_body(json!({"data": []}));
        })
        .await;

    let cache = HttpCache::new(server.url(PATH));
    assert_eq!(cache.fetch("cruises").await.unwrap(), Some(json!([])));
}

#[tokio::test]
async fn fetch_404_is_a_miss_not_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(PATH);
            then.status(404).json_body(json!({"error": "Cache not found"}));
        })
        .await;

    let cache = HttpCache::new(server.url(PATH));
    assert_eq!(cache.fetch("planner").await.unwrap(), None);
}

#[tokio::test]
async fn fetch_unknown_shape_is_none() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(PATH);
            then.status(200).json_body(json!({"caches": []}));
        })
        .await;

    let cache = HttpCache::new(server.url(PATH));
    assert_eq!(cache.fetch("planner").await.unwrap(), None);
}

#[tokio::test]
async fn fetch_server_error_surfaces_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(PATH);
            then.status(500).body("boom");
        })
        .await;

    let cache = HttpCache::new(server.url(PATH));
    match cache.fetch("planner").await {
        Err(StoreError::Http { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected http error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_bad_json_is_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(PATH);
            then.status(200).body("<html>");
        })
        .await;

    let cache = HttpCache::new(server.url(PATH));
    assert!(matches!(
        cache.fetch("planner").await,
        Err(StoreError::Decode(_))
    ));
}

#[tokio::test]
async fn put_on_missing_key_retries_with_post() {
    let server = MockServer::start_async().await;
    let body = json!({"key": "planner", "data": [1, 2], "ttl": 86400});

    let put = server
        .mock_async(|when, then| {
            when.method(PUT).path(PATH).json_body(body.clone());
            then.status(404);
        })
        .await;
    let post = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH).json_body(body.clone());
            then.status(201).json_body(json!({"success": true}));
        })
        .await;

    let cache = HttpCache::new(server.url(PATH));
    let out = cache
        .store("planner", &json!([1, 2]), Some(86_400), SaveMethod::Put)
        .await
        .unwrap();

    put.assert_hits_async(1).await;
    post.assert_hits_async(1).await;
    assert_eq!(out, json!({"success": true}));
}

#[tokio::test]
async fn post_on_existing_key_retries_with_put() {
    let server = MockServer::start_async().await;

    let post = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(409).json_body(json!({"error": "exists"}));
        })
        .await;
    let put = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path(PATH)
                .json_body(json!({"key": "cruises", "data": [], "ttl": null}));
            then.status(200).body("");
        })
        .await;

    let cache = HttpCache::new(server.url(PATH));
    let out = cache
        .store("cruises", &json!([]), None, SaveMethod::Post)
        .await
        .unwrap();

    post.assert_hits_async(1).await;
    put.assert_hits_async(1).await;
    assert_eq!(out, serde_json::Value::Null);
}

#[tokio::test]
async fn other_failures_do_not_retry() {
    let server = MockServer::start_async().await;

    let put = server
        .mock_async(|when, then| {
            when.method(PUT).path(PATH);
            then.status(500).body("down");
        })
        .await;
    let post = server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(200);
        })
        .await;

    let cache = HttpCache::new(server.url(PATH));
    let err = cache
        .store("planner", &json!([]), None, SaveMethod::Put)
        .await
        .unwrap_err();

    put.assert_hits_async(1).await;
    post.assert_hits_async(0).await;
    assert!(err.to_string().contains("status=500"));
}

#[tokio::test]
async fn failed_fallback_reports_second_status() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(PUT).path(PATH);
            then.status(404);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(400).body("bad key");
        })
        .await;

    let cache = HttpCache::new(server.url(PATH));
    match cache.store("planner", &json!([]), None, SaveMethod::Put).await {
        Err(StoreError::Http { status, .. }) => assert_eq!(status, 400),
        other => panic!("expected http error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_all_returns_raw_listing() {
    let server = MockServer::start_async().await;
    let listing = json!({"caches": [{"key": "planner", "data": []}, {"key": "cruises", "data": []}]});
    let m = server
        .mock_async(|when, then| {
            when.method(GET).path(PATH);
            then.status(200).json_body(listing.clone());
        })
        .await;

    let cache = HttpCache::new(format!("{}/", server.url(PATH)));
    assert_eq!(cache.fetch_all().await.unwrap(), listing);
    m.assert_async().await;
}
