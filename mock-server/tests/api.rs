use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, Artwork};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- search ---

#[tokio::test]
async fn search_returns_projected_hits() {
    let resp = app()
        .oneshot(get("/artworks/search?q=monet&limit=20&fields=id%2Ctitle"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0], serde_json::json!({"id": 16568, "title": "Water Lilies"}));
    assert_eq!(body["pagination"]["total"], 2);
}

#[tokio::test]
async fn search_without_hits_returns_empty_data() {
    let resp = app()
        .oneshot(get("/artworks/search?q=zzzz&limit=20&fields=id,title"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn search_honours_limit() {
    let resp = app().oneshot(get("/artworks/search?limit=1")).await.unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    assert_eq!(body["pagination"]["total"], 5);
}

#[tokio::test]
async fn search_rejects_oversized_limit() {
    let resp = app()
        .oneshot(get("/artworks/search?q=monet&limit=101"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let body = body_json(resp).await;
    assert_eq!(body["status"], 403);
}

// --- detail ---

#[tokio::test]
async fn get_artwork_returns_record() {
    let resp = app()
        .oneshot(get("/artworks/28560?fields=id,title,artist_title,image_id"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["title"], "The Bedroom");
    assert_eq!(body["data"]["artist_title"], "Vincent van Gogh");
    assert!(body["data"].get("credit_line").is_none());
}

#[tokio::test]
async fn get_artwork_keeps_nulls_for_requested_fields() {
    let resp = app().oneshot(get("/artworks/7?fields=id,title,image_id")).await.unwrap();

    let body = body_json(resp).await;
    assert_eq!(body["data"]["id"], 7);
    assert!(body["data"]["title"].is_null());
    assert!(body["data"]["image_id"].is_null());
}

#[tokio::test]
async fn get_artwork_not_found() {
    let resp = app().oneshot(get("/artworks/999999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn get_artwork_bad_id_returns_400() {
    let resp = app().oneshot(get("/artworks/not-a-number")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn custom_catalog_is_served() {
    let app = app_with(vec![Artwork {
        id: 42,
        title: Some("Only one".to_string()),
        ..Default::default()
    }]);
    let resp = app.oneshot(get("/artworks/search?q=one")).await.unwrap();

    let bytes = body_bytes(resp).await;
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["data"][0]["id"], 42);
}
