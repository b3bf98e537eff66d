//! End-to-end tests against the full application router.
//!
//! Each test builds the app around its own fresh store, so tests are
//! isolated without any global test-mode switch.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use cae_api::build_router;
use domain_cae_projects::InMemoryStore;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

async fn body_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post_projects(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/projects")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_get_projects_on_empty_store_returns_empty_array() {
    let app = build_router(InMemoryStore::shared());

    let response = app
        .oneshot(Request::get("/projects").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response.into_body()).await, "[]");
}

#[tokio::test]
async fn test_post_projects_creates_first_project() {
    let app = build_router(InMemoryStore::shared());

    let body = serde_json::to_string(&json!({
        "name": "Aircraft Wing Analysis",
        "description": "Structural analysis",
        "type": "structural"
    }))
    .unwrap();

    let response = app.oneshot(post_projects(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let project: Value = serde_json::from_str(&body_string(response.into_body()).await).unwrap();
    assert_eq!(project["id"], 1);
    assert_eq!(project["status"], "created");
    assert_eq!(project["type"], "structural");
}

#[tokio::test]
async fn test_created_project_is_listed() {
    let store = InMemoryStore::shared();

    let body = serde_json::to_string(&json!({
        "name": "Pump Housing",
        "description": "CFD study",
        "type": "fluid"
    }))
    .unwrap();

    let response = build_router(store.clone())
        .oneshot(post_projects(&body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // A second router over the same store sees the project.
    let response = build_router(store)
        .oneshot(Request::get("/projects").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let listed: Value = serde_json::from_str(&body_string(response.into_body()).await).unwrap();
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "Pump Housing");
}

#[tokio::test]
async fn test_post_projects_with_empty_name_mentions_name_rule() {
    let app = build_router(InMemoryStore::shared());

    let body = serde_json::to_string(&json!({
        "name": "",
        "description": "d",
        "type": "structural"
    }))
    .unwrap();

    let response = app.oneshot(post_projects(&body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: Value = serde_json::from_str(&body_string(response.into_body()).await).unwrap();
    assert!(error["message"].as_str().unwrap().contains("Name"));
}

#[tokio::test]
async fn test_post_projects_with_malformed_json_returns_400() {
    let app = build_router(InMemoryStore::shared());

    let response = app.oneshot(post_projects("{")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error: Value = serde_json::from_str(&body_string(response.into_body()).await).unwrap();
    assert_eq!(error["message"], "Invalid JSON format");
}

#[tokio::test]
async fn test_unknown_route_returns_plain_text_not_found() {
    let app = build_router(InMemoryStore::shared());

    let response = app
        .oneshot(Request::get("/unknown").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response.into_body()).await, "Not Found");
}

#[tokio::test]
async fn test_unknown_method_on_projects_returns_404() {
    let app = build_router(InMemoryStore::shared());

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/projects")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response.into_body()).await, "Not Found");
}
