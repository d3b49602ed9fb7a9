//! Black-box tests for the HTTP category client against a stub category service.

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use std::collections::HashMap;
use storefront::adapters::http::HttpCategoryClient;
use storefront::domain::DomainError;
use storefront::ports::CategoryPort;

async fn list_categories(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let mut data = vec![json!({"_id": "c1", "name": "Fruits", "slug": "fruits", "isActive": true})];
    if params.get("active").map(String::as_str) == Some("false") {
        data.push(json!({"_id": "c9", "name": "Archived", "slug": "archived", "isActive": false}));
    }
    Json(json!({"success": true, "data": data, "echo": params.get("active")}))
}

async fn category_tree() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": [
            {"_id": "c1", "name": "Food", "slug": "food", "children": [
                {"_id": "c2", "name": "Dairy", "slug": "dairy", "children": []}
            ]}
        ]
    }))
}

async fn category_by_id(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "c1" => Json(json!({
            "success": true,
            "data": {"_id": "c1", "name": "Fruits", "slug": "fruits", "productCount": 12}
        }))
        .into_response(),
        "garbled" => (StatusCode::OK, "<html>oops</html>").into_response(),
        "empty" => Json(json!({"success": true})).into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "message": "Category not found"})),
        )
            .into_response(),
    }
}

async fn category_by_slug(Path(slug): Path<String>) -> Json<Value> {
    Json(json!({"success": true, "data": {"_id": "s1", "name": slug, "slug": slug}}))
}

fn stub_app() -> Router {
    Router::new()
        .route("/api/v1/categories", get(list_categories))
        .route("/api/v1/categories/tree", get(category_tree))
        .route("/api/v1/categories/slug/:slug", get(category_by_slug))
        .route("/api/v1/categories/:id", get(category_by_id))
}

/// Starts the stub on an ephemeral port; returns the API base URL.
async fn spawn_stub() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, stub_app()).await.unwrap();
    });
    format!("http://{addr}/api/v1")
}

async fn client() -> HttpCategoryClient {
    HttpCategoryClient::new(&spawn_stub().await).unwrap()
}

#[tokio::test]
async fn test_list_categories_passes_active_flag() {
    let client = client().await;

    let active = client.get_categories(true).await.unwrap();
    assert!(active.success);
    let names: Vec<_> = active
        .data
        .unwrap()
        .into_iter()
        .map(|c| c.name.unwrap())
        .collect();
    assert_eq!(names, vec!["Fruits"]);

    let all = client.get_categories(false).await.unwrap();
    assert_eq!(all.data.unwrap().len(), 2);
}

#[tokio::test]
async fn test_category_tree_decodes_hierarchy() {
    let client = client().await;
    let env = client.get_category_tree().await.unwrap();
    let roots = env.data.unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].category.slug.as_deref(), Some("food"));
    assert_eq!(roots[0].children()[0].category.identifier(), Some("c2"));
}

#[tokio::test]
async fn test_category_by_id_returns_body_verbatim() {
    let client = client().await;
    let env = client.get_category_by_id("c1").await.unwrap();
    assert!(env.success);
    assert_eq!(env.message, None);
    let category = env.data.unwrap();
    assert_eq!(category.identifier(), Some("c1"));
    assert_eq!(category.extra.get("productCount"), Some(&json!(12)));
}

#[tokio::test]
async fn test_envelope_without_data_is_not_filled_in() {
    let client = client().await;
    let env = client.get_category_by_id("empty").await.unwrap();
    assert!(env.success);
    assert!(env.data.is_none());
    assert!(env.message.is_none());
}

#[tokio::test]
async fn test_category_by_id_404_propagates() {
    let client = client().await;
    let err = client.get_category_by_id("bad-id").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    match err {
        DomainError::Status { url, body, .. } => {
            assert!(url.ends_with("/api/v1/categories/bad-id"));
            assert!(body.contains("Category not found"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_category_by_slug_encodes_path_segment() {
    let client = client().await;
    let env = client
        .get_category_by_slug("fresh produce")
        .await
        .unwrap();
    assert_eq!(env.data.unwrap().slug.as_deref(), Some("fresh produce"));
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let client = client().await;
    let err = client.get_category_by_id("garbled").await.unwrap_err();
    assert!(matches!(err, DomainError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpCategoryClient::new(&format!("http://{addr}/api/v1")).unwrap();
    let err = client.get_category_tree().await.unwrap_err();
    assert!(matches!(err, DomainError::Transport(_)));
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let client = client().await;
    let (list, tree, by_id) = tokio::join!(
        client.get_categories(true),
        client.get_category_tree(),
        client.get_category_by_id("bad-id"),
    );
    assert!(list.unwrap().success);
    assert!(tree.unwrap().success);
    assert_eq!(by_id.unwrap_err().status(), Some(404));
}
