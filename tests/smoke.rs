// ABOUTME: End-to-end smoke test for the full item lifecycle.
// ABOUTME: Creates, reads, updates, and deletes one item through the HTTP router.

use std::sync::Arc;

use axum::body::Body;
use http::Request;
use itemd_server::{AppState, SharedState, create_router};
use itemd_store::SessionManager;
use tower::ServiceExt;

/// Helper to create a test AppState backed by a temp database.
fn test_app_state() -> SharedState {
    let dir = tempfile::TempDir::new().unwrap();
    let sessions = SessionManager::new(dir.keep().join("items.db")).unwrap();
    Arc::new(AppState::new(sessions))
}

/// Helper to extract JSON body from a response.
async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn smoke_test_full_lifecycle() {
    let state = test_app_state();

    // 1. POST /items/ -> create the pen
    let app = create_router(Arc::clone(&state));
    let create_body = serde_json::json!({
        "name": "pen",
        "description": "blue pen"
    });

    let resp = app
        .oneshot(
            Request::post("/items/")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&create_body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), 200, "create item should return 200");
    let json = json_body(resp).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "pen");
    assert_eq!(json["description"], "blue pen");

    // 2. GET /items/1 -> same record
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(Request::get("/items/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let json = json_body(resp).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "pen");
    assert_eq!(json["description"], "blue pen");

    // 3. PUT /items/1 -> now a red pen, same id
    let app = create_router(Arc::clone(&state));
    let update_body = serde_json::json!({
        "name": "pen",
        "description": "red pen"
    });
    let resp = app
        .oneshot(
            Request::put("/items/1")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&update_body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let json = json_body(resp).await;
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "pen");
    assert_eq!(json["description"], "red pen");

    // 4. DELETE /items/1 -> confirmation, exactly once
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(Request::delete("/items/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let json = json_body(resp).await;
    assert_eq!(json["message"], "Item deleted successfully");

    // 5. GET /items/1 -> explicit not-found
    let app = create_router(Arc::clone(&state));
    let resp = app
        .oneshot(Request::get("/items/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), 404, "deleted item should be gone");
    let json = json_body(resp).await;
    assert_eq!(json["kind"], "not_found");
}
