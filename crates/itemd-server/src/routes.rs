// ABOUTME: Route definitions for the itemd HTTP API.
// ABOUTME: Assembles the item CRUD routes into a single Axum Router with shared state.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::app_state::SharedState;

/// Build the complete Axum router with all routes and shared state.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/items/", post(api::items::create_item))
        .route(
            "/items/{item_id}",
            get(api::items::read_item)
                .put(api::items::update_item)
                .delete(api::items::delete_item),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check handler. Returns 200 OK with a simple JSON body.
async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
