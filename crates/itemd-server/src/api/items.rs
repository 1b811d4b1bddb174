// ABOUTME: Item CRUD API handlers for creating, reading, updating, and deleting items.
// ABOUTME: Each handler runs exactly one store operation inside one session scope.

use axum::Json;
use axum::extract::{Path, State};
use itemd_store::Item;
use serde::Deserialize;

use crate::app_state::SharedState;
use crate::error::ApiError;

/// Request body for creating or updating an item.
#[derive(Debug, Deserialize)]
pub struct ItemParams {
    pub name: String,
    pub description: String,
}

/// Coerce a path segment into an item id before touching the store.
fn parse_item_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::Validation(format!("item id must be an integer, got {raw:?}")))
}

/// POST /items/ - Create a new item and return it with its assigned id.
pub async fn create_item(
    State(state): State<SharedState>,
    Json(params): Json<ItemParams>,
) -> Result<Json<Item>, ApiError> {
    let item = state
        .sessions
        .with_session(|s| s.insert(&params.name, &params.description))?;
    Ok(Json(item))
}

/// GET /items/{item_id} - Read an item by id.
pub async fn read_item(
    State(state): State<SharedState>,
    Path(item_id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let item_id = parse_item_id(&item_id)?;
    let item = state.sessions.with_session(|s| s.get(item_id))?;
    match item {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::NotFound(item_id)),
    }
}

/// PUT /items/{item_id} - Overwrite name and description of an existing item.
pub async fn update_item(
    State(state): State<SharedState>,
    Path(item_id): Path<String>,
    Json(params): Json<ItemParams>,
) -> Result<Json<Item>, ApiError> {
    let item_id = parse_item_id(&item_id)?;
    let item = state
        .sessions
        .with_session(|s| s.update(item_id, &params.name, &params.description))?;
    match item {
        Some(item) => Ok(Json(item)),
        None => Err(ApiError::NotFound(item_id)),
    }
}

/// DELETE /items/{item_id} - Delete an item and confirm the removal.
pub async fn delete_item(
    State(state): State<SharedState>,
    Path(item_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let item_id = parse_item_id(&item_id)?;
    let removed = state.sessions.with_session(|s| s.delete(item_id))?;
    if !removed {
        return Err(ApiError::NotFound(item_id));
    }
    Ok(Json(
        serde_json::json!({ "message": "Item deleted successfully" }),
    ))
}
