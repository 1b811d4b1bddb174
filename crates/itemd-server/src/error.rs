// ABOUTME: API error taxonomy for the itemd HTTP surface.
// ABOUTME: Maps not-found, validation, and storage faults to structured JSON responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use itemd_store::StoreError;
use thiserror::Error;

/// Errors surfaced by the item API handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("no item with id {0}")]
    NotFound(i64),

    #[error("{0}")]
    Validation(String),

    #[error("storage error")]
    Storage(#[from] StoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::Validation(_) => "validation",
            ApiError::Storage(_) => "storage",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Storage faults are logged with their cause; the response body
        // never carries storage internals.
        if let ApiError::Storage(ref e) = self {
            tracing::error!("store operation failed: {}", e);
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "error": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = ApiError::NotFound(7);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.kind(), "not_found");
        assert_eq!(err.to_string(), "no item with id 7");
    }

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::Validation("item id must be an integer".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.kind(), "validation");
    }

    #[test]
    fn storage_maps_to_500_without_leaking_internals() {
        let err = ApiError::Storage(StoreError::Sqlite(rusqlite_invalid_query()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.kind(), "storage");
        assert_eq!(err.to_string(), "storage error");
    }

    fn rusqlite_invalid_query() -> rusqlite::Error {
        rusqlite::Error::InvalidQuery
    }
}
