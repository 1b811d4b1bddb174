// ABOUTME: HTTP server for itemd, providing the item CRUD REST API.
// ABOUTME: Uses Axum with a shared SessionManager injected through AppState.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod routes;

pub use app_state::{AppState, SharedState};
pub use config::{ConfigError, ItemdConfig};
pub use error::ApiError;
pub use routes::create_router;
