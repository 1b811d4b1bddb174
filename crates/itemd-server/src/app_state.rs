// ABOUTME: Shared application state for the itemd HTTP server.
// ABOUTME: Carries the SessionManager as an explicit dependency instead of process-global state.

use std::sync::Arc;

use itemd_store::SessionManager;

/// Shared application state accessible by all Axum handlers. The session
/// manager lives here so its lifecycle is tied to process start and stop.
pub struct AppState {
    pub sessions: SessionManager,
}

/// Type alias for the Arc-wrapped state used with Axum's State extractor.
pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(sessions: SessionManager) -> Self {
        Self { sessions }
    }
}
