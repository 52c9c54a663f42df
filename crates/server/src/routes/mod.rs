//! API route handlers
//!
//! - `health`: liveness probe
//! - `compare`: pairwise document comparison

pub mod compare;
pub mod health;

use crate::error::ServerError;
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;

/// API version and base info
///
/// ```json
/// {
///   "name": "codesim",
///   "version": "0.1.0",
///   "default_window": 4,
///   "endpoints": ["POST /compare", "GET /health"]
/// }
/// ```
pub async fn api_info(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    Json(json!({
        "name": "codesim",
        "version": env!("CARGO_PKG_VERSION"),
        "default_window": state.config.default_window,
        "kgram": state.engine.fingerprint.k,
        "endpoints": ["POST /compare", "GET /health"]
    }))
}

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
