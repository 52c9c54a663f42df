use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use codesim::wire::parse_window;
use codesim::{compare_bytes, CompareError, SimilarityReport};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Body of `POST /compare`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    #[serde(default)]
    pub code_a: Option<String>,
    #[serde(default)]
    pub code_b: Option<String>,
    /// Integer, numeric string, or absent.
    #[serde(default)]
    pub window: Option<Value>,
}

/// Resolve the request's window. `null`, a missing field and a blank
/// string all mean `default`.
pub fn resolve_window(raw: Option<&Value>, default: i64) -> Result<i64, CompareError> {
    match raw {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Number(n)) => n.as_i64().ok_or_else(|| CompareError::InvalidWindow {
            window: n.to_string(),
        }),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(default),
        Some(Value::String(s)) => parse_window(s),
        Some(other) => Err(CompareError::InvalidWindow {
            window: other.to_string(),
        }),
    }
}

/// Compare two documents
pub async fn compare_documents(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> ServerResult<Json<SimilarityReport>> {
    let Json(request) = payload.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge(state.config.max_body_size_mb)
        } else {
            ServerError::BadRequest(rejection.body_text())
        }
    })?;

    let (code_a, code_b) = match (request.code_a, request.code_b) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(ServerError::BadRequest("Missing codeA or codeB".to_string())),
    };
    let window = resolve_window(request.window.as_ref(), state.config.default_window)?;

    tracing::debug!(
        bytes_a = code_a.len(),
        bytes_b = code_b.len(),
        window,
        "comparing documents"
    );

    let engine = Arc::clone(&state.engine);
    let report = tokio::task::spawn_blocking(move || {
        compare_bytes(code_a.as_bytes(), code_b.as_bytes(), window, &engine)
    })
    .await
    .map_err(|e| ServerError::Internal(format!("comparison task failed: {e}")))??;

    Ok(Json(report))
}
