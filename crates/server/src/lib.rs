//! codesim-server: HTTP adapter for codesim comparisons.
//!
//! Exposes the engine over JSON. The request and response bodies match the
//! legacy CLI: a `SimilarityReport` on success, and `{error, kind, jaccard}`
//! with a zero score on any failure.
//!
//! # Endpoints
//!
//! - `POST /compare` - body `{"codeA": "...", "codeB": "...", "window": 4}`
//! - `GET /health` - liveness probe
//! - `GET /` - API information
//!
//! Configuration comes from an optional `server.{toml,yaml,json}` file and
//! `CODESIM_SERVER__*` environment variables; see [`ServerConfig`].

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
