//! `codesim` - compare two documents framed on stdin.
//!
//! Reads `"A <lenA>\nB <lenB>\n"` followed by both documents, takes the
//! window from `WINDOW` and an optional YAML config from `CODESIM_CONFIG`,
//! and prints one JSON document to stdout. Rejected input is reported in the
//! JSON body with a zero score; the exit status stays 0.

use std::io::{self, Read, Write};

use codesim::wire::{parse_frame, window_from_env, WINDOW_ENV};
use codesim::{compare_bytes, CodesimConfig, CompareError, EngineConfig};
use tracing_subscriber::EnvFilter;

const CONFIG_ENV: &str = "CODESIM_CONFIG";

fn load_engine_config() -> Result<EngineConfig, CompareError> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => CodesimConfig::from_file(&path)
            .map(CodesimConfig::into_engine_config)
            .map_err(|e| CompareError::InvalidConfig(e.to_string())),
        None => Ok(EngineConfig::default()),
    }
}

fn run(input: &[u8]) -> Result<serde_json::Value, CompareError> {
    let frame = parse_frame(input)?;
    let window = window_from_env(WINDOW_ENV)?;
    let cfg = load_engine_config()?;
    let report = compare_bytes(frame.a, frame.b, window, &cfg)?;
    serde_json::to_value(report).map_err(|e| CompareError::Internal(e.to_string()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut input = Vec::new();
    let outcome = match io::stdin().lock().read_to_end(&mut input) {
        Ok(_) => run(&input),
        Err(e) => Err(CompareError::Internal(format!("failed to read stdin: {e}"))),
    };

    let body = match outcome {
        Ok(report) => report,
        Err(err) => {
            tracing::warn!(kind = err.kind(), error = %err, "comparison rejected");
            serde_json::to_value(err.to_response())?
        }
    };

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &body)?;
    writeln!(stdout)?;
    Ok(())
}
