use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use codesim::{CodesimConfig, EngineConfig};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Engine configuration applied to every comparison
    pub engine: Arc<EngineConfig>,

    pub started_at: Instant,
}

impl ServerState {
    /// Create new server state, loading the engine config file if one is set.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let engine = match &config.engine_config {
            Some(path) => CodesimConfig::from_file(path)
                .map(CodesimConfig::into_engine_config)
                .map_err(|e| ServerError::Config(e.to_string()))?,
            None => EngineConfig::default(),
        };
        engine
            .validate()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        Ok(Self::with_engine(config, engine))
    }

    pub fn with_engine(config: ServerConfig, engine: EngineConfig) -> Self {
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            started_at: Instant::now(),
        }
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
