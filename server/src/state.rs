//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled `reqwest::Client` for every proxied call plus the parsed
//! configuration. Clone is required by Axum; both fields are cheap to clone.

use std::sync::Arc;

use crate::config::{ConfigError, ServerConfig};

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Build the proxy client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the TLS backend fails to load.
    pub fn new(config: ServerConfig) -> Result<Self, ConfigError> {
        let http = reqwest::Client::builder()
            .timeout(config.proxy_timeout)
            .connect_timeout(config.proxy_connect_timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self { http, config: Arc::new(config) })
    }
}
