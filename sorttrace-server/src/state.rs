//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::ServerConfig;

/// Immutable state shared by all handlers. Sort requests never share a
/// working array or recorder; only the limits are common.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
