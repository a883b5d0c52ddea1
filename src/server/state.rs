use axum::extract::FromRef;

use crate::catalog::Catalog;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

/// The catalog never changes after startup, so handlers share it without a lock.
pub type SharedCatalog = Arc<Catalog>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub catalog: SharedCatalog,
}

impl ServerState {
    pub fn new(config: ServerConfig, catalog: SharedCatalog) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            catalog,
        }
    }
}

impl FromRef<ServerState> for SharedCatalog {
    fn from_ref(input: &ServerState) -> Self {
        input.catalog.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
