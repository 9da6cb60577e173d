use std::sync::Arc;

use streetcode_services::dispatch::Dispatcher;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Request dispatcher holding the repositories and blob storage.
    pub dispatcher: Arc<Dispatcher>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
