use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Holds only the immutable configuration: the service keeps no mutable
/// state across requests, so this is cheaply cloneable and lock-free.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration loaded once at startup.
    pub config: Arc<ServerConfig>,
}
