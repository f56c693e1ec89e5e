use std::sync::Arc;

use museum_db::ConnectionProvider;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable and holds no mutable data: each request opens
/// its own database connection through [`ConnectionProvider`].
#[derive(Clone)]
pub struct AppState {
    /// Per-request database connection factory.
    pub db: ConnectionProvider,
    /// Server configuration (credentials, timeouts).
    pub config: Arc<ServerConfig>,
}
