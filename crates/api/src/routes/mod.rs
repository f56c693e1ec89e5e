pub mod health;
pub mod museums;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// Route hierarchy:
///
/// ```text
/// /museums                 list, create (Basic auth)
/// /museums/{id}            get, create, update, delete (Basic auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/museums", museums::router())
}
