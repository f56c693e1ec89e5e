//! Route definitions for the museum resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::museums;
use crate::state::AppState;

/// Museum routes mounted at `/museums`.
///
/// ```text
/// GET    /        -> list_museums
/// POST   /        -> create_museum
/// GET    /{id}    -> get_museum
/// POST   /{id}    -> create_museum
/// PUT    /{id}    -> update_museum
/// DELETE /{id}    -> delete_museum
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(museums::list_museums).post(museums::create_museum),
        )
        .route(
            "/{id}",
            get(museums::get_museum)
                .post(museums::create_museum)
                .put(museums::update_museum)
                .delete(museums::delete_museum),
        )
}
