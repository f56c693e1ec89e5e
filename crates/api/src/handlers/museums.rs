//! Handlers for the museum resource.
//!
//! Every handler authenticates first, validates its input second, and only
//! then opens a database connection for exactly one statement.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use museum_core::error::CoreError;
use museum_core::types::DbId;
use museum_db::models::museum::{Museum, MuseumInput, NewMuseum};
use museum_db::repositories::MuseumRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::BasicAuth;
use crate::state::AppState;

const ENTITY: &str = "Museum";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

// ---------------------------------------------------------------------------
// Collection endpoints
// ---------------------------------------------------------------------------

/// GET /museums
///
/// List every museum.
pub async fn list_museums(
    BasicAuth(_user): BasicAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Museum>>> {
    let museums = state
        .db
        .run(|conn| Box::pin(async move { MuseumRepo::list(conn).await }))
        .await?;

    Ok(Json(museums))
}

/// POST /museums and POST /museums/{id}
///
/// Create a museum. The item-path registration ignores its `{id}` segment.
pub async fn create_museum(
    BasicAuth(user): BasicAuth,
    State(state): State<AppState>,
    payload: Result<Json<MuseumInput>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let input = NewMuseum::try_from(input)?;

    let museum = state
        .db
        .run(move |conn| Box::pin(async move { MuseumRepo::create(conn, &input).await }))
        .await?;

    tracing::info!(museum_id = museum.id, name = %museum.name, %user, "Museum created");

    Ok((StatusCode::CREATED, Json(museum)))
}

// ---------------------------------------------------------------------------
// Item endpoints
// ---------------------------------------------------------------------------

/// GET /museums/{id}
pub async fn get_museum(
    BasicAuth(_user): BasicAuth,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Museum>> {
    let Path(id) = path?;

    let museum = state
        .db
        .run(move |conn| Box::pin(async move { MuseumRepo::find_by_id(conn, id).await }))
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(museum))
}

/// PUT /museums/{id}
///
/// Replace all four fields. The response is the row as stored.
pub async fn update_museum(
    BasicAuth(user): BasicAuth,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
    payload: Result<Json<MuseumInput>, JsonRejection>,
) -> AppResult<Json<Museum>> {
    let Path(id) = path?;
    let Json(input) = payload?;
    let input = NewMuseum::try_from(input)?;

    let museum = state
        .db
        .run(move |conn| Box::pin(async move { MuseumRepo::update(conn, id, &input).await }))
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(museum_id = id, %user, "Museum updated");

    Ok(Json(museum))
}

/// DELETE /museums/{id}
pub async fn delete_museum(
    BasicAuth(user): BasicAuth,
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(id) = path?;

    let deleted = state
        .db
        .run(move |conn| Box::pin(async move { MuseumRepo::delete(conn, id).await }))
        .await?;

    if !deleted {
        return Err(not_found(id));
    }

    tracing::info!(museum_id = id, %user, "Museum deleted");

    Ok(StatusCode::NO_CONTENT)
}
