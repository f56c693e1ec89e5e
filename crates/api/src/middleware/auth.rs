//! HTTP Basic authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use museum_core::error::CoreError;

use crate::auth::basic::BasicCredentials;
use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried the configured Basic-Auth credentials.
///
/// Place it before any body extractor so unauthenticated requests are
/// rejected with 401 before the payload is looked at:
///
/// ```ignore
/// async fn my_handler(BasicAuth(user): BasicAuth, Json(body): Json<Input>) -> AppResult<Json<()>> {
///     tracing::info!(%user, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BasicAuth(pub String);

impl FromRequestParts<AppState> for BasicAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let presented = BasicCredentials::from_header(header).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Basic <credentials>".into(),
            ))
        })?;

        if !state.config.credentials.verify(&presented) {
            tracing::warn!(username = %presented.username, "Rejected Basic-Auth credentials");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid credentials".into(),
            )));
        }

        Ok(BasicAuth(presented.username))
    }
}
