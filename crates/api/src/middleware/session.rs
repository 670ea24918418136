//! Session validation middleware and the authenticated-user extractor.
//!
//! Runs once per inbound request, before any handler. Requests without a
//! session cookie proceed anonymously; requests with a cookie that does not
//! resolve to an active session are rejected outright with 401. A cookie
//! that resolves attaches the owning user's identity to the request.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;
use sesame_core::error::CoreError;
use sesame_core::types::DbId;
use sesame_db::repositories::{SessionRepo, UserRepo};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

/// Name of the cookie carrying the session identifier.
pub const SESSION_COOKIE: &str = "session_id";

/// Identity resolved by the session validator.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: CurrentUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// The user's internal database id.
    pub user_id: DbId,
    /// The user's email, exactly as stored.
    pub email: String,
}

/// Uniform rejection for missing, malformed, unknown, expired, and revoked
/// sessions. One message for every cause, so a caller cannot probe which
/// case occurred.
fn unauthorized() -> AppError {
    AppError::Core(CoreError::Unauthorized("Not authenticated".into()))
}

/// Router-wide session validation layer.
///
/// State machine per request:
/// - no cookie -> proceed anonymously
/// - cookie resolving to an active session -> attach [`CurrentUser`], proceed
/// - any other cookie -> 401, handler never runs
///
/// An invalid or expired cookie is a hard reject even on routes that do not
/// require authentication; it is never silently downgraded to anonymous.
pub async fn validate_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        return Ok(next.run(request).await);
    };

    let session_id = Uuid::parse_str(cookie.value()).map_err(|_| unauthorized())?;

    let session = SessionRepo::find_active(&state.pool, session_id)
        .await?
        .ok_or_else(unauthorized)?;

    // A session whose owner vanished is as dead as a revoked one.
    let user = UserRepo::find_by_id(&state.pool, session.user_id)
        .await?
        .ok_or_else(unauthorized)?;

    request.extensions_mut().insert(CurrentUser {
        user_id: user.id,
        email: user.email,
    });

    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // The validator inserts the identity; its absence means the request
        // came in anonymously, which this handler does not accept.
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(unauthorized)
    }
}
