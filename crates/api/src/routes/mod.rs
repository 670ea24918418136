pub mod auth;
pub mod health;
pub mod session;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// Route hierarchy:
///
/// ```text
/// /test                GET   hello world (public)
/// /health              GET   liveness probe with db ping (public)
/// /check-session       GET   greet the authenticated user
///
/// /auth/register       POST  create account (public)
/// /auth/login          POST  authenticate, issue session cookie (public)
/// /auth/logout         POST  revoke all sessions (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(session::router())
        .nest("/auth", auth::router())
}
