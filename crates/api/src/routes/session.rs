//! Route definition for the session probe.

use axum::routing::get;
use axum::Router;

use crate::handlers::session;
use crate::state::AppState;

/// Routes mounted at the root level.
pub fn router() -> Router<AppState> {
    Router::new().route("/check-session", get(session::check_session))
}
