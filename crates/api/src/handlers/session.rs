//! Handler for the authenticated session probe.

use axum::Json;

use crate::middleware::session::CurrentUser;
use crate::response::MessageResponse;

/// GET /check-session
///
/// Greets the authenticated user by email. The [`CurrentUser`] extractor
/// rejects anonymous requests with 401 before this body runs.
pub async fn check_session(user: CurrentUser) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!("Hello, {}!", user.email)))
}
