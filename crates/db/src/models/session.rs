//! User session model and DTOs.

use sesame_core::session;
use sesame_core::types::{DbId, Timestamp};
use sqlx::FromRow;
use uuid::Uuid;

/// A session row from the `user_sessions` table.
///
/// The `session_id` doubles as the bearer token carried in the client's
/// cookie, so it must never appear in logs.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub session_id: Uuid,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    /// Advisory audit metadata; never consulted during validation.
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}

impl Session {
    /// Whether this session is active at `now` (not revoked, not expired).
    pub fn is_active(&self, now: Timestamp) -> bool {
        session::is_active(self.expires_at, self.revoked_at, now)
    }
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub user_id: DbId,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}
