//! Repository for the `user_sessions` table.

use sesame_core::session::SESSION_TTL_HOURS;
use sesame_core::types::DbId;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::session::{CreateSession, Session};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "session_id, user_id, created_at, expires_at, revoked_at, user_agent, ip";

/// Provides persistence operations for sessions.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session with a freshly generated random identifier,
    /// returning the created row.
    ///
    /// The identifier is a v4 UUID (128 bits of entropy) and serves as both
    /// primary key and bearer token. Expiry is fixed at creation time.
    pub async fn create(pool: &PgPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let session_id = Uuid::new_v4();

        // created_at and expires_at derive from the same NOW() so the TTL
        // is exact rather than subject to clock skew with the server.
        let query = format!(
            "INSERT INTO user_sessions (session_id, user_id, expires_at, user_agent, ip)
             VALUES ($1, $2, NOW() + make_interval(hours => $3), $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(session_id)
            .bind(input.user_id)
            .bind(SESSION_TTL_HOURS as i32)
            .bind(&input.user_agent)
            .bind(&input.ip)
            .fetch_one(pool)
            .await
    }

    /// Find a session by id, only if it is currently active.
    ///
    /// Expired, revoked, and absent sessions are all reported as `None` so
    /// callers cannot distinguish the three cases.
    pub async fn find_active(pool: &PgPool, session_id: Uuid) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_sessions
             WHERE session_id = $1
               AND revoked_at IS NULL
               AND expires_at > NOW()"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(session_id)
            .fetch_optional(pool)
            .await
    }

    /// Revoke a single session. Returns `true` if the row was updated.
    pub async fn revoke(pool: &PgPool, session_id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE user_sessions SET revoked_at = NOW()
             WHERE session_id = $1 AND revoked_at IS NULL",
        )
        .bind(session_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every session owned by a user. Returns the count of deleted
    /// rows; idempotent, so zero existing sessions is not an error.
    pub async fn revoke_all_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_sessions WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
