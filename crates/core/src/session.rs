//! Pure session lifecycle rules shared by the store and its tests.

use crate::types::Timestamp;

/// Fixed session lifetime. Sessions expire lazily -- there is no sweep;
/// the boundary is enforced at lookup time.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Whether a session is active at `now`.
///
/// A session is active iff it has not been revoked and `now` is strictly
/// before its expiry. Callers must treat an inactive session exactly like
/// a missing one.
pub fn is_active(expires_at: Timestamp, revoked_at: Option<Timestamp>, now: Timestamp) -> bool {
    revoked_at.is_none() && now < expires_at
}
