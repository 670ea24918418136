//! Handlers for the `/auth` resource (register, login, logout).

use axum::extract::State;
use axum::http::header::USER_AGENT;
use axum::http::HeaderMap;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use sesame_core::error::CoreError;
use sesame_core::validation::{validate_email, validate_password};
use sesame_db::models::session::CreateSession;
use sesame_db::models::user::CreateUser;
use sesame_db::repositories::{SessionRepo, UserRepo};
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::session::{CurrentUser, SESSION_COOKIE};
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/register
///
/// Create a new account. Does NOT log the user in.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<Json<MessageResponse>> {
    validate_email(&input.email).map_err(AppError::Core)?;
    validate_password(&input.password).map_err(AppError::Core)?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| CoreError::Internal(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        email: input.email,
        password_hash,
        full_name: input.full_name,
    };

    // The insert is atomic: on a duplicate email nothing is persisted.
    UserRepo::create(&state.pool, &create).await.map_err(|err| {
        if sesame_db::is_unique_violation(&err, "uq_users_email") {
            AppError::Core(CoreError::Conflict("Email already registered".into()))
        } else {
            AppError::Database(err)
        }
    })?;

    Ok(Json(MessageResponse::new("User registered successfully")))
}

/// POST /auth/login
///
/// Authenticate with email + password. On success, issues a session and
/// sets its id as an HTTP-only cookie.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    Json(input): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<MessageResponse>)> {
    let user = UserRepo::find_by_email(&state.pool, &input.email).await?;

    // Unknown email and wrong password produce the same response, so a
    // caller cannot learn whether an account exists.
    let Some(user) = user else {
        return Err(invalid_credentials());
    };
    if !verify_password(&input.password, &user.password_hash) {
        return Err(invalid_credentials());
    }

    let session = SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            user_agent: headers
                .get(USER_AGENT)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            ip: client_ip(&headers),
        },
    )
    .await?;

    let jar = jar.add(session_cookie(session.session_id));

    Ok((jar, Json(MessageResponse::new("Logged in successfully"))))
}

/// POST /auth/logout
///
/// Revoke every session belonging to the authenticated user (all devices)
/// and clear the cookie.
pub async fn logout(
    State(state): State<AppState>,
    user: CurrentUser,
    jar: CookieJar,
) -> AppResult<(CookieJar, Json<MessageResponse>)> {
    let revoked = SessionRepo::revoke_all_for_user(&state.pool, user.user_id).await?;
    tracing::debug!(user_id = user.user_id, revoked, "Revoked sessions on logout");

    let jar = jar.remove(clear_session_cookie());

    Ok((jar, Json(MessageResponse::new("Logged out successfully"))))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Undifferentiated login failure for both unknown email and bad password.
fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
}

/// Build the session cookie. The session id is the bearer token; the
/// server-side TTL bounds its life, so no `Max-Age` is set.
fn session_cookie(session_id: Uuid) -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, session_id.to_string());
    cookie.set_path("/");
    cookie.set_http_only(true);
    cookie.set_secure(true);
    cookie.set_same_site(SameSite::Lax);
    cookie
}

/// Cookie template used to clear the session cookie on logout. Attributes
/// must match [`session_cookie`] for the removal to take effect.
fn clear_session_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::new(SESSION_COOKIE, "");
    cookie.set_path("/");
    cookie
}

/// Best-effort client IP for session audit metadata. Takes the first hop
/// of `X-Forwarded-For` when a proxy supplies it. Advisory only -- never
/// consulted during validation.
fn client_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
