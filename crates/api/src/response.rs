//! Shared response types for API handlers.
//!
//! Success responses use a `{ "message": ... }` envelope; use
//! [`MessageResponse`] instead of ad-hoc `serde_json::json!` so the shape
//! stays consistent across endpoints.

use serde::Serialize;

/// Standard `{ "message": "..." }` response envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
