//! Request middleware.
//!
//! - [`session::validate_session`] -- Router-wide session validation layer.
//! - [`session::CurrentUser`] -- Extractor for handlers that require an
//!   authenticated identity.

pub mod session;
