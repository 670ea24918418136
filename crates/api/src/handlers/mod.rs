//! Request handlers, one module per resource.

pub mod auth;
pub mod session;
