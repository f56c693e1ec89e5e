//! Request extractors that gate handlers.
//!
//! - [`auth::BasicAuth`] -- Requires a valid HTTP Basic `Authorization` header.

pub mod auth;
