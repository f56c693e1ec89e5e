//! Authentication primitives.
//!
//! - [`basic`] -- HTTP Basic credential parsing and verification.

pub mod basic;
