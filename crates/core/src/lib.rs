//! Shared domain types for the museum service.
//!
//! - [`types`] -- primitive aliases shared by every crate.
//! - [`error`] -- the domain error enum surfaced by handlers.
//! - [`validation`] -- helpers turning payload validation failures into [`error::CoreError`].

pub mod error;
pub mod types;
pub mod validation;
