//! Request payload validation.
//!
//! Payload DTOs derive [`validator::Validate`]; [`require_fields`] runs the
//! derived rules and collapses any failure into a single
//! [`CoreError::Validation`] carrying [`MISSING_REQUIRED_FIELDS`].

use validator::Validate;

use crate::error::CoreError;

/// Message returned whenever a required field is absent, `null`, or empty.
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";

/// Validate `input`, mapping any rule violation to [`CoreError::Validation`].
pub fn require_fields<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|_| CoreError::Validation(MISSING_REQUIRED_FIELDS.to_string()))
}
