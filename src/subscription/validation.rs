//! Field validation for subscription forms
//!
//! Rules run in the order the fields appear on the form and stop at the
//! first failure, so the user only ever sees one problem at a time.

use super::{SubmissionMode, SubscriptionForm};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

// ASCII classes on purpose: `\d` would also match other Unicode digits.
static NATIONAL_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("national ID pattern is valid"));
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^09[0-9]{8}$").expect("phone pattern is valid"));

/// Reason a form was rejected before reaching the network
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("national ID must be 10 digits.")]
    InvalidNationalId,

    #[error("phone must have the format 09XXXXXXXX.")]
    InvalidPhone,

    #[error("a notification lead time must be selected.")]
    MissingLeadTime,
}

/// Check `form` against the rules for `mode`.
///
/// Total over any input: malformed strings fail a rule, they never panic.
pub fn validate(form: &SubscriptionForm, mode: SubmissionMode) -> Result<(), ValidationError> {
    if !NATIONAL_ID.is_match(&form.cedula) {
        return Err(ValidationError::InvalidNationalId);
    }
    if !PHONE.is_match(&form.telefono) {
        return Err(ValidationError::InvalidPhone);
    }
    if mode == SubmissionMode::Create
        && form
            .tiempo_notificacion
            .as_deref()
            .map_or(true, str::is_empty)
    {
        return Err(ValidationError::MissingLeadTime);
    }
    Ok(())
}
