//! Age input gating and final form validation.
//!
//! Keystroke-level checks are silent: a rejected value never replaces the
//! current field contents. Submission re-validates everything and reports a
//! [`ValidationError`] whose display text is what the user is shown.

use std::fmt;

use crate::profile::{NewProfileDraft, Profile};

/// Inclusive upper bound for any age the client will store or submit.
pub const MAX_AGE: u8 = 150;

/// Client-side rejection of a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is blank.
    MissingFields,
    /// The age is not an integer in `0..=150`.
    AgeOutOfRange,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields => write!(f, "Please fill all fields"),
            ValidationError::AgeOutOfRange => {
                write!(f, "Age must be between 0 and {}", MAX_AGE)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parse `raw` as an age, returning `None` unless it is an integer in `0..=150`.
pub fn parse_age(raw: &str) -> Option<u8> {
    let n: i64 = raw.parse().ok()?;
    if (0..=i64::from(MAX_AGE)).contains(&n) {
        u8::try_from(n).ok()
    } else {
        None
    }
}

/// True for the empty string or an integer in `0..=150`.
pub fn is_valid_age_input(raw: &str) -> bool {
    raw.is_empty() || parse_age(raw).is_some()
}

/// Write `raw` into `field` only if it passes [`is_valid_age_input`].
///
/// Works on any draft slot (new-profile age, match-filter bounds).
pub fn apply_age_input(field: &mut String, raw: &str) -> bool {
    if !is_valid_age_input(raw) {
        return false;
    }
    field.clear();
    field.push_str(raw);
    true
}

/// Validate a "Join" form and build the profile to submit.
pub fn validate_new_profile(draft: &NewProfileDraft) -> Result<Profile, ValidationError> {
    let username = draft.username.trim();
    let age = draft.age.trim();
    let interest = draft.interest.trim();
    if username.is_empty() || age.is_empty() || interest.is_empty() {
        return Err(ValidationError::MissingFields);
    }
    let age = parse_age(age).ok_or(ValidationError::AgeOutOfRange)?;
    Ok(Profile::new(username, age, interest))
}
