//! Directory records and the draft/filter state the UI edits before
//! anything reaches the backend.

use serde::{Deserialize, Serialize};

use crate::validation;

/// A directory record. The username is the only stable key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub age: u8,
    pub interest: String,
}

impl Profile {
    pub fn new(username: impl Into<String>, age: u8, interest: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            age,
            interest: interest.into(),
        }
    }
}

/// The "Join" form: raw text for each field as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewProfileDraft {
    pub username: String,
    pub age: String,
    pub interest: String,
}

impl NewProfileDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    /// Gated age update. Returns `false` (and keeps the old value) if `raw`
    /// is not a valid age input.
    pub fn set_age(&mut self, raw: &str) -> bool {
        validation::apply_age_input(&mut self.age, raw)
    }

    pub fn set_interest(&mut self, value: impl Into<String>) {
        self.interest = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Free-text filter for the browse view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub text: String,
}

impl SearchFilter {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Age-range filter for the match view, relative to the caller's own username.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilter {
    pub min_age: String,
    pub max_age: String,
    pub exclude_username: String,
}

impl MatchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_min_age(&mut self, raw: &str) -> bool {
        validation::apply_age_input(&mut self.min_age, raw)
    }

    pub fn set_max_age(&mut self, raw: &str) -> bool {
        validation::apply_age_input(&mut self.max_age, raw)
    }

    pub fn set_exclude_username(&mut self, value: impl Into<String>) {
        self.exclude_username = value.into();
    }
}
