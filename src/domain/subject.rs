//! Subject value object.

use super::errors::ValidationError;
use super::{collapse_whitespace, string_value_object};
use once_cell::sync::Lazy;
use regex::Regex;

static SUBJECT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("Failed to compile subject regex")
});

/// An academic subject a person is tutored in, e.g. `Math` or `A Math`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Subject(String);

impl Subject {
    pub const MAX_LENGTH: usize = 30;

    pub const MESSAGE_CONSTRAINTS: &'static str = "Subjects should only contain alphanumeric \
characters and spaces, should not be blank, and should be at most 30 characters long";

    /// Create a new Subject, normalizing whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidSubject` for blank, overlong, or
    /// non-alphanumeric input.
    pub fn new(subject: impl Into<String>) -> Result<Self, ValidationError> {
        let subject = subject.into();
        let normalized = collapse_whitespace(&subject);

        if !Self::is_valid(&normalized) {
            return Err(ValidationError::InvalidSubject(subject));
        }

        Ok(Self(normalized))
    }

    /// Whether `subject` is a valid subject as given.
    pub fn is_valid(subject: &str) -> bool {
        subject.len() <= Self::MAX_LENGTH && SUBJECT_REGEX.is_match(subject)
    }

    /// Get the subject as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_value_object!(Subject);
