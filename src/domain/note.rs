//! Note value object.

use super::errors::ValidationError;
use super::string_value_object;

/// Free-form remarks about a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Note(String);

impl Note {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Notes can take any values, and it should not be blank";

    /// Create a new Note from trimmed input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidNote` if the input is blank.
    pub fn new(note: impl Into<String>) -> Result<Self, ValidationError> {
        let note = note.into();
        let trimmed = note.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::InvalidNote(note));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the note as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_value_object!(Note);
