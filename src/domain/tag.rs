//! Tag value object.

use super::errors::ValidationError;
use super::string_value_object;
use once_cell::sync::Lazy;
use regex::Regex;

static TAG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("Failed to compile tag regex"));

/// A single-word label attached to a person, e.g. `friends` or `trial`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    /// Create a new Tag from trimmed input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTag` if the input is empty or not a
    /// single alphanumeric word.
    pub fn new(tag: impl Into<String>) -> Result<Self, ValidationError> {
        let tag = tag.into();
        let trimmed = tag.trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidTag(tag));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Whether `tag` is a valid tag name as given.
    pub fn is_valid(tag: &str) -> bool {
        TAG_REGEX.is_match(tag)
    }

    /// Get the tag name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_value_object!(Tag);
