//! Name value object.

use super::errors::ValidationError;
use super::{collapse_whitespace, string_value_object};
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("Failed to compile name regex"));

/// A person's full name.
///
/// Names are mandatory and never empty. Runs of whitespace are collapsed to
/// a single space, so `"Alex   Yeoh"` and `"Alex Yeoh"` are the same value.
///
/// Equality is exact on the normalized text. Identity comparisons between
/// persons go through [`Name::is_same_name`], which also ignores case.
///
/// # Example
///
/// ```
/// use tutorbook::domain::Name;
///
/// let name = Name::new("  Alex   Yeoh ").unwrap();
/// assert_eq!(name.as_str(), "Alex Yeoh");
/// assert!(name.is_same_name(&Name::new("alex yeoh").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    /// Create a new Name, normalizing whitespace and validating characters.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is blank or has
    /// anything other than ASCII letters, digits, and spaces.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let normalized = collapse_whitespace(&name);

        if !Self::is_valid(&normalized) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(normalized))
    }

    /// Whether `name` is a valid name as given.
    pub fn is_valid(name: &str) -> bool {
        NAME_REGEX.is_match(name)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Key used for identity comparisons: lowercase, single-spaced.
    pub fn identity_key(&self) -> String {
        self.0.to_lowercase()
    }

    /// Whether two names refer to the same person, ignoring case.
    pub fn is_same_name(&self, other: &Name) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

string_value_object!(Name);
