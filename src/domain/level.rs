//! Level value object.

use super::errors::ValidationError;
use super::string_value_object;
use once_cell::sync::Lazy;
use regex::Regex;

static LEVEL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]{1,3}) ?([1-9])$").expect("Failed to compile level regex"));

/// A school level code such as `P6`, `S3` or `JC1`.
///
/// Levels are stored uppercase with no inner space, so `sec 3` and `SEC3`
/// are the same level.
///
/// # Example
///
/// ```
/// use tutorbook::domain::Level;
///
/// assert_eq!(Level::new("sec 3").unwrap().as_str(), "SEC3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Level(String);

impl Level {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Levels should be a school level code: \
1 to 3 letters followed by a single digit from 1 to 9, e.g. P6, S3 or JC1";

    /// Create a new Level, normalizing case and spacing.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidLevel` if the trimmed input is not a
    /// level code.
    pub fn new(level: impl Into<String>) -> Result<Self, ValidationError> {
        let level = level.into();

        let normalized = LEVEL_REGEX
            .captures(level.trim())
            .map(|caps| format!("{}{}", caps[1].to_uppercase(), &caps[2]))
            .ok_or_else(|| ValidationError::InvalidLevel(level.clone()))?;

        Ok(Self(normalized))
    }

    /// Whether `level` is a valid level code as given.
    pub fn is_valid(level: &str) -> bool {
        LEVEL_REGEX.is_match(level)
    }

    /// Get the level code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_value_object!(Level);
