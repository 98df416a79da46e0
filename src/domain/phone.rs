//! Phone value object.

use super::errors::ValidationError;
use super::string_value_object;
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("Failed to compile phone regex"));

/// A type-safe wrapper for phone numbers.
///
/// Phone numbers are plain digit strings of at least three digits. Leading
/// and trailing whitespace is trimmed before validation.
///
/// # Example
///
/// ```
/// use tutorbook::domain::Phone;
///
/// let phone = Phone::new(" 91234567 ").unwrap();
/// assert_eq!(phone.as_str(), "91234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and should be at least 3 digits long";

    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the trimmed input is not
    /// at least three ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        let trimmed = phone.trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Whether `phone` is a valid phone number as given.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_value_object!(Phone);
