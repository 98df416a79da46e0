//! Address value object.

use super::errors::ValidationError;
use super::string_value_object;

/// A postal address. Any text is accepted as long as it is not blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    /// Create a new Address from trimmed input.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAddress` if the input is blank.
    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();
        let trimmed = address.trim();

        if !Self::is_valid(trimmed) {
            return Err(ValidationError::InvalidAddress(address));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Whether `address` is a valid address as given.
    pub fn is_valid(address: &str) -> bool {
        address.chars().next().is_some_and(|c| !c.is_whitespace())
    }

    /// Get the address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

string_value_object!(Address);
