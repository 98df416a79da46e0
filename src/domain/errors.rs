//! Domain validation errors.

use super::{Address, Appointment, Email, Level, Name, Note, Phone, Subject, Tag};
use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the rejected input. The `Display` output is the
/// fixed constraint message of the value type, which is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is blank or contains disallowed characters.
    InvalidName(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided address is blank.
    InvalidAddress(String),

    /// The provided note is blank.
    InvalidNote(String),

    /// The provided tag is not a single alphanumeric word.
    InvalidTag(String),

    /// The provided subject is invalid.
    InvalidSubject(String),

    /// The provided level is not a recognised level code.
    InvalidLevel(String),

    /// The provided appointment slot cannot be parsed.
    InvalidAppointment(String),
}

impl ValidationError {
    /// The constraint message of the value type that rejected the input.
    pub fn constraint(&self) -> &'static str {
        match self {
            Self::InvalidName(_) => Name::MESSAGE_CONSTRAINTS,
            Self::InvalidPhone(_) => Phone::MESSAGE_CONSTRAINTS,
            Self::InvalidEmail(_) => Email::MESSAGE_CONSTRAINTS,
            Self::InvalidAddress(_) => Address::MESSAGE_CONSTRAINTS,
            Self::InvalidNote(_) => Note::MESSAGE_CONSTRAINTS,
            Self::InvalidTag(_) => Tag::MESSAGE_CONSTRAINTS,
            Self::InvalidSubject(_) => Subject::MESSAGE_CONSTRAINTS,
            Self::InvalidLevel(_) => Level::MESSAGE_CONSTRAINTS,
            Self::InvalidAppointment(_) => Appointment::MESSAGE_CONSTRAINTS,
        }
    }

    /// The raw input that failed validation.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidName(s)
            | Self::InvalidPhone(s)
            | Self::InvalidEmail(s)
            | Self::InvalidAddress(s)
            | Self::InvalidNote(s)
            | Self::InvalidTag(s)
            | Self::InvalidSubject(s)
            | Self::InvalidLevel(s)
            | Self::InvalidAppointment(s) => s,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.constraint())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_constraint_message() {
        let err = ValidationError::InvalidPhone("12".to_string());
        assert_eq!(
            err.to_string(),
            "Phone numbers should only contain numbers, and should be at least 3 digits long"
        );
        assert_eq!(err.input(), "12");
    }

    #[test]
    fn test_each_variant_has_distinct_message() {
        let errors = [
            ValidationError::InvalidName(String::new()),
            ValidationError::InvalidPhone(String::new()),
            ValidationError::InvalidEmail(String::new()),
            ValidationError::InvalidAddress(String::new()),
            ValidationError::InvalidNote(String::new()),
            ValidationError::InvalidTag(String::new()),
            ValidationError::InvalidSubject(String::new()),
            ValidationError::InvalidLevel(String::new()),
            ValidationError::InvalidAppointment(String::new()),
        ];
        let messages: std::collections::HashSet<_> =
            errors.iter().map(|e| e.constraint()).collect();
        assert_eq!(messages.len(), errors.len());
    }
}
