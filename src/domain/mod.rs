//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for every person field: names,
//! phone numbers, email addresses, postal addresses, notes, tags, subjects,
//! levels, and appointment slots. These value objects normalize and validate
//! at construction time so invalid data can never be represented in a
//! [`Person`](crate::models::Person).

/// Implements string-backed serde, `Display` and [`FieldValue`] for a value
/// object with a `new` constructor and an `as_str` accessor.
///
/// Deserialization goes through `new`, so a stored value is re-validated.
macro_rules! string_value_object {
    ($ty:ident) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serde::Serialize::serialize(self.as_str(), serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                $ty::new(s).map_err(serde::de::Error::custom)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::domain::FieldValue for $ty {
            fn to_display_string(&self) -> String {
                self.as_str().to_string()
            }
        }
    };
}

pub(crate) use string_value_object;

pub mod address;
pub mod appointment;
pub mod email;
pub mod errors;
pub mod field;
pub mod level;
pub mod name;
pub mod note;
pub mod phone;
pub mod subject;
pub mod tag;

pub use address::Address;
pub use appointment::Appointment;
pub use email::Email;
pub use errors::ValidationError;
pub use field::{Field, FieldValue, EMPTY_PLACEHOLDER};
pub use level::Level;
pub use name::Name;
pub use note::Note;
pub use phone::Phone;
pub use subject::Subject;
pub use tag::Tag;

/// Collapse runs of whitespace into single spaces and trim both ends.
pub(crate) fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  Alex \t  Yeoh  "), "Alex Yeoh");
        assert_eq!(collapse_whitespace("   "), "");
    }
}
