//! Optional field wrapper with an explicit empty variant.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Placeholder rendered wherever an empty field is displayed.
pub const EMPTY_PLACEHOLDER: &str = "-";

/// Shared capability of every value that can appear as a person field.
pub trait FieldValue {
    /// Whether this value stands for "no value".
    fn is_empty(&self) -> bool {
        false
    }

    /// The user-facing text of the value. Empty values render as `""`.
    fn to_display_string(&self) -> String;
}

/// An optional person field.
///
/// `Empty` is a valid state of its own: consumers never deal with a missing
/// reference, they ask the field whether it is empty.
///
/// # Example
///
/// ```
/// use tutorbook::domain::{Field, FieldValue, Phone};
///
/// let phone: Field<Phone> = Field::Value(Phone::new("91234567").unwrap());
/// assert!(!phone.is_empty());
/// assert_eq!(Field::<Phone>::Empty.display_or_placeholder(), "-");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field<T> {
    /// A validated, non-empty value.
    Value(T),
    /// The field has no value.
    Empty,
}

impl<T> Field<T> {
    /// Borrow the contained value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Empty => None,
        }
    }
}

impl<T: FieldValue> Field<T> {
    /// Display text, or [`EMPTY_PLACEHOLDER`] for an empty field.
    pub fn display_or_placeholder(&self) -> String {
        match self {
            Self::Value(v) => v.to_display_string(),
            Self::Empty => EMPTY_PLACEHOLDER.to_string(),
        }
    }
}

impl<T: FieldValue> FieldValue for Field<T> {
    fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    fn to_display_string(&self) -> String {
        match self {
            Self::Value(v) => v.to_display_string(),
            Self::Empty => String::new(),
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Self::Value)
    }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => write!(f, "{}", v),
            Self::Empty => Ok(()),
        }
    }
}

// Serde support - an empty field is `null`
impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}
