//! Error types for the tutorbook registry.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{Appointment, ValidationError};
use crate::parser::FieldKind;
use thiserror::Error;

/// Errors raised while turning raw field input into domain values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A field value failed validation; the message is the field's constraint
    #[error("{0}")]
    Invalid(#[from] ValidationError),

    /// An index was not a positive integer
    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    /// Single-valued fields were supplied more than once
    #[error("Multiple values specified for the following single-valued field(s): {}", format_kinds(.0))]
    DuplicateFields(Vec<FieldKind>),

    /// A mandatory field was not supplied at all
    #[error("Missing required field: {}", .0.prefix())]
    MissingField(FieldKind),
}

/// Errors raised by address book mutations.
///
/// Every operation checks before it mutates, so a returned error means the
/// address book is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Another stored person already has the same name
    #[error("This person already exists in the address book")]
    DuplicatePerson,

    /// No stored person matches the one given
    #[error("The person could not be found in the address book")]
    PersonNotFound,

    /// An incoming appointment clashes with one already scheduled
    #[error("Appointment {incoming} overlaps with existing appointment {existing}")]
    AppointmentOverlap {
        existing: Appointment,
        incoming: Appointment,
    },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

fn format_kinds(kinds: &[FieldKind]) -> String {
    kinds
        .iter()
        .map(|k| k.prefix())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Convenience type alias for Results with ParseError
pub type ParseResult<T> = Result<T, ParseError>;

/// Convenience type alias for Results with RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
