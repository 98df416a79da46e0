//! Parsers from raw field text to domain values.
//!
//! Optional fields (phone, email, address, note, level, subject) treat a
//! missing or blank input as [`Field::Empty`]. Name, tag, and appointment are
//! mandatory-shaped: blank input is a validation failure.

use crate::domain::{
    Address, Appointment, Email, Field, Level, Name, Note, Phone, Subject, Tag, ValidationError,
};
use crate::error::{ParseError, ParseResult};
use std::collections::BTreeSet;

/// A position in a displayed list.
///
/// Users see one-based positions; code indexes from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index(usize);

impl Index {
    /// Index for a user-facing position, or `None` for position zero.
    pub fn from_one_based(index: usize) -> Option<Self> {
        index.checked_sub(1).map(Self)
    }

    pub fn zero_based(&self) -> usize {
        self.0
    }

    pub fn one_based(&self) -> usize {
        self.0 + 1
    }
}

/// Parse a one-based index. Surrounding whitespace is ignored.
///
/// Only plain digit strings with a value above zero are accepted: no sign,
/// no decimal point, nothing that overflows `usize`.
pub fn parse_index(one_based: &str) -> ParseResult<Index> {
    let trimmed = one_based.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }

    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

/// Trimmed input, or `None` when the input is absent or blank.
fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_optional<T>(
    raw: Option<&str>,
    new: impl FnOnce(&str) -> Result<T, ValidationError>,
) -> Result<Field<T>, ValidationError> {
    non_blank(raw).map(new).transpose().map(Field::from)
}

pub fn parse_name(name: &str) -> Result<Name, ValidationError> {
    Name::new(name.trim())
}

pub fn parse_phone(phone: Option<&str>) -> Result<Field<Phone>, ValidationError> {
    parse_optional(phone, |s| Phone::new(s))
}

pub fn parse_email(email: Option<&str>) -> Result<Field<Email>, ValidationError> {
    parse_optional(email, |s| Email::new(s))
}

pub fn parse_address(address: Option<&str>) -> Result<Field<Address>, ValidationError> {
    parse_optional(address, |s| Address::new(s))
}

pub fn parse_note(note: Option<&str>) -> Result<Field<Note>, ValidationError> {
    parse_optional(note, |s| Note::new(s))
}

pub fn parse_level(level: Option<&str>) -> Result<Field<Level>, ValidationError> {
    parse_optional(level, |s| Level::new(s))
}

pub fn parse_subject(subject: Option<&str>) -> Result<Field<Subject>, ValidationError> {
    parse_optional(subject, |s| Subject::new(s))
}

pub fn parse_tag(tag: &str) -> Result<Tag, ValidationError> {
    Tag::new(tag.trim())
}

pub fn parse_appointment(appointment: &str) -> Result<Appointment, ValidationError> {
    Appointment::new(appointment.trim())
}

/// Parse every tag, skipping zero-length items. Whitespace-only items are
/// still rejected.
pub fn parse_tags<S: AsRef<str>>(tags: &[S]) -> Result<BTreeSet<Tag>, ValidationError> {
    let mut set = BTreeSet::new();
    for tag in tags {
        let tag: &str = tag.as_ref();
        if tag.is_empty() {
            continue;
        }
        set.insert(parse_tag(tag)?);
    }
    Ok(set)
}

/// Parse every subject, skipping items that parse to an empty field.
pub fn parse_subjects<S: AsRef<str>>(
    subjects: &[S],
) -> Result<BTreeSet<Subject>, ValidationError> {
    let mut set = BTreeSet::new();
    for subject in subjects {
        if let Field::Value(s) = parse_subject(Some(subject.as_ref()))? {
            set.insert(s);
        }
    }
    Ok(set)
}

/// Parse every appointment, skipping zero-length items.
///
/// Overlaps between the parsed appointments are not checked here; the
/// address book decides that under its overlap policy.
pub fn parse_appointments<S: AsRef<str>>(
    appointments: &[S],
) -> Result<BTreeSet<Appointment>, ValidationError> {
    let mut set = BTreeSet::new();
    for appointment in appointments {
        let appointment: &str = appointment.as_ref();
        if appointment.is_empty() {
            continue;
        }
        set.insert(parse_appointment(appointment)?);
    }
    Ok(set)
}
