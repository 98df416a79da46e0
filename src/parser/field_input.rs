//! Field input supplied by the command layer, and person construction from it.

use super::value_parser::{
    parse_address, parse_appointments, parse_email, parse_level, parse_name, parse_note,
    parse_phone, parse_subjects, parse_tags,
};
use crate::error::{ParseError, ParseResult};
use crate::models::Person;
use std::collections::BTreeMap;
use std::fmt;

/// The kinds of field a person is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Name,
    Phone,
    Email,
    Address,
    Note,
    Level,
    Tag,
    Subject,
    Appointment,
}

impl FieldKind {
    /// Kinds that take at most one value per command.
    pub const SINGLE_VALUED: [FieldKind; 6] = [
        FieldKind::Name,
        FieldKind::Phone,
        FieldKind::Email,
        FieldKind::Address,
        FieldKind::Note,
        FieldKind::Level,
    ];

    /// The command prefix for this kind, as shown in error messages.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Name => "n/",
            Self::Phone => "p/",
            Self::Email => "e/",
            Self::Address => "a/",
            Self::Note => "r/",
            Self::Level => "l/",
            Self::Tag => "t/",
            Self::Subject => "s/",
            Self::Appointment => "ap/",
        }
    }

    pub fn is_single_valued(&self) -> bool {
        Self::SINGLE_VALUED.contains(self)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Raw field values keyed by kind, in the order they were supplied.
///
/// The command layer fills this after splitting its input on prefixes.
///
/// # Example
///
/// ```
/// use tutorbook::parser::{parse_person, FieldInput, FieldKind};
///
/// let input = FieldInput::new()
///     .with(FieldKind::Name, "Amy Bee")
///     .with(FieldKind::Tag, "friend")
///     .with(FieldKind::Appointment, "Friday 10-11");
///
/// let person = parse_person(&input).unwrap();
/// assert_eq!(person.name().as_str(), "Amy Bee");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInput {
    values: BTreeMap<FieldKind, Vec<String>>,
}

impl FieldInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw value for `kind`.
    pub fn push(&mut self, kind: FieldKind, value: impl Into<String>) {
        self.values.entry(kind).or_default().push(value.into());
    }

    /// Builder-style [`FieldInput::push`].
    pub fn with(mut self, kind: FieldKind, value: impl Into<String>) -> Self {
        self.push(kind, value);
        self
    }

    /// The last value supplied for `kind`, if any.
    pub fn value(&self, kind: FieldKind) -> Option<&str> {
        self.values
            .get(&kind)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Every value supplied for `kind`, in order.
    pub fn all_values(&self, kind: FieldKind) -> &[String] {
        self.values
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Fail if any of `kinds` was supplied more than once.
    ///
    /// All offending kinds are reported together.
    pub fn verify_no_duplicate_fields(&self, kinds: &[FieldKind]) -> ParseResult<()> {
        let duplicated: Vec<FieldKind> = kinds
            .iter()
            .copied()
            .filter(|k| self.all_values(*k).len() > 1)
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicateFields(duplicated))
        }
    }
}

/// Build a [`Person`] from field input.
///
/// Fields are checked in the order name, phone, email, address, note,
/// level, tags, subjects, appointments, and the first invalid one is
/// reported. Absent or blank optional fields become empty.
pub fn parse_person(input: &FieldInput) -> ParseResult<Person> {
    input.verify_no_duplicate_fields(&FieldKind::SINGLE_VALUED)?;

    let raw_name = input
        .value(FieldKind::Name)
        .ok_or(ParseError::MissingField(FieldKind::Name))?;
    let name = parse_name(raw_name)?;
    let phone = parse_phone(input.value(FieldKind::Phone))?;
    let email = parse_email(input.value(FieldKind::Email))?;
    let address = parse_address(input.value(FieldKind::Address))?;
    let note = parse_note(input.value(FieldKind::Note))?;
    let level = parse_level(input.value(FieldKind::Level))?;
    let tags = parse_tags(input.all_values(FieldKind::Tag))?;
    let subjects = parse_subjects(input.all_values(FieldKind::Subject))?;
    let appointments = parse_appointments(input.all_values(FieldKind::Appointment))?;

    Ok(Person::builder(name)
        .phone(phone)
        .email(email)
        .address(address)
        .note(note)
        .level(level)
        .tags(tags)
        .subjects(subjects)
        .appointments(appointments)
        .build())
}
