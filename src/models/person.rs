//! Person model representing one tutoring contact.

use crate::domain::{
    Address, Appointment, Email, Field, FieldValue, Level, Name, Note, Phone, Subject, Tag,
    EMPTY_PLACEHOLDER,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Separator line between the sections of [`Person::view_sections`].
pub const SECTION_SEPARATOR: &str = "\n----------------------------------------\n";

/// A contact in the address book.
///
/// A `Person` is immutable: every field is validated on the way in, and
/// edits produce a new value through the `with_*` methods or
/// [`Person::to_builder`]. Optional fields are [`Field::Empty`] rather than
/// missing, and the tag, subject, and appointment sets are owned by this
/// person alone.
///
/// Two equality notions exist:
/// - [`Person::is_same_person`] compares names only and decides duplicates.
/// - `==` compares every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    name: Name,

    #[serde(default)]
    phone: Field<Phone>,

    #[serde(default)]
    email: Field<Email>,

    #[serde(default)]
    address: Field<Address>,

    #[serde(default)]
    note: Field<Note>,

    #[serde(default)]
    level: Field<Level>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    tags: BTreeSet<Tag>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    subjects: BTreeSet<Subject>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    appointments: BTreeSet<Appointment>,
}

impl Person {
    /// Start building a person with the given name and every other field empty.
    pub fn builder(name: Name) -> PersonBuilder {
        PersonBuilder::new(name)
    }

    /// A builder pre-filled with this person's fields.
    pub fn to_builder(&self) -> PersonBuilder {
        PersonBuilder {
            person: self.clone(),
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Field<Phone> {
        &self.phone
    }

    pub fn email(&self) -> &Field<Email> {
        &self.email
    }

    pub fn address(&self) -> &Field<Address> {
        &self.address
    }

    pub fn note(&self) -> &Field<Note> {
        &self.note
    }

    pub fn level(&self) -> &Field<Level> {
        &self.level
    }

    /// Read-only view of the tags.
    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Read-only view of the subjects.
    pub fn subjects(&self) -> &BTreeSet<Subject> {
        &self.subjects
    }

    /// Read-only view of the appointments, in week order.
    pub fn appointments(&self) -> &BTreeSet<Appointment> {
        &self.appointments
    }

    /// Returns true if both persons have the same name, ignoring case.
    ///
    /// This is the weaker notion of equality used for duplicate detection
    /// and lookups.
    pub fn is_same_person(&self, other: &Person) -> bool {
        std::ptr::eq(self, other) || self.name.is_same_name(&other.name)
    }

    pub fn with_name(&self, name: Name) -> Person {
        self.to_builder().name(name).build()
    }

    pub fn with_phone(&self, phone: impl Into<Field<Phone>>) -> Person {
        self.to_builder().phone(phone).build()
    }

    pub fn with_email(&self, email: impl Into<Field<Email>>) -> Person {
        self.to_builder().email(email).build()
    }

    pub fn with_address(&self, address: impl Into<Field<Address>>) -> Person {
        self.to_builder().address(address).build()
    }

    pub fn with_note(&self, note: impl Into<Field<Note>>) -> Person {
        self.to_builder().note(note).build()
    }

    pub fn with_level(&self, level: impl Into<Field<Level>>) -> Person {
        self.to_builder().level(level).build()
    }

    pub fn with_tags(&self, tags: impl IntoIterator<Item = Tag>) -> Person {
        self.to_builder().tags(tags).build()
    }

    pub fn with_subjects(&self, subjects: impl IntoIterator<Item = Subject>) -> Person {
        self.to_builder().subjects(subjects).build()
    }

    pub fn with_appointments(&self, appointments: impl IntoIterator<Item = Appointment>) -> Person {
        self.to_builder().appointments(appointments).build()
    }

    /// Render the person as ordered display sections.
    ///
    /// Sections: header, tags and subjects, details, appointments, notes,
    /// with [`SECTION_SEPARATOR`] between the blocks and `-` standing in for
    /// any empty value. Pure projection; joining the sections gives the
    /// full detail view.
    ///
    /// Every detail line ends in a newline, empty ones included (`-\n`), so
    /// the joined view never runs two details together.
    pub fn view_sections(&self) -> Vec<String> {
        let mut sections = Vec::with_capacity(14);

        sections.push(format!("{}\n", self.name.as_str().to_uppercase()));
        sections.push(format!(
            "\nTAGS: {}\n",
            join_or_placeholder(self.tags.iter().map(|t| format!("[{}]", t)), " ")
        ));
        sections.push(format!(
            "SUBJECTS: {}\n",
            join_or_placeholder(self.subjects.iter().map(Subject::to_string), ", ")
        ));
        sections.push(SECTION_SEPARATOR.to_string());

        sections.push("\nDETAILS:\n".to_string());
        sections.push(detail_line(&self.phone));
        sections.push(detail_line(&self.email));
        sections.push(detail_line(&self.address));
        sections.push(detail_line(&self.level));
        sections.push(SECTION_SEPARATOR.to_string());

        sections.push("\nAPPOINTMENTS:\n".to_string());
        sections.push(if self.appointments.is_empty() {
            format!("{}\n", EMPTY_PLACEHOLDER)
        } else {
            self.appointments
                .iter()
                .map(|a| format!("{}\n", a))
                .collect()
        });
        sections.push(SECTION_SEPARATOR.to_string());

        sections.push(format!("\nNOTES:\n{}", self.note.display_or_placeholder()));

        sections
    }
}

fn detail_line<T: FieldValue>(field: &Field<T>) -> String {
    format!("{}\n", field.display_or_placeholder())
}

fn join_or_placeholder(items: impl Iterator<Item = String>, sep: &str) -> String {
    let joined = items.collect::<Vec<_>>().join(sep);
    if joined.is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        joined
    }
}

fn format_set<T: fmt::Display>(items: &BTreeSet<T>) -> String {
    let inner = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", inner)
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Person{{name={}", self.name)?;
        let optional: [(&str, String); 5] = [
            ("phone", self.phone.to_display_string()),
            ("email", self.email.to_display_string()),
            ("address", self.address.to_display_string()),
            ("note", self.note.to_display_string()),
            ("level", self.level.to_display_string()),
        ];
        for (label, value) in optional.iter().filter(|(_, v)| !v.is_empty()) {
            write!(f, ", {}={}", label, value)?;
        }
        write!(
            f,
            ", tags={}, subjects={}, appointments={}}}",
            format_set(&self.tags),
            format_set(&self.subjects),
            format_set(&self.appointments)
        )
    }
}

/// Builder for [`Person`].
///
/// Only the name is required; unset fields stay empty. Collections passed to
/// the builder are copied into the person's own sets.
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn new(name: Name) -> Self {
        Self {
            person: Person {
                name,
                phone: Field::Empty,
                email: Field::Empty,
                address: Field::Empty,
                note: Field::Empty,
                level: Field::Empty,
                tags: BTreeSet::new(),
                subjects: BTreeSet::new(),
                appointments: BTreeSet::new(),
            },
        }
    }

    pub fn name(mut self, name: Name) -> Self {
        self.person.name = name;
        self
    }

    pub fn phone(mut self, phone: impl Into<Field<Phone>>) -> Self {
        self.person.phone = phone.into();
        self
    }

    pub fn email(mut self, email: impl Into<Field<Email>>) -> Self {
        self.person.email = email.into();
        self
    }

    pub fn address(mut self, address: impl Into<Field<Address>>) -> Self {
        self.person.address = address.into();
        self
    }

    pub fn note(mut self, note: impl Into<Field<Note>>) -> Self {
        self.person.note = note.into();
        self
    }

    pub fn level(mut self, level: impl Into<Field<Level>>) -> Self {
        self.person.level = level.into();
        self
    }

    /// Replace the tag set.
    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.person.tags = tags.into_iter().collect();
        self
    }

    /// Replace the subject set.
    pub fn subjects(mut self, subjects: impl IntoIterator<Item = Subject>) -> Self {
        self.person.subjects = subjects.into_iter().collect();
        self
    }

    /// Replace the appointment set.
    pub fn appointments(mut self, appointments: impl IntoIterator<Item = Appointment>) -> Self {
        self.person.appointments = appointments.into_iter().collect();
        self
    }

    pub fn build(self) -> Person {
        self.person
    }
}
