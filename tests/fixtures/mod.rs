//! Test fixtures and sample data for integration tests.
//!
//! This module provides a set of typical persons and helpers for building
//! address books and field input from them.

use tutorbook::domain::{Address, Appointment, Email, Name, Phone, Tag};
use tutorbook::{AddressBook, FieldInput, FieldKind, Person};

fn base(name: &str, phone: &str, email: &str, address: &str) -> tutorbook::PersonBuilder {
    Person::builder(Name::new(name).unwrap())
        .phone(Phone::new(phone).unwrap())
        .email(Email::new(email).unwrap())
        .address(Address::new(address).unwrap())
}

fn tags(names: &[&str]) -> Vec<Tag> {
    names.iter().map(|t| Tag::new(*t).unwrap()).collect()
}

/// A person with no appointments.
pub fn alice() -> Person {
    base(
        "Alice Pauline",
        "94351253",
        "alice@example.com",
        "123, Jurong West Ave 6, #08-111",
    )
    .tags(tags(&["friends"]))
    .build()
}

/// A person with one appointment on Friday 10:00-11:00.
pub fn benson() -> Person {
    base(
        "Benson Meier",
        "98765432",
        "johnd@example.com",
        "311, Clementi Ave 2, #02-25",
    )
    .tags(tags(&["owesMoney", "friends"]))
    .appointments([friday_ten_to_eleven()])
    .build()
}

#[allow(dead_code)]
pub fn carl() -> Person {
    base("Carl Kurz", "95352563", "heinz@example.com", "wall street").build()
}

#[allow(dead_code)]
pub fn daniel() -> Person {
    base("Daniel Meier", "87652533", "cornelia@example.com", "10th street")
        .tags(tags(&["friends"]))
        .appointments([Appointment::new("Monday 16:00-17:30 Algebra").unwrap()])
        .build()
}

#[allow(dead_code)]
pub fn elle() -> Person {
    base("Elle Meyer", "9482224", "werner@example.com", "michegan ave").build()
}

#[allow(dead_code)]
pub fn fiona() -> Person {
    base("Fiona Kunz", "9482427", "lydia@example.com", "little tokyo")
        .appointments([Appointment::new("Sunday 9-10").unwrap()])
        .build()
}

#[allow(dead_code)]
pub fn george() -> Person {
    base("George Best", "9482442", "anna@example.com", "4th street").build()
}

pub fn friday_ten_to_eleven() -> Appointment {
    Appointment::new("Friday 10-11").unwrap()
}

#[allow(dead_code)]
pub fn typical_persons() -> Vec<Person> {
    vec![
        alice(),
        benson(),
        carl(),
        daniel(),
        elle(),
        fiona(),
        george(),
    ]
}

/// An address book holding all the typical persons.
#[allow(dead_code)]
pub fn typical_address_book() -> AddressBook {
    let mut book = AddressBook::new();
    for person in typical_persons() {
        book.add_person(person).unwrap();
    }
    book
}

/// Field input as the command layer would produce for `person`.
#[allow(dead_code)]
pub fn field_input_for(person: &Person) -> FieldInput {
    use tutorbook::FieldValue;

    let mut input = FieldInput::new().with(FieldKind::Name, person.name().as_str());
    let optional = [
        (FieldKind::Phone, person.phone().to_display_string()),
        (FieldKind::Email, person.email().to_display_string()),
        (FieldKind::Address, person.address().to_display_string()),
        (FieldKind::Note, person.note().to_display_string()),
        (FieldKind::Level, person.level().to_display_string()),
    ];
    for (kind, value) in optional {
        if !value.is_empty() {
            input.push(kind, value);
        }
    }
    for tag in person.tags() {
        input.push(FieldKind::Tag, tag.as_str());
    }
    for subject in person.subjects() {
        input.push(FieldKind::Subject, subject.as_str());
    }
    for appointment in person.appointments() {
        input.push(FieldKind::Appointment, appointment.to_string());
    }
    input
}
