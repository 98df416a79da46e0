//! In-memory JSON persistence for address book snapshots.
//!
//! Stands in for a storage collaborator: it saves through
//! `ReadOnlyAddressBook` and hands the loaded snapshot back to
//! `AddressBook::reset_data`.

use serde::{Deserialize, Serialize};
use tutorbook::domain::Appointment;
use tutorbook::registry::derive_appointments;
use tutorbook::{Person, ReadOnlyAddressBook};

#[derive(Debug, Serialize, Deserialize)]
struct SnapshotFile {
    persons: Vec<Person>,
}

/// A JSON document holding the persons of one address book.
#[derive(Debug, Default)]
pub struct JsonSnapshotStore {
    json: Option<String>,
    persons: Vec<Person>,
    appointments: Vec<Appointment>,
}

#[allow(dead_code)]
impl JsonSnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize the persons of `book` and keep the JSON text.
    pub fn save(&mut self, book: &impl ReadOnlyAddressBook) {
        let file = SnapshotFile {
            persons: book.person_list().to_vec(),
        };
        self.json = Some(serde_json::to_string_pretty(&file).expect("snapshot serializes"));
    }

    /// Store raw JSON text, as if edited by hand on disk.
    pub fn write_raw(&mut self, json: impl Into<String>) {
        self.json = Some(json.into());
    }

    pub fn raw(&self) -> Option<&str> {
        self.json.as_deref()
    }

    /// Parse the stored JSON. Invalid field values fail here, before any
    /// address book is touched.
    pub fn load(&mut self) -> serde_json::Result<&Self> {
        let json = self.json.as_deref().unwrap_or(r#"{"persons":[]}"#);
        let file: SnapshotFile = serde_json::from_str(json)?;
        self.appointments = derive_appointments(&file.persons);
        self.persons = file.persons;
        Ok(self)
    }
}

impl ReadOnlyAddressBook for JsonSnapshotStore {
    fn person_list(&self) -> &[Person] {
        &self.persons
    }

    fn appointment_list(&self) -> &[Appointment] {
        &self.appointments
    }
}
