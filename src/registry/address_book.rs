//! The address book registry.
//!
//! `AddressBook` owns the canonical, ordered list of persons and keeps two
//! invariants on every mutation:
//! - no two stored persons share an identity (see [`Person::is_same_person`]);
//! - the appointment list is exactly the appointments of the stored persons.
//!
//! Under [`OverlapPolicy::Reject`] it also refuses persons whose appointments
//! overlap any appointment already scheduled for someone else.
//!
//! Every operation validates before it mutates, so a returned error leaves the
//! address book untouched.

use crate::config::Config;
use crate::domain::Appointment;
use crate::error::{RegistryError, RegistryResult};
use crate::matching::{MatchResult, PersonMatcher, PersonQuery};
use crate::models::Person;
use crate::parser::Index;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Read-only view of an address book.
///
/// This is the snapshot seam: persistence reads through it, and
/// [`AddressBook::reset_data`] accepts any implementation.
pub trait ReadOnlyAddressBook {
    /// Stored persons, in list order.
    fn person_list(&self) -> &[Person];

    /// All appointments of all stored persons.
    fn appointment_list(&self) -> &[Appointment];
}

/// Whether appointments of different persons may overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Overlaps are allowed; [`AddressBook::appointments_overlap`] is a query only.
    #[default]
    Allow,
    /// Adding or editing a person fails if it would create an overlap.
    Reject,
}

impl FromStr for OverlapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(Self::Allow),
            "reject" => Ok(Self::Reject),
            other => Err(format!("Must be 'allow' or 'reject', got: {}", other)),
        }
    }
}

/// Every appointment of every person, in person order.
///
/// The address book never stores appointments independently; it calls this
/// after each change to its persons.
pub fn derive_appointments(persons: &[Person]) -> Vec<Appointment> {
    persons
        .iter()
        .flat_map(|p| p.appointments().iter().cloned())
        .collect()
}

/// The registry of persons.
///
/// # Example
///
/// ```
/// use tutorbook::domain::{Appointment, Name};
/// use tutorbook::models::Person;
/// use tutorbook::registry::{AddressBook, ReadOnlyAddressBook};
///
/// let mut book = AddressBook::new();
/// let benson = Person::builder(Name::new("Benson Meier").unwrap())
///     .appointments([Appointment::new("Friday 10-11").unwrap()])
///     .build();
///
/// book.add_person(benson.clone()).unwrap();
/// assert!(book.has_person(&benson));
/// assert_eq!(book.appointment_list().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    persons: Vec<Person>,
    appointments: Vec<Appointment>,
    overlap_policy: OverlapPolicy,
}

impl AddressBook {
    /// Create an empty address book that allows overlapping appointments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty address book with the given overlap policy.
    pub fn with_overlap_policy(overlap_policy: OverlapPolicy) -> Self {
        Self {
            overlap_policy,
            ..Self::default()
        }
    }

    /// Create an empty address book using the configured overlap policy.
    pub fn from_config(config: &Config) -> Self {
        Self::with_overlap_policy(config.overlap_policy)
    }

    /// Create an address book holding a copy of `source`.
    pub fn from_snapshot<R>(source: &R) -> RegistryResult<Self>
    where
        R: ReadOnlyAddressBook + ?Sized,
    {
        let mut book = Self::new();
        book.reset_data(source)?;
        Ok(book)
    }

    pub fn overlap_policy(&self) -> OverlapPolicy {
        self.overlap_policy
    }

    /// Change the overlap policy. Existing persons are not re-checked.
    pub fn set_overlap_policy(&mut self, overlap_policy: OverlapPolicy) {
        self.overlap_policy = overlap_policy;
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// The person shown at `index`, if the index is in range.
    pub fn person_at(&self, index: Index) -> Option<&Person> {
        self.persons.get(index.zero_based())
    }

    /// Returns true if a person with the same identity as `person` is stored.
    pub fn has_person(&self, person: &Person) -> bool {
        self.position_of(person).is_some()
    }

    /// Append `person` to the list.
    ///
    /// # Errors
    ///
    /// - `RegistryError::DuplicatePerson` if a person with the same identity
    ///   is already stored.
    /// - `RegistryError::AppointmentOverlap` under [`OverlapPolicy::Reject`]
    ///   if one of its appointments overlaps another scheduled appointment.
    pub fn add_person(&mut self, person: Person) -> RegistryResult<()> {
        if self.has_person(&person) {
            warn!(name = %person.name(), "Rejected duplicate person");
            return Err(RegistryError::DuplicatePerson);
        }
        self.check_overlaps(&person, None)?;

        debug!(
            name = %person.name(),
            appointments = person.appointments().len(),
            "Person added"
        );
        self.persons.push(person);
        self.refresh_appointments();
        Ok(())
    }

    /// Remove the stored person with the same identity as `person`.
    ///
    /// Returns the removed person.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::PersonNotFound` if no such person is stored.
    pub fn remove_person(&mut self, person: &Person) -> RegistryResult<Person> {
        let position = self
            .position_of(person)
            .ok_or(RegistryError::PersonNotFound)?;

        let removed = self.persons.remove(position);
        self.refresh_appointments();
        debug!(name = %removed.name(), "Person removed");
        Ok(removed)
    }

    /// Replace the stored person matching `target` with `edited`, keeping its
    /// position in the list.
    ///
    /// # Errors
    ///
    /// - `RegistryError::PersonNotFound` if `target` is not stored.
    /// - `RegistryError::DuplicatePerson` if `edited` has the identity of a
    ///   different stored person.
    /// - `RegistryError::AppointmentOverlap` under [`OverlapPolicy::Reject`].
    pub fn set_person(&mut self, target: &Person, edited: Person) -> RegistryResult<()> {
        let position = self
            .position_of(target)
            .ok_or(RegistryError::PersonNotFound)?;

        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != position && p.is_same_person(&edited));
        if collides {
            warn!(name = %edited.name(), "Rejected edit colliding with another person");
            return Err(RegistryError::DuplicatePerson);
        }
        self.check_overlaps(&edited, Some(position))?;

        debug!(
            from = %self.persons[position].name(),
            to = %edited.name(),
            "Person replaced"
        );
        self.persons[position] = edited;
        self.refresh_appointments();
        Ok(())
    }

    /// Replace the whole person list.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicatePerson` if `persons` contains two
    /// persons with the same identity; the address book is then unchanged.
    pub fn set_persons(&mut self, persons: Vec<Person>) -> RegistryResult<()> {
        if !persons_are_unique(&persons) {
            warn!(count = persons.len(), "Rejected person list with duplicates");
            return Err(RegistryError::DuplicatePerson);
        }

        self.persons = persons;
        self.refresh_appointments();
        Ok(())
    }

    /// Replace all data with a copy of `source`. All or nothing.
    ///
    /// Only the persons are taken from `source`; the appointment list is
    /// derived from them again, whatever `source` reports.
    pub fn reset_data<R>(&mut self, source: &R) -> RegistryResult<()>
    where
        R: ReadOnlyAddressBook + ?Sized,
    {
        self.set_persons(source.person_list().to_vec())?;
        info!(persons = self.persons.len(), "Address book data reset");
        Ok(())
    }

    /// Returns true if `appointment` overlaps any stored appointment.
    pub fn appointments_overlap(&self, appointment: &Appointment) -> bool {
        self.appointments.iter().any(|a| a.overlaps(appointment))
    }

    /// Persons matching `query`, best match first, at most `max_results`.
    pub fn find_persons(&self, query: &PersonQuery, max_results: usize) -> Vec<MatchResult<'_>> {
        PersonMatcher::new().find_matches(query, &self.persons, max_results)
    }

    /// [`AddressBook::find_persons`] with the configured result limit and
    /// fuzzy confidence threshold. The query's own threshold applies if it
    /// is stricter.
    pub fn find_persons_with(&self, config: &Config, query: &PersonQuery) -> Vec<MatchResult<'_>> {
        let query = PersonQuery {
            min_confidence: query.min_confidence.max(config.match_confidence_threshold),
            ..query.clone()
        };
        self.find_persons(&query, config.max_match_results)
    }

    fn position_of(&self, person: &Person) -> Option<usize> {
        self.persons.iter().position(|p| p.is_same_person(person))
    }

    fn refresh_appointments(&mut self) {
        self.appointments = derive_appointments(&self.persons);
    }

    /// Under `Reject`, fail if `incoming` overlaps itself or any person other
    /// than the one at `replacing`.
    fn check_overlaps(&self, incoming: &Person, replacing: Option<usize>) -> RegistryResult<()> {
        if self.overlap_policy == OverlapPolicy::Allow {
            return Ok(());
        }

        let own: Vec<&Appointment> = incoming.appointments().iter().collect();
        for (i, first) in own.iter().enumerate() {
            if let Some(second) = own[i + 1..].iter().find(|a| first.overlaps(a)) {
                return Err(overlap_error(first, second));
            }
        }

        let scheduled = self
            .persons
            .iter()
            .enumerate()
            .filter(|(i, _)| Some(*i) != replacing)
            .flat_map(|(_, p)| p.appointments());
        for existing in scheduled {
            if let Some(clash) = own.iter().find(|a| a.overlaps(existing)) {
                return Err(overlap_error(existing, clash));
            }
        }

        Ok(())
    }
}

fn overlap_error(existing: &Appointment, incoming: &Appointment) -> RegistryError {
    warn!(%existing, %incoming, "Rejected overlapping appointment");
    RegistryError::AppointmentOverlap {
        existing: existing.clone(),
        incoming: incoming.clone(),
    }
}

fn persons_are_unique(persons: &[Person]) -> bool {
    let mut seen = HashSet::with_capacity(persons.len());
    persons.iter().all(|p| seen.insert(p.name().identity_key()))
}

impl ReadOnlyAddressBook for AddressBook {
    fn person_list(&self) -> &[Person] {
        &self.persons
    }

    fn appointment_list(&self) -> &[Appointment] {
        &self.appointments
    }
}

// Equality is over the stored persons; the policy is configuration.
impl PartialEq for AddressBook {
    fn eq(&self, other: &Self) -> bool {
        self.persons == other.persons
    }
}

impl Eq for AddressBook {}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let persons = self
            .persons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "AddressBook{{persons=[{}]}}", persons)
    }
}
