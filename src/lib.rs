//! Tutorbook - the core of a personal address book for private tutors.
//!
//! This library validates contact details typed by a tutor, builds person
//! records from them, and keeps an address book of students with their
//! weekly lesson appointments.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, email, level, ...) and appointments
//! - **parser**: Raw field text to domain values, and person construction from field input
//! - **models**: The `Person` record and its display sections
//! - **registry**: The `AddressBook` with its uniqueness and appointment invariants
//! - **matching**: Person lookup by name keywords, fuzzy name, email, or phone
//! - **error**: Error types for parsing, registry, and configuration failures
//! - **config**: Configuration from environment variables
//! - **logging**: `tracing` subscriber setup

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod matching;
pub mod models;
pub mod parser;
pub mod registry;

pub use config::Config;
pub use domain::{Appointment, Field, FieldValue, ValidationError};
pub use error::{ConfigError, ParseError, RegistryError};
pub use matching::{MatchResult, MatchType, PersonMatcher, PersonQuery};
pub use models::{Person, PersonBuilder};
pub use parser::{parse_index, parse_person, FieldInput, FieldKind, Index};
pub use registry::{AddressBook, OverlapPolicy, ReadOnlyAddressBook};
