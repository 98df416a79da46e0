//! Data models for the tutorbook registry.
//!
//! This module contains the `Person` aggregate composed from the validated
//! value objects in [`crate::domain`].

pub mod person;

pub use person::{Person, PersonBuilder, SECTION_SEPARATOR};
