//! The person registry.
//!
//! [`AddressBook`] is the single owner of persons and of the appointment list
//! derived from them. Snapshots are read through [`ReadOnlyAddressBook`].

pub mod address_book;

pub use address_book::{derive_appointments, AddressBook, OverlapPolicy, ReadOnlyAddressBook};
