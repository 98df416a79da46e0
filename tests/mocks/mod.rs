//! Test doubles for collaborators of the address book.

pub mod json_snapshot_store;

#[allow(unused_imports)]
pub use json_snapshot_store::JsonSnapshotStore;
