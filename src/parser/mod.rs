//! Parsing of raw field text into domain values and persons.
//!
//! - **value_parser**: per-field parsers with trim and blank-to-empty rules
//! - **field_input**: the field-kind keyed input handed over by the command
//!   layer, and [`parse_person`] built on top of it

pub mod field_input;
pub mod value_parser;

pub use field_input::{parse_person, FieldInput, FieldKind};
pub use value_parser::{
    parse_address, parse_appointment, parse_appointments, parse_email, parse_index, parse_level,
    parse_name, parse_note, parse_phone, parse_subject, parse_subjects, parse_tag, parse_tags,
    Index,
};
