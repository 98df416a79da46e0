//! Person lookup by name, email, or phone.
//!
//! Exact matches on email and phone, keyword and fuzzy matches on names.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{
    MatchResult, MatchType, PersonMatcher, PersonQuery, EXACT_CONFIDENCE, KEYWORD_CONFIDENCE,
};
