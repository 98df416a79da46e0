//! Integration tests for finding persons in an address book.
//!
//! These tests validate:
//! - Exact email and phone lookups
//! - Keyword lookups in the style of a `find` command
//! - Typo tolerance and the configured confidence threshold

use tutorbook::{Config, MatchType, PersonQuery};

mod fixtures;
use fixtures::*;

#[test]
fn test_find_by_keyword_returns_every_matching_person() {
    let book = typical_address_book();

    let results = book.find_persons(&PersonQuery::by_name("Meier"), 10);
    let names: Vec<&str> = results
        .iter()
        .take_while(|r| r.match_type == MatchType::NameKeyword)
        .map(|r| r.person.name().as_str())
        .collect();
    assert_eq!(names, vec!["Benson Meier", "Daniel Meier"]);
}

#[test]
fn test_find_with_several_keywords() {
    let book = typical_address_book();

    let results = book.find_persons(&PersonQuery::by_name("kurz elle"), 10);
    let names: Vec<&str> = results
        .iter()
        .filter(|r| r.match_type == MatchType::NameKeyword)
        .map(|r| r.person.name().as_str())
        .collect();
    assert_eq!(names, vec!["Carl Kurz", "Elle Meyer"]);
}

#[test]
fn test_find_by_email_and_phone() {
    let book = typical_address_book();

    let results = book.find_persons(&PersonQuery::by_email("JohnD@example.com"), 10);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].person, &benson());
    assert_eq!(results[0].match_type, MatchType::ExactEmail);

    let results = book.find_persons(&PersonQuery::by_phone("9435 1253"), 10);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].person, &alice());
    assert_eq!(results[0].match_type, MatchType::ExactPhone);
}

#[test]
fn test_find_tolerates_typos() {
    let book = typical_address_book();

    let results = book.find_persons(&PersonQuery::by_name("Georg Bestt"), 10);
    assert!(!results.is_empty());
    assert_eq!(results[0].person, &george());
    assert_eq!(results[0].match_type, MatchType::FuzzyName);
}

#[test]
fn test_find_respects_configured_limits() {
    let book = typical_address_book();
    let config = Config {
        max_match_results: 1,
        match_confidence_threshold: 99,
        ..Config::default()
    };

    // keyword hits are not subject to the fuzzy threshold
    let results = book.find_persons_with(&config, &PersonQuery::by_name("meier"));
    assert_eq!(results.len(), 1);

    let results = book.find_persons_with(&config, &PersonQuery::by_name("Georg Bestt"));
    assert!(results.is_empty());

    let results = book.find_persons_with(&Config::default(), &PersonQuery::by_name("Georg Bestt"));
    assert_eq!(results[0].person, &george());
}
