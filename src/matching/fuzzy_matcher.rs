//! Person lookup for the address book.
//!
//! This module provides:
//! - Exact matching on email and phone
//! - Keyword matching against the words of a name
//! - Fuzzy whole-name matching using Levenshtein distance
//! - Confidence scoring (0-100 scale)

use crate::domain::FieldValue;
use crate::models::Person;

/// Confidence for an exact email or phone match.
pub const EXACT_CONFIDENCE: u8 = 100;

/// Confidence for a keyword equal to one word of the name.
pub const KEYWORD_CONFIDENCE: u8 = 90;

/// A match result borrowing the matched person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult<'a> {
    pub person: &'a Person,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    ExactEmail,
    ExactPhone,

    /// One of the query keywords is a word of the name
    NameKeyword,

    /// Approximate match on the whole name
    FuzzyName,
}

/// Search parameters for [`PersonMatcher::find_matches`].
#[derive(Debug, Clone, Default)]
pub struct PersonQuery {
    /// Name or name keywords, separated by whitespace
    pub name: Option<String>,

    pub email: Option<String>,

    pub phone: Option<String>,

    /// Fuzzy name matches below this score are dropped
    pub min_confidence: u8,
}

impl PersonQuery {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    pub fn by_phone(phone: impl Into<String>) -> Self {
        Self {
            phone: Some(phone.into()),
            ..Self::default()
        }
    }
}

/// Person matcher with fuzzy and exact matching.
#[derive(Debug, Default)]
pub struct PersonMatcher;

impl PersonMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Find persons matching `query`, sorted by confidence (highest first)
    /// and then by name, at most `max_results`.
    ///
    /// Each person appears at most once, with its strongest match.
    pub fn find_matches<'a>(
        &self,
        query: &PersonQuery,
        persons: &'a [Person],
        max_results: usize,
    ) -> Vec<MatchResult<'a>> {
        let mut results: Vec<MatchResult<'a>> = persons
            .iter()
            .filter_map(|person| self.best_match(query, person))
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.person.name().cmp(b.person.name()))
        });
        results.truncate(max_results);

        results
    }

    fn best_match<'a>(&self, query: &PersonQuery, person: &'a Person) -> Option<MatchResult<'a>> {
        let result = |confidence, match_type| MatchResult {
            person,
            confidence,
            match_type,
        };

        if let Some(email) = &query.email {
            if Self::match_email(email, person) {
                return Some(result(EXACT_CONFIDENCE, MatchType::ExactEmail));
            }
        }

        if let Some(phone) = &query.phone {
            if Self::match_phone(phone, person) {
                return Some(result(EXACT_CONFIDENCE, MatchType::ExactPhone));
            }
        }

        let name = query.name.as_deref()?;
        if Self::match_keywords(name, person) {
            return Some(result(KEYWORD_CONFIDENCE, MatchType::NameKeyword));
        }

        let confidence = Self::calculate_fuzzy_score(
            &Self::normalize_name(name),
            &Self::normalize_name(person.name().as_str()),
        );
        if confidence > 0 && confidence >= query.min_confidence {
            Some(result(confidence, MatchType::FuzzyName))
        } else {
            None
        }
    }

    fn match_email(query_email: &str, person: &Person) -> bool {
        !person.email().is_empty()
            && Self::normalize_email(&person.email().to_display_string())
                == Self::normalize_email(query_email)
    }

    fn match_phone(query_phone: &str, person: &Person) -> bool {
        let query = Self::normalize_phone(query_phone);
        !query.is_empty() && person.phone().to_display_string() == query
    }

    /// True if any whitespace-separated keyword equals a word of the name,
    /// ignoring case.
    fn match_keywords(keywords: &str, person: &Person) -> bool {
        let name = person.name().as_str();
        keywords.split_whitespace().any(|keyword| {
            name.split_whitespace()
                .any(|word| word.eq_ignore_ascii_case(keyword))
        })
    }

    /// Score from 0 to 85 using substring containment and Levenshtein
    /// distance. Returns 0 when the strings are too different.
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 85;
        }

        if target.contains(query) {
            let ratio = query.len() as f64 / target.len() as f64;
            return (60.0 * ratio + 20.0) as u8;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 80.0) as u8
    }

    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // single rolling row
        let mut row: Vec<usize> = (0..=s2_chars.len()).collect();
        for (i, c1) in s1_chars.iter().enumerate() {
            let mut diagonal = row[0];
            row[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
                diagonal = row[j + 1];
                row[j + 1] = next;
            }
        }

        row[s2_chars.len()]
    }

    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Keep only the digits.
    pub fn normalize_phone(phone: &str) -> String {
        phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Lowercase with whitespace collapsed.
    pub fn normalize_name(name: &str) -> String {
        name.split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Email, Name, Phone};

    fn person(name: &str, email: Option<&str>, phone: Option<&str>) -> Person {
        let mut builder = Person::builder(Name::new(name).unwrap());
        if let Some(email) = email {
            builder = builder.email(Email::new(email).unwrap());
        }
        if let Some(phone) = phone {
            builder = builder.phone(Phone::new(phone).unwrap());
        }
        builder.build()
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(
            PersonMatcher::normalize_email("  Alice@Example.COM  "),
            "alice@example.com"
        );
    }

    #[test]
    fn test_normalize_phone() {
        assert_eq!(PersonMatcher::normalize_phone("9435 2758"), "94352758");
        assert_eq!(PersonMatcher::normalize_phone("+65-9435"), "659435");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(PersonMatcher::normalize_name("  Alice   PAULINE "), "alice pauline");
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(PersonMatcher::levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(PersonMatcher::levenshtein_distance("", "abc"), 3);
        assert_eq!(PersonMatcher::levenshtein_distance("same", "same"), 0);
    }

    #[test]
    fn test_fuzzy_score() {
        assert_eq!(PersonMatcher::calculate_fuzzy_score("alice", "alice"), 85);
        assert!(PersonMatcher::calculate_fuzzy_score("alce pauline", "alice pauline") >= 70);
        assert!(PersonMatcher::calculate_fuzzy_score("pau", "alice pauline") >= 20);
        assert_eq!(PersonMatcher::calculate_fuzzy_score("zzz", "alice"), 0);
        assert_eq!(PersonMatcher::calculate_fuzzy_score("", "alice"), 0);
    }

    #[test]
    fn test_find_by_email() {
        let persons = vec![
            person("Alice Pauline", Some("alice@example.com"), None),
            person("Benson Meier", Some("johnd@example.com"), None),
        ];

        let results =
            PersonMatcher::new().find_matches(&PersonQuery::by_email("ALICE@example.com"), &persons, 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].person, &persons[0]);
        assert_eq!(results[0].confidence, EXACT_CONFIDENCE);
        assert_eq!(results[0].match_type, MatchType::ExactEmail);
    }

    #[test]
    fn test_find_by_phone() {
        let persons = vec![
            person("Alice Pauline", None, Some("94351253")),
            person("Benson Meier", None, Some("98765432")),
        ];

        let results =
            PersonMatcher::new().find_matches(&PersonQuery::by_phone("9876 5432"), &persons, 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].person.name().as_str(), "Benson Meier");
        assert_eq!(results[0].match_type, MatchType::ExactPhone);
    }

    #[test]
    fn test_empty_fields_never_match_exactly() {
        let persons = vec![person("Alice Pauline", None, None)];
        let matcher = PersonMatcher::new();
        assert!(matcher
            .find_matches(&PersonQuery::by_phone("-"), &persons, 5)
            .is_empty());
        assert!(matcher
            .find_matches(&PersonQuery::by_email(""), &persons, 5)
            .is_empty());
    }

    #[test]
    fn test_find_by_keyword() {
        let persons = vec![
            person("Alice Pauline", None, None),
            person("Benson Meier", None, None),
            person("Daniel Meier", None, None),
        ];

        let results =
            PersonMatcher::new().find_matches(&PersonQuery::by_name("meier"), &persons, 5);
        assert_eq!(results.len(), 2);
        assert!(results
            .iter()
            .all(|r| r.match_type == MatchType::NameKeyword && r.confidence == KEYWORD_CONFIDENCE));
        // ties are ordered by name
        assert_eq!(results[0].person.name().as_str(), "Benson Meier");
        assert_eq!(results[1].person.name().as_str(), "Daniel Meier");
    }

    #[test]
    fn test_keyword_outranks_fuzzy() {
        let persons = vec![
            person("Alic Smith", None, None),
            person("Alice Pauline", None, None),
        ];

        let results =
            PersonMatcher::new().find_matches(&PersonQuery::by_name("alice"), &persons, 5);
        assert_eq!(results[0].person.name().as_str(), "Alice Pauline");
        assert_eq!(results[0].match_type, MatchType::NameKeyword);
    }

    #[test]
    fn test_fuzzy_typo_tolerance() {
        let persons = vec![person("Fiona Kunz", None, None)];
        let results =
            PersonMatcher::new().find_matches(&PersonQuery::by_name("fiona kuns"), &persons, 5);
        // "fiona" is an exact keyword hit
        assert_eq!(results[0].match_type, MatchType::NameKeyword);

        let results =
            PersonMatcher::new().find_matches(&PersonQuery::by_name("fionakunz"), &persons, 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].match_type, MatchType::FuzzyName);
    }

    #[test]
    fn test_min_confidence_threshold() {
        let persons = vec![person("Elle Meyer", None, None)];
        let mut query = PersonQuery::by_name("ellemeier");

        let low = PersonMatcher::new().find_matches(&query, &persons, 5);
        query.min_confidence = 95;
        let high = PersonMatcher::new().find_matches(&query, &persons, 5);

        assert!(high.len() <= low.len());
        assert!(high.is_empty());
    }

    #[test]
    fn test_max_results_limit() {
        let persons = vec![
            person("Ann Lee", None, None),
            person("Ann Tan", None, None),
            person("Ann Ong", None, None),
        ];
        let results =
            PersonMatcher::new().find_matches(&PersonQuery::by_name("ann"), &persons, 2);
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_empty_query_matches_nothing() {
        let persons = vec![person("Alice Pauline", None, None)];
        assert!(PersonMatcher::new()
            .find_matches(&PersonQuery::default(), &persons, 5)
            .is_empty());
    }
}
