//! Search/filter engine
//!
//! Builds the predicate that derives the filtered view from the canonical
//! roster and a free-text search term. Matching is substring, not prefix or
//! fuzzy: a participant matches when their name contains the term
//! (case-insensitive) or their stringified id contains it.

use crate::models::Participant;

/// A normalized, active search filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    /// Normalize a raw term into a filter
    ///
    /// Trims and case-folds the input; returns `None` for an empty term,
    /// which callers treat as "clear the search".
    pub fn new(term: &str) -> Option<Self> {
        let normalized = term.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self { term: normalized })
        }
    }

    /// The normalized term
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Whether a participant belongs to the filtered view
    pub fn matches(&self, participant: &Participant) -> bool {
        participant.name.to_lowercase().contains(&self.term)
            || participant.id.to_string().contains(&self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participant(id: i64, name: &str) -> Participant {
        Participant {
            id,
            name: name.to_string(),
            degree_programme: String::new(),
            email: String::new(),
            whatsapp: String::new(),
            lunch_type: String::new(),
            payment_status: String::new(),
            living_district: String::new(),
            attended: false,
            remarks: String::new(),
        }
    }

    #[test]
    fn test_empty_term_means_clear() {
        assert!(SearchFilter::new("").is_none());
        assert!(SearchFilter::new("   ").is_none());
    }

    #[test]
    fn test_term_is_normalized() {
        let filter = SearchFilter::new("  AliCE ").unwrap();
        assert_eq!(filter.term(), "alice");
    }

    #[test]
    fn test_name_match_is_case_insensitive_substring() {
        let filter = SearchFilter::new("ali").unwrap();
        assert!(filter.matches(&participant(1, "Alice")));
        assert!(filter.matches(&participant(2, "NATALIA")));
        assert!(!filter.matches(&participant(3, "Bob")));
    }

    #[test]
    fn test_id_match_is_substring_of_digits() {
        let filter = SearchFilter::new("23").unwrap();
        assert!(filter.matches(&participant(23, "Bob")));
        assert!(filter.matches(&participant(123, "Bob")));
        assert!(filter.matches(&participant(234, "Bob")));
        assert!(!filter.matches(&participant(45, "Bob")));
    }
}
