//! Search Term
//!
//! Free-text query tracker and the name/email match predicate.

use crate::record::Record;

/// Owns the current search term, stored exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchTermTracker {
    term: String,
}

impl SearchTermTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn set_term(&mut self, raw: impl Into<String>) {
        self.term = raw.into();
    }
}

/// Case-insensitive substring match on name or email.
///
/// An empty term matches every record. The term is not trimmed.
pub fn matches(record: &Record, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record.name.to_lowercase().contains(&needle) || record.email.to_lowercase().contains(&needle)
}
