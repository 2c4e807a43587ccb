//! Free-text search over customer name and phone number.

use salesq_core::record::Record;

use crate::traits::Predicate;

/// A prepared search. Blank input yields an inactive search that matches
/// everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Trimmed, lowercased.
    needle: String,
    /// `needle` with all whitespace removed, for phone matching.
    digits: String,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        let needle = text.trim().to_lowercase();
        let digits = strip_whitespace(&needle);
        Self { needle, digits }
    }

    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }
}

impl Predicate for SearchQuery {
    fn name(&self) -> &'static str {
        "search"
    }

    fn matches(&self, record: &Record) -> bool {
        if !self.is_active() {
            return true;
        }
        record.customer_name.to_lowercase().contains(&self.needle)
            || strip_whitespace(&record.phone_number).contains(&self.digits)
    }
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}
