//! Filter criteria: independent per-dimension constraints, AND-composed.
//!
//! An empty set or an absent range means "no restriction on this
//! dimension". Ranges are inclusive on both ends and are never
//! normalized: `min > max` simply matches nothing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, age: u32) -> bool {
        self.min <= age && age <= self.max
    }
}

/// Inclusive ISO-8601 date window compared as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn contains(&self, date: &str) -> bool {
        self.start.as_str() <= date && date <= self.end.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub regions: BTreeSet<String>,
    pub genders: BTreeSet<String>,
    pub categories: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub payment_methods: BTreeSet<String>,
    pub age_range: Option<AgeRange>,
    pub date_range: Option<DateRange>,
}

impl FilterCriteria {
    /// True when at least one dimension restricts the result.
    pub fn is_active(&self) -> bool {
        !self.regions.is_empty()
            || !self.genders.is_empty()
            || !self.categories.is_empty()
            || !self.tags.is_empty()
            || !self.payment_methods.is_empty()
            || self.age_range.is_some()
            || self.date_range.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Build a selection set from anything string-like.
pub fn selection<I, S>(values: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_inactive() {
        assert!(!FilterCriteria::default().is_active());
    }

    #[test]
    fn any_dimension_activates() {
        let c = FilterCriteria {
            age_range: Some(AgeRange::new(20, 40)),
            ..Default::default()
        };
        assert!(c.is_active());

        let c = FilterCriteria {
            tags: selection(["VIP"]),
            ..Default::default()
        };
        assert!(c.is_active());
    }

    #[test]
    fn inverted_ranges_contain_nothing() {
        let r = AgeRange::new(40, 20);
        assert!((0..=100).all(|a| !r.contains(a)));

        let d = DateRange::new("2023-12-31", "2023-01-01");
        assert!(!d.contains("2023-06-01"));
        assert!(!d.contains("2023-01-01"));
    }

    #[test]
    fn ranges_are_inclusive() {
        let r = AgeRange::new(20, 40);
        assert!(r.contains(20) && r.contains(40));
        assert!(!r.contains(19) && !r.contains(41));

        let d = DateRange::new("2023-01-01", "2023-01-31");
        assert!(d.contains("2023-01-01") && d.contains("2023-01-31"));
        assert!(!d.contains("2023-02-01"));
    }
}
