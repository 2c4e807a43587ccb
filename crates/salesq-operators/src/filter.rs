//! Filter stage: one predicate per active criteria dimension, AND-composed.
//!
//! Inactive dimensions (empty selection, absent range) contribute no
//! predicate at all, so they are the identity on the input.

use std::collections::BTreeSet;

use salesq_core::criteria::{AgeRange, DateRange, FilterCriteria};
use salesq_core::record::Record;

use crate::traits::{select_matching, Predicate};

/// Single-valued categorical columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Region,
    Gender,
    Category,
    PaymentMethod,
}

impl Dimension {
    pub fn value<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            Dimension::Region => &record.customer_region,
            Dimension::Gender => &record.gender,
            Dimension::Category => &record.product_category,
            Dimension::PaymentMethod => &record.payment_method,
        }
    }
}

/// Record value must be one of the selected values.
#[derive(Debug, Clone)]
pub struct MemberOf {
    pub dimension: Dimension,
    pub allowed: BTreeSet<String>,
}

impl Predicate for MemberOf {
    fn name(&self) -> &'static str {
        match self.dimension {
            Dimension::Region => "region",
            Dimension::Gender => "gender",
            Dimension::Category => "category",
            Dimension::PaymentMethod => "payment_method",
        }
    }

    fn matches(&self, record: &Record) -> bool {
        self.allowed.contains(self.dimension.value(record))
    }
}

/// At least one record tag is selected. Untagged records never pass.
#[derive(Debug, Clone)]
pub struct AnyTag {
    pub selected: BTreeSet<String>,
}

impl Predicate for AnyTag {
    fn name(&self) -> &'static str {
        "tags"
    }

    fn matches(&self, record: &Record) -> bool {
        self.selected.iter().any(|t| record.has_tag(t))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AgeWithin(pub AgeRange);

impl Predicate for AgeWithin {
    fn name(&self) -> &'static str {
        "age"
    }

    fn matches(&self, record: &Record) -> bool {
        self.0.contains(record.age)
    }
}

#[derive(Debug, Clone)]
pub struct DateWithin(pub DateRange);

impl Predicate for DateWithin {
    fn name(&self) -> &'static str {
        "date"
    }

    fn matches(&self, record: &Record) -> bool {
        self.0.contains(&record.date)
    }
}

/// The compiled filter stage.
#[derive(Default)]
pub struct Filter {
    predicates: Vec<Box<dyn Predicate>>,
}

impl Filter {
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut predicates: Vec<Box<dyn Predicate>> = Vec::new();

        let sets = [
            (Dimension::Region, &criteria.regions),
            (Dimension::Gender, &criteria.genders),
            (Dimension::Category, &criteria.categories),
            (Dimension::PaymentMethod, &criteria.payment_methods),
        ];
        for (dimension, allowed) in sets {
            if !allowed.is_empty() {
                predicates.push(Box::new(MemberOf {
                    dimension,
                    allowed: allowed.clone(),
                }));
            }
        }

        if !criteria.tags.is_empty() {
            predicates.push(Box::new(AnyTag {
                selected: criteria.tags.clone(),
            }));
        }
        if let Some(range) = criteria.age_range {
            predicates.push(Box::new(AgeWithin(range)));
        }
        if let Some(range) = &criteria.date_range {
            predicates.push(Box::new(DateWithin(range.clone())));
        }

        Self { predicates }
    }

    pub fn is_identity(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Names of the active predicates, in evaluation order.
    pub fn active(&self) -> Vec<&'static str> {
        self.predicates.iter().map(|p| p.name()).collect()
    }

    /// Positions of the matching records, in dataset order.
    pub fn apply(&self, records: &[Record]) -> Vec<usize> {
        let preds: Vec<&dyn Predicate> = self.predicates.iter().map(|p| p.as_ref()).collect();
        select_matching(records, &preds)
    }
}

impl Predicate for Filter {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn matches(&self, record: &Record) -> bool {
        self.predicates.iter().all(|p| p.matches(record))
    }
}
