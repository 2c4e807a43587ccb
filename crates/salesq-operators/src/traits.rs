//! Predicate trait shared by the search and filter stages.

use salesq_core::record::Record;

/// A row-level test. Implementations must be deterministic and free of
/// side effects so predicates can be applied in any order.
pub trait Predicate: Send + Sync {
    /// Stable name, used in logs and explain output.
    fn name(&self) -> &'static str;

    fn matches(&self, record: &Record) -> bool;
}

/// Dataset positions of the records every predicate accepts, ascending.
pub fn select_matching(records: &[Record], predicates: &[&dyn Predicate]) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| predicates.iter().all(|p| p.matches(r)))
        .map(|(i, _)| i)
        .collect()
}
