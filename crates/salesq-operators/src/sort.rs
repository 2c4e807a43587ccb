//! Sort stage: stable ordering by a single `SortSpec`.
//!
//! Ties keep their input order (which is dataset order after filtering);
//! there is no secondary key.

use std::cmp::Ordering;

use salesq_core::record::Record;
use salesq_core::sort::{SortDirection, SortField, SortSpec};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two records under `spec`. `Desc` reverses the ascending result.
pub fn compare(a: &Record, b: &Record, spec: &SortSpec) -> Ordering {
    let asc = match spec.field {
        SortField::Date => a.date.cmp(&b.date),
        SortField::Quantity => a.quantity.cmp(&b.quantity),
        SortField::CustomerName => locale_compare(&a.customer_name, &b.customer_name),
    };
    match spec.direction {
        SortDirection::Asc => asc,
        SortDirection::Desc => asc.reverse(),
    }
}

/// Reorder dataset positions by `spec`. `slice::sort_by` is stable, which
/// is what gives ties their input order.
pub fn sort_indices(records: &[Record], order: &mut [usize], spec: &SortSpec) {
    order.sort_by(|&a, &b| compare(&records[a], &records[b], spec));
}

/// Collation-style string order for names. Levels, in turn: base letters
/// with diacritics stripped and case folded, then accents (unaccented
/// first), then lowercase before uppercase at the first case difference,
/// then code points.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x != y {
            match (x.is_lowercase(), y.is_lowercase()) {
                (true, false) => return Ordering::Less,
                (false, true) => return Ordering::Greater,
                _ => {}
            }
        }
    }
    Ordering::Equal
}
