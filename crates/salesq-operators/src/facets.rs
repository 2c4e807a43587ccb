//! Facet derivation: distinct values per dimension, computed once per load.

use std::collections::BTreeSet;

use salesq_core::criteria::AgeRange;
use salesq_core::facets::{FacetValues, DEFAULT_AGE_RANGE};
use salesq_core::record::Record;

pub fn derive_facets(records: &[Record]) -> FacetValues {
    fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
        values
            .filter(|v| !v.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    let age_range = records
        .iter()
        .map(|r| r.age)
        .filter(|&a| a > 0)
        .fold(None, |acc: Option<AgeRange>, a| {
            Some(match acc {
                None => AgeRange::new(a, a),
                Some(r) => AgeRange::new(r.min.min(a), r.max.max(a)),
            })
        })
        .unwrap_or(DEFAULT_AGE_RANGE);

    FacetValues {
        regions: distinct(records.iter().map(|r| r.customer_region.as_str())),
        genders: distinct(records.iter().map(|r| r.gender.as_str())),
        categories: distinct(records.iter().map(|r| r.product_category.as_str())),
        tags: distinct(records.iter().flat_map(|r| r.tags.iter().map(String::as_str))),
        payment_methods: distinct(records.iter().map(|r| r.payment_method.as_str())),
        age_range,
    }
}
