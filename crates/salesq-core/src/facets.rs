//! Distinct values per categorical dimension, used to populate pickers.

use serde::{Deserialize, Serialize};

use crate::criteria::AgeRange;

/// Age bounds reported when the dataset has no positive ages.
pub const DEFAULT_AGE_RANGE: AgeRange = AgeRange::new(18, 65);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetValues {
    pub regions: Vec<String>,
    pub genders: Vec<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub payment_methods: Vec<String>,
    pub age_range: AgeRange,
}

impl Default for FacetValues {
    fn default() -> Self {
        Self {
            regions: Vec::new(),
            genders: Vec::new(),
            categories: Vec::new(),
            tags: Vec::new(),
            payment_methods: Vec::new(),
            age_range: DEFAULT_AGE_RANGE,
        }
    }
}
