//! The full set of caller-owned query parameters.

use serde::{Deserialize, Serialize};

use crate::criteria::FilterCriteria;
use crate::hash::{hash_serde, Hash256};
use crate::sort::SortSpec;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryRequest {
    pub search: String,
    pub criteria: FilterCriteria,
    pub sort: SortSpec,
    /// 1-indexed.
    pub page: usize,
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            search: String::new(),
            criteria: FilterCriteria::default(),
            sort: SortSpec::default(),
            page: 1,
        }
    }
}

#[derive(Serialize)]
struct CandidateKey<'a> {
    search: &'a str,
    criteria: &'a FilterCriteria,
    sort: &'a SortSpec,
}

impl QueryRequest {
    /// Fingerprint of everything that decides the sorted candidate set.
    /// The page number is deliberately left out.
    pub fn candidate_fingerprint(&self) -> crate::error::Result<Hash256> {
        hash_serde(&CandidateKey {
            search: &self.search,
            criteria: &self.criteria,
            sort: &self.sort,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::SortField;

    #[test]
    fn page_does_not_change_fingerprint() {
        let a = QueryRequest::default();
        let b = QueryRequest {
            page: 7,
            ..Default::default()
        };
        assert_eq!(
            a.candidate_fingerprint().unwrap(),
            b.candidate_fingerprint().unwrap()
        );
    }

    #[test]
    fn sort_changes_fingerprint() {
        let a = QueryRequest::default();
        let b = QueryRequest {
            sort: SortSpec::asc(SortField::Quantity),
            ..Default::default()
        };
        assert_ne!(
            a.candidate_fingerprint().unwrap(),
            b.candidate_fingerprint().unwrap()
        );
    }
}
