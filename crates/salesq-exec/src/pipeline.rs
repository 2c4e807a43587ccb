//! QueryPipeline: search → filter → sort → paginate, with the summary taken
//! from the filtered set before sorting.
//!
//! Nothing here can fail. Empty results and out-of-range pages are
//! ordinary outcomes: an empty page, not an error.

use serde::Serialize;

use salesq_core::config::DashboardConfig;
use salesq_core::criteria::FilterCriteria;
use salesq_core::page::{PaginationInfo, PAGE_SIZE};
use salesq_core::record::Record;
use salesq_core::request::QueryRequest;
use salesq_core::sort::SortSpec;
use salesq_core::stats::SummaryStats;

use salesq_operators::{
    paginate, select_matching, sort_indices, summarize, Filter, Predicate, SearchQuery,
};

use crate::metrics::emit_span;

/// The sorted candidate set for one (search, criteria, sort) combination.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateSet {
    /// Dataset positions in display order.
    pub order: Vec<usize>,
    /// Aggregates over the same records.
    pub stats: SummaryStats,
}

/// What one query hands back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryOutput<'a> {
    pub records: Vec<&'a Record>,
    pub stats: SummaryStats,
    pub pagination: PaginationInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryPipeline {
    page_size: usize,
}

impl Default for QueryPipeline {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl QueryPipeline {
    /// A page size of 0 is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }

    pub fn from_config(cfg: &DashboardConfig) -> Self {
        Self::new(cfg.page_size)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Run every stage and return the requested page.
    pub fn query<'a>(
        &self,
        records: &'a [Record],
        search: &str,
        criteria: &FilterCriteria,
        sort: &SortSpec,
        page: usize,
    ) -> QueryOutput<'a> {
        let set = self.candidates(records, search, criteria, sort);
        self.page(records, &set, page)
    }

    /// [`query`](Self::query) over a bundled request.
    pub fn execute<'a>(&self, records: &'a [Record], request: &QueryRequest) -> QueryOutput<'a> {
        self.query(
            records,
            &request.search,
            &request.criteria,
            &request.sort,
            request.page,
        )
    }

    /// Stages 1, 2, 5 and 3: everything except pagination.
    pub fn candidates(
        &self,
        records: &[Record],
        search: &str,
        criteria: &FilterCriteria,
        sort: &SortSpec,
    ) -> CandidateSet {
        let search = SearchQuery::new(search);
        let filter = Filter::from_criteria(criteria);

        let mut predicates: Vec<&dyn Predicate> = Vec::with_capacity(2);
        if search.is_active() {
            predicates.push(&search);
        }
        if !filter.is_identity() {
            predicates.push(&filter);
        }

        let mut order = select_matching(records, &predicates);
        let stats = summarize(order.iter().map(|&i| &records[i]));
        sort_indices(records, &mut order, sort);

        tracing::debug!(
            input = records.len(),
            matched = order.len(),
            search = search.needle(),
            filters = ?filter.active(),
            %sort,
            "candidate set built"
        );
        emit_span(
            "candidates",
            &[
                ("input", records.len().to_string()),
                ("matched", order.len().to_string()),
            ],
        );

        CandidateSet { order, stats }
    }

    /// Stage 4 over an already-built candidate set.
    pub fn page<'a>(
        &self,
        records: &'a [Record],
        set: &CandidateSet,
        page: usize,
    ) -> QueryOutput<'a> {
        let pagination = PaginationInfo::new(set.order.len(), page, self.page_size);
        let visible = paginate(&set.order, &pagination);
        if visible.is_empty() && !set.order.is_empty() {
            tracing::debug!(
                page,
                total_pages = pagination.total_pages,
                "requested page is out of range"
            );
        }
        QueryOutput {
            records: visible.iter().map(|&i| &records[i]).collect(),
            stats: set.stats,
            pagination,
        }
    }
}
