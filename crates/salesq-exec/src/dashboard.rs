//! Dashboard: a loaded dataset, its facets, one session, and a memo of the
//! sorted candidate set.
//!
//! The memo is keyed by the fingerprint of (search, criteria, sort), so page
//! flips reuse it and any other change rebuilds it. Output is identical to
//! calling [`QueryPipeline::execute`] directly.

use salesq_core::config::DashboardConfig;
use salesq_core::facets::FacetValues;
use salesq_core::hash::Hash256;
use salesq_core::page::PageSlot;
use salesq_core::record::Record;

use salesq_operators::derive_facets;

use crate::pipeline::{CandidateSet, QueryOutput, QueryPipeline};
use crate::session::Session;

pub struct Dashboard {
    records: Vec<Record>,
    facets: FacetValues,
    pipeline: QueryPipeline,
    session: Session,
    max_visible_pages: usize,
    cache_key: Option<Hash256>,
    cache: CandidateSet,
}

impl Dashboard {
    pub fn new(records: Vec<Record>, cfg: &DashboardConfig) -> Self {
        let facets = derive_facets(&records);
        tracing::info!(
            records = records.len(),
            regions = facets.regions.len(),
            tags = facets.tags.len(),
            "dashboard ready"
        );
        let mut dashboard = Self {
            records,
            facets,
            pipeline: QueryPipeline::from_config(cfg),
            session: Session::new(cfg.default_sort),
            max_visible_pages: cfg.max_visible_pages.max(1),
            cache_key: None,
            cache: CandidateSet::default(),
        };
        dashboard.rebuild();
        dashboard
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn facets(&self) -> &FacetValues {
        &self.facets
    }

    pub fn pipeline(&self) -> &QueryPipeline {
        &self.pipeline
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutate search, criteria or sort. The memo notices on the next read.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn view(&mut self) -> QueryOutput<'_> {
        self.refresh();
        self.pipeline
            .page(&self.records, &self.cache, self.session.page())
    }

    /// Every matching record in display order, for exports.
    pub fn all_matching(&mut self) -> Vec<&Record> {
        self.refresh();
        self.cache.order.iter().map(|&i| &self.records[i]).collect()
    }

    pub fn total_pages(&mut self) -> usize {
        self.refresh();
        self.cache.order.len().div_ceil(self.pipeline.page_size())
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total = self.total_pages();
        self.session.go_to_page(page, total)
    }

    pub fn next_page(&mut self) -> bool {
        let total = self.total_pages();
        self.session.next_page(total)
    }

    pub fn prev_page(&mut self) -> bool {
        self.session.prev_page()
    }

    pub fn visible_pages(&mut self) -> Vec<PageSlot> {
        let max_visible = self.max_visible_pages;
        self.view().pagination.visible_pages(max_visible)
    }

    fn refresh(&mut self) {
        let key = self.session.request().candidate_fingerprint().ok();
        if key.is_some() && key == self.cache_key {
            return;
        }
        self.rebuild();
    }

    fn rebuild(&mut self) {
        self.cache_key = self.session.request().candidate_fingerprint().ok();
        self.cache = self.pipeline.candidates(
            &self.records,
            self.session.search(),
            self.session.criteria(),
            &self.session.sort(),
        );
    }
}
