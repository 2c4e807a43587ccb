//! Caller-owned session parameters.
//!
//! Any change that can alter the candidate set (search, criteria, sort)
//! sends the session back to page 1. Navigation outside the valid page
//! range is ignored: the page does not move and nothing fails.

use salesq_core::criteria::FilterCriteria;
use salesq_core::request::QueryRequest;
use salesq_core::sort::SortSpec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    search: String,
    criteria: FilterCriteria,
    sort: SortSpec,
    page: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SortSpec::default())
    }
}

impl Session {
    pub fn new(sort: SortSpec) -> Self {
        Self {
            search: String::new(),
            criteria: FilterCriteria::default(),
            sort,
            page: 1,
        }
    }

    /// Resume from a full request. A page of 0 becomes 1.
    pub fn from_request(request: QueryRequest) -> Self {
        Self {
            search: request.search,
            criteria: request.criteria,
            sort: request.sort,
            page: request.page.max(1),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.search = text.into();
        self.page = 1;
    }

    pub fn clear_search(&mut self) {
        self.set_search(String::new());
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page = 1;
    }

    /// Edit the criteria in place, e.g. to toggle one region.
    pub fn update_criteria<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut FilterCriteria),
    {
        edit(&mut self.criteria);
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.set_criteria(FilterCriteria::default());
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
        self.page = 1;
    }

    /// Search text is not a filter here.
    pub fn has_active_filters(&self) -> bool {
        self.criteria.is_active()
    }

    /// Jump to `page` if it exists. Returns whether it applied.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page >= 1 && page <= total_pages {
            self.page = page;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self, total_pages: usize) -> bool {
        if self.page < total_pages {
            self.page += 1;
            true
        } else {
            false
        }
    }

    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    pub fn request(&self) -> QueryRequest {
        QueryRequest {
            search: self.search.clone(),
            criteria: self.criteria.clone(),
            sort: self.sort,
            page: self.page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use salesq_core::criteria::AgeRange;
    use salesq_core::sort::SortField;

    #[test]
    fn out_of_range_navigation_is_ignored() {
        let mut s = Session::default();
        assert!(s.go_to_page(2, 3));
        assert!(!s.go_to_page(0, 3));
        assert!(!s.go_to_page(4, 3));
        assert_eq!(s.page(), 2);

        assert!(s.next_page(3));
        assert!(!s.next_page(3));
        assert_eq!(s.page(), 3);
    }

    #[test]
    fn prev_stops_at_first_page() {
        let mut s = Session::default();
        assert!(!s.prev_page());
        assert_eq!(s.page(), 1);
    }

    #[test]
    fn no_pages_means_no_navigation() {
        let mut s = Session::default();
        assert!(!s.go_to_page(1, 0));
        assert!(!s.next_page(0));
        assert_eq!(s.page(), 1);
    }

    #[test]
    fn parameter_changes_reset_page() {
        let mut s = Session::default();

        s.go_to_page(3, 5);
        s.set_search("neha");
        assert_eq!(s.page(), 1);

        s.go_to_page(3, 5);
        s.update_criteria(|c| c.age_range = Some(AgeRange::new(20, 40)));
        assert_eq!(s.page(), 1);
        assert!(s.has_active_filters());

        s.go_to_page(3, 5);
        s.set_sort(SortSpec::asc(SortField::Quantity));
        assert_eq!(s.page(), 1);

        s.go_to_page(3, 5);
        s.clear_filters();
        assert_eq!(s.page(), 1);
        assert!(!s.has_active_filters());

        s.go_to_page(3, 5);
        s.clear_search();
        assert_eq!(s.page(), 1);
        assert_eq!(s.search(), "");
    }

    #[test]
    fn search_alone_is_not_an_active_filter() {
        let mut s = Session::default();
        s.set_search("ravi");
        assert!(!s.has_active_filters());
        assert_eq!(s.request().search, "ravi");
    }
}
