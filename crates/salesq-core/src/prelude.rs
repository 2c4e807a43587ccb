//! Convenient re-exports for downstream crates.

pub use crate::config::DashboardConfig;
pub use crate::criteria::{AgeRange, DateRange, FilterCriteria};
pub use crate::error::{Error, Result};
pub use crate::facets::FacetValues;
pub use crate::hash::Hash256;
pub use crate::page::{PageSlot, PaginationInfo, PAGE_SIZE};
pub use crate::record::Record;
pub use crate::request::QueryRequest;
pub use crate::sort::{SortDirection, SortField, SortOption, SortSpec, SORT_OPTIONS};
pub use crate::stats::SummaryStats;
