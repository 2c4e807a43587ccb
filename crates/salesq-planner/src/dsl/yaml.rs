//! YAML saved views.
//!
//! Example:
//! ```yaml
//! config: { page_size: 20 }
//! search: "neha"
//! filters:
//!   regions: [North, East]
//!   tags: [VIP]
//!   age: { min: 20, max: 40 }
//!   date: { start: "2023-01-01", end: "2023-12-31" }
//! sort: { field: customerName, direction: asc }   # or: sort: "quantity:desc"
//! page: 1
//! ```
//!
//! Every key is optional; unknown keys are rejected so typos surface.

use serde::{Deserialize, Serialize};

use salesq_core::criteria::{AgeRange, DateRange, FilterCriteria};
use salesq_core::request::QueryRequest;
use salesq_core::sort::SortSpec;

use crate::PlanError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ViewDoc {
    #[serde(default)]
    config: Option<ViewConfig>,
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    filters: Option<FiltersDef>,
    #[serde(default)]
    sort: Option<SortDef>,
    #[serde(default)]
    page: Option<usize>,
}

/// Overrides a view may carry for the dashboard configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub page_size: Option<usize>,
    pub max_visible_pages: Option<usize>,
    pub dataset: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FiltersDef {
    regions: Vec<String>,
    genders: Vec<String>,
    categories: Vec<String>,
    tags: Vec<String>,
    payment_methods: Vec<String>,
    age: Option<AgeRange>,
    date: Option<DateRange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum SortDef {
    Key(String),
    Spec(SortSpec),
}

/// A parsed view. Sort and page stay optional so the caller can fall back
/// to its own defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedView {
    pub search: String,
    pub criteria: FilterCriteria,
    pub sort: Option<SortSpec>,
    pub page: Option<usize>,
    pub config: ViewConfig,
}

impl ParsedView {
    pub fn into_request(self, default_sort: SortSpec) -> QueryRequest {
        QueryRequest {
            search: self.search,
            criteria: self.criteria,
            sort: self.sort.unwrap_or(default_sort),
            page: self.page.unwrap_or(1),
        }
    }
}

/// Parse a YAML view document.
pub fn parse_yaml_view(src: &str) -> Result<ParsedView, PlanError> {
    // An empty document is a valid "everything" view.
    if src.trim().is_empty() {
        return Ok(ParsedView::default());
    }
    let doc: ViewDoc = serde_yaml::from_str(src)?;

    let sort = match doc.sort {
        None => None,
        Some(SortDef::Spec(spec)) => Some(spec),
        Some(SortDef::Key(key)) => Some(
            key.parse::<SortSpec>()
                .map_err(|e| PlanError::Invalid(e.to_string()))?,
        ),
    };

    if doc.page == Some(0) {
        return Err(PlanError::Invalid("page numbers start at 1".into()));
    }

    let criteria = doc
        .filters
        .map(|f| FilterCriteria {
            regions: f.regions.into_iter().collect(),
            genders: f.genders.into_iter().collect(),
            categories: f.categories.into_iter().collect(),
            tags: f.tags.into_iter().collect(),
            payment_methods: f.payment_methods.into_iter().collect(),
            age_range: f.age,
            date_range: f.date,
        })
        .unwrap_or_default();

    Ok(ParsedView {
        search: doc.search.unwrap_or_default(),
        criteria,
        sort,
        page: doc.page,
        config: doc.config.unwrap_or_default(),
    })
}
