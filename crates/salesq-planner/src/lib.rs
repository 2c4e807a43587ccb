#![forbid(unsafe_code)]
//! salesq-planner: saved views (YAML) → `QueryRequest`, plus a readable
//! explanation of which pipeline stages a request activates.
//!
//! NOTE: No dataset access here; planning is pure over the request.

pub mod dsl;
pub mod explain;

pub use dsl::yaml::{parse_yaml_view, ParsedView, ViewConfig};
pub use explain::explain;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid view: {0}")]
    Invalid(String),
}
