#![forbid(unsafe_code)]
//! salesq: a searchable, filterable, sortable, paginated view over a static
//! sales dataset, with summary statistics.
//!
//! This umbrella crate re-exports the workspace members:
//! - `salesq_core`: records, criteria, sort, pagination and summary types
//! - `salesq_io`: dataset readers, normalization, export writers
//! - `salesq_operators`: search, filter, sort, paginate, summarize stages
//! - `salesq_planner`: YAML saved views and explain output
//! - `salesq_exec`: the query pipeline, session state and dashboard

pub use salesq_core;
pub use salesq_exec;
pub use salesq_io;
pub use salesq_operators;
pub use salesq_planner;

pub use salesq_core::prelude::*;
pub use salesq_exec::{Dashboard, QueryOutput, QueryPipeline, Session};
