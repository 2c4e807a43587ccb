#![forbid(unsafe_code)]
//! salesq-exec: the query pipeline and the state that drives it.
//!
//! - [`QueryPipeline`] is a pure function of (dataset, search, criteria,
//!   sort, page). No hidden state.
//! - [`Session`] is the caller-owned parameter set with the page-reset and
//!   navigation rules.
//! - [`Dashboard`] ties a loaded dataset to a session and memoizes the
//!   sorted candidate set between page flips.

pub mod dashboard;
pub mod metrics;
pub mod pipeline;
pub mod session;

pub use dashboard::Dashboard;
pub use pipeline::{CandidateSet, QueryOutput, QueryPipeline};
pub use session::Session;
