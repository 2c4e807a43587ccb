#![forbid(unsafe_code)]
//! salesq-core: the strictly-typed model shared by every salesq crate.
//!
//! Records reach this crate already normalized (see `salesq-io`). Everything
//! here is plain data: criteria, sort specs, pagination metadata, summary
//! aggregates and facets. No IO, no logging.

pub mod config;
pub mod criteria;
pub mod error;
pub mod facets;
pub mod hash;
pub mod page;
pub mod prelude;
pub mod record;
pub mod request;
pub mod sort;
pub mod stats;

pub use prelude::*;
