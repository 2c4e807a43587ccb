#![forbid(unsafe_code)]
//! salesq-operators: the stages of the query pipeline.
//!
//! Design intent:
//! - Pure and synchronous; every stage is a function of its inputs.
//! - Stages pass dataset positions (`usize`) around, never cloned records.
//! - Search and filter share the [`Predicate`] trait so they compose with
//!   plain AND semantics in any order.

pub mod facets;
pub mod filter;
pub mod paginate;
pub mod search;
pub mod sort;
pub mod summary;
pub mod traits;

pub use facets::derive_facets;
pub use filter::Filter;
pub use paginate::paginate;
pub use search::SearchQuery;
pub use sort::{compare, locale_compare, sort_indices};
pub use summary::summarize;
pub use traits::{select_matching, Predicate};
