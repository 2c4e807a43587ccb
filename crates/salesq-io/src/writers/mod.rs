//! Export writers for query results.

pub mod csv;
pub mod jsonl;
