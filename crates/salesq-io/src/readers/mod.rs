//! Dataset readers. Each one decodes rows and hands them to
//! [`normalize`](crate::normalize::normalize).

pub mod csv;
pub mod json;
pub mod jsonl;
