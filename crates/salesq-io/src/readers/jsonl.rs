//! Newline-delimited JSON, one object per line.

use std::io::BufRead;

use serde_json::Value;

use salesq_core::record::Record;

use crate::error::Result;
use crate::normalize::normalize;
use crate::readers::json::json_kind;

pub fn read_jsonl<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Value>(&line)? {
            Value::Object(obj) => records.push(normalize(&obj)),
            other => {
                tracing::warn!(line = idx + 1, kind = %json_kind(&other), "skipping non-object line");
            }
        }
    }
    Ok(records)
}
