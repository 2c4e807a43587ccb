//! A dataset stored as one JSON array of objects.

use std::io::Read;

use serde_json::Value;

use salesq_core::record::Record;

use crate::error::{Error, Result};
use crate::normalize::normalize;

pub fn read_json<R: Read>(reader: R) -> Result<Vec<Record>> {
    let doc: Value = serde_json::from_reader(reader)?;
    let Value::Array(rows) = doc else {
        return Err(Error::Malformed("expected a top-level JSON array".into()));
    };

    let mut records = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        match row {
            Value::Object(obj) => records.push(normalize(obj)),
            other => {
                tracing::warn!(row = idx, kind = %json_kind(other), "skipping non-object row");
            }
        }
    }
    Ok(records)
}

pub(crate) fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_array_and_skips_non_objects() {
        let src = r#"[
            {"customerName": "Asha", "tags": ["vip"]},
            42,
            {"customerName": "Ravi"}
        ]"#;
        let records = read_json(src.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].customer_name, "Asha");
        assert_eq!(records[1].tags, Vec::<String>::new());
    }

    #[test]
    fn rejects_non_array_document() {
        assert!(matches!(
            read_json(r#"{"rows": []}"#.as_bytes()),
            Err(Error::Malformed(_))
        ));
    }
}
