//! CSV datasets, headed either by dataset keys or spreadsheet display names.

use std::io::Read;

use serde_json::Value;

use salesq_core::record::Record;

use crate::error::Result;
use crate::normalize::{canonical_key, normalize, RawRow};

pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let keys: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| canonical_key(h).to_string())
        .collect();

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let mut raw = RawRow::new();
        for (key, cell) in keys.iter().zip(row.iter()) {
            raw.insert(key.clone(), Value::String(cell.to_string()));
        }
        records.push(normalize(&raw));
    }
    Ok(records)
}
