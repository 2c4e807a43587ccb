#![forbid(unsafe_code)]
//! salesq-io: the input boundary and export writers.
//!
//! Rows arrive as loosely-typed objects (JSON, NDJSON or CSV) and leave as
//! strictly-typed `Record`s. All coercion happens in [`normalize`]; the
//! pipeline never sees a missing field.

pub mod error;
pub mod normalize;
pub mod readers;
pub mod writers;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use salesq_core::record::Record;

pub use error::{Error, Result};
pub use normalize::{normalize, RawRow};

/// Dataset encodings recognised by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// A single JSON array of objects.
    Json,
    /// One JSON object per line.
    Jsonl,
    Csv,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(DataFormat::Json),
            "jsonl" | "ndjson" => Ok(DataFormat::Jsonl),
            "csv" => Ok(DataFormat::Csv),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Load and normalize a whole dataset. The result is read-only for the
/// rest of the session.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let format = DataFormat::from_path(path)?;
    let file = BufReader::new(File::open(path)?);
    let records = match format {
        DataFormat::Json => readers::json::read_json(file)?,
        DataFormat::Jsonl => readers::jsonl::read_jsonl(file)?,
        DataFormat::Csv => readers::csv::read_csv(file)?,
    };
    tracing::info!(path = %path.display(), ?format, records = records.len(), "dataset loaded");
    Ok(records)
}

/// Write records to `path`, choosing CSV or NDJSON by extension.
pub fn export_records<'a, I>(path: impl AsRef<Path>, records: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a Record>,
{
    let path = path.as_ref();
    let written = match DataFormat::from_path(path)? {
        DataFormat::Csv => {
            let mut w = writers::csv::CsvWriter::to_path(path)?;
            w.write_records(records)?
        }
        DataFormat::Jsonl => {
            let mut w = writers::jsonl::JsonlWriter::to_path(path)?;
            w.write_records(records)?
        }
        DataFormat::Json => {
            return Err(Error::UnsupportedFormat(format!(
                "{} (export supports .csv and .jsonl)",
                path.display()
            )))
        }
    };
    tracing::info!(path = %path.display(), records = written, "export written");
    Ok(written)
}
