//! Streaming NDJSON writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use salesq_core::record::Record;

use crate::error::Result;

pub struct JsonlWriter<W: Write> {
    writer: BufWriter<W>,
}

impl JsonlWriter<File> {
    pub fn to_path(path: &Path) -> Result<Self> {
        let f = File::create(path)?;
        Ok(Self::to_writer(f))
    }
}

impl<W: Write> JsonlWriter<W> {
    pub fn to_writer(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Write one JSON object per line; returns the number of records written.
    pub fn write_records<'a, I>(&mut self, records: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut n = 0;
        for r in records {
            serde_json::to_writer(&mut self.writer, r)?;
            self.writer.write_all(b"\n")?;
            n += 1;
        }
        self.writer.flush()?;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::readers::jsonl::read_jsonl;

    #[test]
    fn output_reads_back_as_the_same_records() {
        let records = vec![
            Record {
                customer_name: "Asha".into(),
                tags: vec!["vip".into()],
                quantity: 2,
                ..Default::default()
            },
            Record {
                customer_name: "Ravi".into(),
                ..Default::default()
            },
        ];
        let mut buf = Vec::new();
        let n = JsonlWriter::to_writer(&mut buf)
            .write_records(&records)
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(read_jsonl(buf.as_slice()).unwrap(), records);
    }
}
