//! CSV writer. Tags are joined with commas inside one cell, which is the
//! format the CSV reader splits again, so a tag that itself contains a
//! comma cannot be written and fails the export.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use salesq_core::record::Record;

use crate::error::{Error, Result};
use crate::normalize::COLUMNS;

pub struct CsvWriter<W: Write> {
    writer: csv::Writer<W>,
    wrote_header: bool,
}

impl CsvWriter<File> {
    pub fn to_path(path: &Path) -> Result<Self> {
        Ok(Self::to_writer(File::create(path)?))
    }
}

impl<W: Write> CsvWriter<W> {
    pub fn to_writer(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
            wrote_header: false,
        }
    }

    pub fn write_records<'a, I>(&mut self, records: I) -> Result<usize>
    where
        I: IntoIterator<Item = &'a Record>,
    {
        if !self.wrote_header {
            self.writer.write_record(COLUMNS)?;
            self.wrote_header = true;
        }
        let mut n = 0;
        for r in records {
            self.writer.write_record(&row_cells(r)?)?;
            n += 1;
        }
        self.writer.flush()?;
        Ok(n)
    }
}

fn tags_cell(r: &Record) -> Result<String> {
    if let Some(tag) = r.tags.iter().find(|t| t.contains(',')) {
        return Err(Error::Unrepresentable(format!(
            "tag {tag:?} on transaction {} contains a comma",
            r.transaction_id
        )));
    }
    Ok(r.tags.join(","))
}

fn row_cells(r: &Record) -> Result<[String; 26]> {
    Ok([
        r.transaction_id.clone(),
        r.date.clone(),
        r.customer_id.clone(),
        r.customer_name.clone(),
        r.phone_number.clone(),
        r.gender.clone(),
        r.age.to_string(),
        r.customer_region.clone(),
        r.customer_type.clone(),
        r.product_id.clone(),
        r.product_name.clone(),
        r.brand.clone(),
        r.product_category.clone(),
        tags_cell(r)?,
        r.quantity.to_string(),
        r.price_per_unit.to_string(),
        r.discount_percentage.to_string(),
        r.total_amount.to_string(),
        r.final_amount.to_string(),
        r.payment_method.clone(),
        r.order_status.clone(),
        r.delivery_type.clone(),
        r.store_id.clone(),
        r.store_location.clone(),
        r.salesperson_id.clone(),
        r.employee_name.clone(),
    ])
}
