//! Summary aggregates over a filtered set.

use serde::{Deserialize, Serialize};

use crate::record::Record;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_units_sold: u64,
    pub total_amount: f64,
    pub total_discount: f64,
    pub record_count: usize,
}

impl SummaryStats {
    pub fn accumulate(&mut self, record: &Record) {
        self.total_units_sold += u64::from(record.quantity);
        self.total_amount += record.total_amount;
        self.total_discount += record.discount();
        self.record_count += 1;
    }
}

impl<'a> FromIterator<&'a Record> for SummaryStats {
    fn from_iter<I: IntoIterator<Item = &'a Record>>(iter: I) -> Self {
        let mut stats = SummaryStats::default();
        for r in iter {
            stats.accumulate(r);
        }
        stats
    }
}
