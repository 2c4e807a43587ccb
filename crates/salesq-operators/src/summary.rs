//! Summary stage: additive aggregates over the filtered set.

use salesq_core::record::Record;
use salesq_core::stats::SummaryStats;

pub fn summarize<'a, I>(records: I) -> SummaryStats
where
    I: IntoIterator<Item = &'a Record>,
{
    records.into_iter().collect()
}
