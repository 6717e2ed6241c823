//! Live filter over the locally cached customer list.
//!
//! This never calls the server. Every field value of a record (id included)
//! is joined with spaces and the filter text is tested as a case-insensitive
//! substring of that haystack. An empty filter matches everything.

use crate::CustomerRecord;

/// Test one record against the filter text.
pub fn matches_filter(record: &CustomerRecord, filter: &str) -> bool {
    let haystack = record.field_values().join(" ").to_lowercase();
    haystack.contains(&filter.to_lowercase())
}

/// Records matching the filter, in list order.
pub fn filter_records<'a>(records: &'a [CustomerRecord], filter: &str) -> Vec<&'a CustomerRecord> {
    records
        .iter()
        .filter(|record| matches_filter(record, filter))
        .collect()
}
