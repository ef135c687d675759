//! Report aggregation.

use super::model::{CategoryTotals, MismatchRecord, Report, ReportIdentity, Severity};

/// Aggregate a record sequence into a [`Report`]
///
/// Pure aggregation with no filtering: records stay exactly as traversed,
/// totals are counted per category, and `has_errors` reflects the presence
/// of any error-severity record.
pub fn build_report(identity: ReportIdentity, records: Vec<MismatchRecord>) -> Report {
    let mut totals = CategoryTotals::default();
    for record in &records {
        totals.bump(record.category);
    }
    let has_errors = records
        .iter()
        .any(|record| record.severity == Severity::Error);

    Report {
        report_schema_version: 1,
        identity,
        totals,
        has_errors,
        records,
    }
}
