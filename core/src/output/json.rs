//! JSON serialization of diff reports.

use crate::changeset::DiffReport;

pub fn serialize_diff_report(report: &DiffReport) -> serde_json::Result<String> {
    serde_json::to_string(report)
}

pub fn serialize_diff_report_pretty(report: &DiffReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
