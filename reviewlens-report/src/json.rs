//! JSON Output

use crate::report::AnalyticsReport;

/// Generate a prettified JSON report.
pub fn generate_json_report(report: &AnalyticsReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
