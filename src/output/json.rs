//! JSON output renderer.
//!
//! Outputs `{"cases": [...], "summary": {...}}` format.

use crate::models::RunReport;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, report: &RunReport) -> String {
        let output = serde_json::json!({
            "cases": report.cases,
            "summary": report.summary(),
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
