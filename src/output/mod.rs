//! Output renderers: terminal and JSON run reports.

pub mod json;
pub mod terminal;

use crate::models::RunReport;

/// Trait for rendering a run report to an output format.
pub trait OutputRenderer {
    /// Render the report to a string.
    fn render(&self, report: &RunReport) -> String;
}
