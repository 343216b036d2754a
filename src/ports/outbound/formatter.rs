use crate::application::read_models::ComparisonReport;
use crate::shared::Result;

/// ComparisonFormatter port for rendering a comparison report
///
/// This port abstracts the output format (JSON, Markdown, ...).
pub trait ComparisonFormatter {
    /// Formats the report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &ComparisonReport<'_>) -> Result<String>;
}
