use crate::application::read_models::ComparisonReport;
use crate::ports::outbound::ComparisonFormatter;
use crate::shared::Result;

/// JsonFormatter adapter for machine-readable comparison reports
///
/// Emits the whole report as pretty-printed JSON with camelCase keys, in the
/// same shape the comparison service uses for components and identifiers.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonFormatter for JsonFormatter {
    fn format(&self, report: &ComparisonReport<'_>) -> Result<String> {
        let mut output = serde_json::to_string_pretty(report)?;
        output.push('\n');
        Ok(output)
    }
}
