use super::conflict_filter::{is_divergent_component, ComparisonView};
use crate::comparison::domain::Comparison;
use serde::Serialize;

/// Headline counts for a rendered comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSummary {
    pub document_count: usize,
    /// Components in the comparison as a whole
    pub total_components: usize,
    /// Components in the view being rendered
    pub shown_components: usize,
    pub shown_versions: usize,
    pub divergent_components: usize,
    pub sbom_conflicts: usize,
    pub component_conflicts: usize,
}

impl ComparisonSummary {
    pub fn from_view(comparison: &Comparison, view: &ComparisonView<'_>, document_count: usize) -> Self {
        let divergent_components = comparison
            .comparisons
            .values()
            .filter(|versions| is_divergent_component(versions, document_count))
            .count();

        let sbom_conflicts = comparison
            .diff_reports
            .iter()
            .map(|report| report.sbom_conflict.conflict_types.len())
            .sum();

        let component_conflicts = comparison
            .diff_reports
            .iter()
            .flat_map(|report| &report.component_conflicts)
            .map(|conflict| conflict.conflict_types.len())
            .sum();

        Self {
            document_count,
            total_components: comparison.comparisons.len(),
            shown_components: view.len(),
            shown_versions: view.iter().map(|(_, versions)| versions.len()).sum(),
            divergent_components,
            sbom_conflicts,
            component_conflicts,
        }
    }

    /// True when any component diverges or the service reported conflict tags
    pub fn has_conflicts(&self) -> bool {
        self.divergent_components > 0 || self.sbom_conflicts > 0 || self.component_conflicts > 0
    }
}
