//! Comparison read model for output formatting
//!
//! Aggregates the comparison, the current navigation position and the
//! optional quality results into one borrow-only structure that every
//! formatter renders.

use crate::application::dto::QualityResult;
use crate::comparison::domain::DiffReport;
use crate::comparison::services::{ComparisonSummary, LeafView, Location};
use serde::Serialize;

/// Everything a formatter needs to render one comparison
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport<'a> {
    pub metadata: ReportMetadataView,
    /// Compared documents in appearance-index order
    pub documents: Vec<DocumentView>,
    /// Whether the component map was reduced to divergent components
    pub conflicts_only: bool,
    pub breadcrumb: String,
    pub summary: ComparisonSummary,
    /// The location being rendered
    pub location: Location<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaf: Option<LeafView<'a>>,
    #[serde(skip_serializing_if = "no_reports")]
    pub diff_reports: &'a [DiffReport],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<&'a [QualityResult]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadataView {
    pub request_id: String,
    pub compared_at: String,
    pub tool_name: String,
    pub tool_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_sbom: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentView {
    pub index: usize,
    pub name: String,
    pub target: bool,
}

fn no_reports(reports: &&[DiffReport]) -> bool {
    reports.is_empty()
}

impl ComparisonReport<'_> {
    /// Display name for an appearance index, falling back to `#index`
    pub fn document_name(&self, index: usize) -> String {
        self.documents
            .get(index)
            .map(|document| document.name.clone())
            .unwrap_or_else(|| format!("#{}", index))
    }
}
