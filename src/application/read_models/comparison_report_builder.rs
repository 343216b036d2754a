//! Builder for constructing ComparisonReport from a compare response

use super::comparison_report::{ComparisonReport, DocumentView, ReportMetadataView};
use crate::application::dto::{ComparisonResponse, QualityResult};
use crate::comparison::services::{ComparisonSummary, ComparisonView, Location, NavigationState};

/// Name reported in report metadata
const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct ComparisonReportBuilder;

impl ComparisonReportBuilder {
    /// Builds a report for the navigation state's current location.
    ///
    /// The summary always describes the root view (index 0), whatever
    /// location is being rendered.
    pub fn build<'a>(
        response: &'a ComparisonResponse,
        navigation: &NavigationState<'a>,
        conflicts_only: bool,
        quality: Option<&'a [QualityResult]>,
    ) -> ComparisonReport<'a> {
        let document_count = response.document_count();
        let summary = match &navigation.locations()[0] {
            Location::Components { components } => {
                ComparisonSummary::from_view(&response.comparison, components, document_count)
            }
            // Index 0 is always the component map
            _ => ComparisonSummary::from_view(
                &response.comparison,
                &ComparisonView::full(&response.comparison),
                document_count,
            ),
        };

        ComparisonReport {
            metadata: Self::build_metadata(response),
            documents: Self::build_documents(response),
            conflicts_only,
            breadcrumb: navigation.breadcrumb(),
            summary,
            location: navigation.current().clone(),
            leaf: navigation.leaf_view().cloned(),
            diff_reports: &response.comparison.diff_reports,
            quality,
        }
    }

    fn build_metadata(response: &ComparisonResponse) -> ReportMetadataView {
        ReportMetadataView {
            request_id: response.request_id.to_string(),
            compared_at: response.compared_at.to_rfc3339(),
            tool_name: TOOL_NAME.to_string(),
            tool_version: TOOL_VERSION.to_string(),
            target_sbom: response.comparison.target_sbom.clone(),
        }
    }

    fn build_documents(response: &ComparisonResponse) -> Vec<DocumentView> {
        response
            .documents
            .iter()
            .enumerate()
            .map(|(index, document)| DocumentView {
                index,
                name: document.to_string(),
                target: index == 0,
            })
            .collect()
    }
}
