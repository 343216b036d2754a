use crate::application::read_models::ComparisonReport;
use crate::comparison::domain::{Attributes, ComponentVersion, DiffReport, IdentifierKind};
use crate::comparison::services::{LeafView, Location};
use crate::ports::outbound::ComparisonFormatter;
use crate::shared::Result;

/// Marker for "observed in this document"
const PRESENT: &str = "✔";
/// Marker for "not observed in this document"
const ABSENT: &str = "✘";
/// Marker for identifiers that carry no occurrence data
const UNKNOWN: &str = "-";

const SUMMARY_HEADER: &str = "| Metric | Value |\n|--------|-------|\n";

/// MarkdownFormatter adapter for human-readable comparison reports
///
/// Renders the documents, a summary table and the current navigation
/// location, with a per-document presence matrix wherever occurrence data
/// exists.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// `| A | B |` header plus separator for the given columns
    fn table_header(columns: &[String]) -> String {
        let header: Vec<String> = columns
            .iter()
            .map(|c| Self::escape_markdown_table_cell(c))
            .collect();
        let separator: Vec<String> = columns.iter().map(|c| "-".repeat(c.chars().count().max(3))).collect();
        format!("| {} |\n|{}|\n", header.join(" | "), separator.join("|"))
    }

    /// Presence cells for each compared document
    fn presence_cells(appearances: Option<&[usize]>, document_count: usize) -> Vec<&'static str> {
        (0..document_count)
            .map(|index| match appearances {
                Some(list) if list.contains(&index) => PRESENT,
                Some(_) => ABSENT,
                None => UNKNOWN,
            })
            .collect()
    }

    fn presence_columns(report: &ComparisonReport<'_>, first: &str) -> Vec<String> {
        std::iter::once(first.to_string())
            .chain(report.documents.iter().map(|d| d.name.clone()))
            .collect()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, report: &ComparisonReport<'_>) {
        output.push_str("# SBOM Comparison Report\n\n");
        output.push_str(&format!("**Location:** {}\n\n", report.breadcrumb));
        output.push_str(&format!(
            "Compared at {} by {} {} (request `{}`)\n\n",
            report.metadata.compared_at,
            report.metadata.tool_name,
            report.metadata.tool_version,
            report.metadata.request_id
        ));
    }

    fn render_documents(&self, output: &mut String, report: &ComparisonReport<'_>) {
        output.push_str("## Documents\n\n");
        output.push_str("| # | Document | Role |\n|---|----------|------|\n");
        for document in &report.documents {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                document.index,
                Self::escape_markdown_table_cell(&document.name),
                if document.target { "Target" } else { "Compared" }
            ));
        }
        output.push('\n');
    }

    fn render_summary(&self, output: &mut String, report: &ComparisonReport<'_>) {
        let summary = &report.summary;
        output.push_str("## Summary\n\n");
        output.push_str(SUMMARY_HEADER);
        output.push_str(&format!("| Documents | {} |\n", summary.document_count));
        output.push_str(&format!("| Components | {} |\n", summary.total_components));
        output.push_str(&format!(
            "| Divergent components | {} |\n",
            summary.divergent_components
        ));
        output.push_str(&format!(
            "| Components shown | {}{} |\n",
            summary.shown_components,
            if report.conflicts_only { " (conflicts only)" } else { "" }
        ));
        output.push_str(&format!("| Versions shown | {} |\n", summary.shown_versions));
        output.push_str(&format!("| SBOM conflicts | {} |\n", summary.sbom_conflicts));
        output.push_str(&format!(
            "| Component conflicts | {} |\n\n",
            summary.component_conflicts
        ));
    }

    fn render_location(&self, output: &mut String, report: &ComparisonReport<'_>) {
        match &report.location {
            Location::Components { components } => {
                output.push_str("## Components\n\n");
                if components.is_empty() {
                    output.push_str(if report.conflicts_only {
                        "_No divergent components._\n\n"
                    } else {
                        "_No components._\n\n"
                    });
                }
                for (name, versions) in components.iter() {
                    output.push_str(&format!("### {}\n\n", name));
                    self.render_version_matrix(output, report, versions);
                }
            }
            Location::Versions { name, versions } => {
                output.push_str(&format!("## {}\n\n", name));
                self.render_version_matrix(output, report, versions);
            }
            Location::Version { version } => {
                output.push_str(&format!(
                    "## {} {}\n\n",
                    version.component_name,
                    version.version_label()
                ));
                self.render_version_matrix(output, report, std::slice::from_ref(*version));
            }
            Location::Pool { kind, entries } => {
                output.push_str(&format!("## {}\n\n", kind.label()));
                let rows: Vec<(&str, &Attributes)> =
                    entries.iter().map(|(value, attrs)| (value.as_str(), attrs)).collect();
                self.render_identifier_matrix(output, report, &rows);
            }
            Location::Identifier { value, attributes } => {
                output.push_str(&format!("## {}\n\n", value));
                self.render_attributes(output, attributes);
                self.render_identifier_matrix(output, report, &[(*value, *attributes)]);
            }
        }

        if let Some(leaf) = &report.leaf {
            self.render_leaf(output, report, leaf);
        }
    }

    fn render_version_matrix(
        &self,
        output: &mut String,
        report: &ComparisonReport<'_>,
        versions: &[ComponentVersion],
    ) {
        output.push_str(&Self::table_header(&Self::presence_columns(report, "Version")));
        for version in versions {
            let cells = Self::presence_cells(Some(version.appearances.as_slice()), report.documents.len());
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(version.version_label()),
                cells.join(" | ")
            ));
        }
        output.push('\n');
    }

    fn render_identifier_matrix(
        &self,
        output: &mut String,
        report: &ComparisonReport<'_>,
        rows: &[(&str, &Attributes)],
    ) {
        if rows.is_empty() {
            output.push_str("_None._\n\n");
            return;
        }
        output.push_str(&Self::table_header(&Self::presence_columns(report, "Identifier")));
        for (value, attributes) in rows {
            let cells =
                Self::presence_cells(attributes.appearances.as_deref(), report.documents.len());
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(value),
                cells.join(" | ")
            ));
        }
        output.push('\n');
    }

    fn render_attributes(&self, output: &mut String, attributes: &Attributes) {
        let fields = [
            ("Name", &attributes.name),
            ("Version", &attributes.version),
            ("Publisher", &attributes.publisher),
            ("UID", &attributes.uid),
            ("UID type", &attributes.uid_type),
        ];
        let mut any = false;
        for (label, value) in fields {
            if let Some(value) = value {
                output.push_str(&format!("- **{}:** {}\n", label, value));
                any = true;
            }
        }
        if any {
            output.push('\n');
        }
    }

    /// Flattened identifier lists for the current location
    fn render_leaf(&self, output: &mut String, report: &ComparisonReport<'_>, leaf: &LeafView<'_>) {
        for kind in IdentifierKind::ALL {
            let entries = leaf.entries(kind);
            if entries.is_empty() {
                continue;
            }
            output.push_str(&format!("### {}\n\n", kind.label()));
            let rows: Vec<(&str, &Attributes)> =
                entries.iter().map(|entry| (entry.value, entry.attributes)).collect();
            self.render_identifier_matrix(output, report, &rows);
        }
    }

    fn render_diff_reports(&self, output: &mut String, reports: &[DiffReport]) {
        if reports.iter().all(|report| !report.has_conflicts()) {
            return;
        }

        output.push_str("## Reported Conflicts\n\n");
        for (index, report) in reports.iter().enumerate() {
            if !report.has_conflicts() {
                continue;
            }
            output.push_str(&format!("### Report {}\n\n", index + 1));

            let sbom_tags: Vec<&str> = report
                .sbom_conflict
                .conflict_types
                .iter()
                .map(|tag| tag.as_str())
                .collect();
            if !sbom_tags.is_empty() {
                output.push_str(&format!("**Document conflicts:** {}\n\n", sbom_tags.join(", ")));
            }

            if !report.component_conflicts.is_empty() {
                output.push_str("| Component | Conflict Types |\n|-----------|----------------|\n");
                for conflict in &report.component_conflicts {
                    let tags: Vec<&str> = conflict.conflict_types.iter().map(|t| t.as_str()).collect();
                    output.push_str(&format!(
                        "| {} | {} |\n",
                        Self::escape_markdown_table_cell(conflict.component_name().unwrap_or("N/A")),
                        tags.join(", ")
                    ));
                }
                output.push('\n');
            }
        }
    }

    fn render_quality(&self, output: &mut String, report: &ComparisonReport<'_>) {
        let Some(results) = report.quality else {
            return;
        };

        output.push_str("## Quality Metrics\n\n");
        output.push_str("| Document | Status |\n|----------|--------|\n");
        for result in results {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::escape_markdown_table_cell(result.document.as_str()),
                if result.is_available() { "Available" } else { "Unavailable" }
            ));
        }
        output.push('\n');

        for result in results {
            if let Some(metrics) = &result.metrics {
                let pretty = serde_json::to_string_pretty(metrics).unwrap_or_else(|_| metrics.to_string());
                output.push_str(&format!("### {}\n\n```json\n{}\n```\n\n", result.document, pretty));
            }
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonFormatter for MarkdownFormatter {
    fn format(&self, report: &ComparisonReport<'_>) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);
        self.render_documents(&mut output, report);
        self.render_summary(&mut output, report);
        self.render_location(&mut output, report);
        self.render_diff_reports(&mut output, report.diff_reports);
        self.render_quality(&mut output, report);

        Ok(output)
    }
}
