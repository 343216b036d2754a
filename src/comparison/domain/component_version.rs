use super::identifier::{Attributes, IdentifierKind, IdentifierPools};
use serde::{Deserialize, Serialize};

/// One observed version of a named component across the compared documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentVersion {
    #[serde(default)]
    pub component_name: String,
    #[serde(default)]
    pub component_version: Option<String>,
    #[serde(flatten)]
    pub identifiers: IdentifierPools,
    /// Document indices where this exact version was found
    #[serde(default)]
    pub appearances: Vec<usize>,
}

impl ComponentVersion {
    pub fn new(name: impl Into<String>, version: Option<&str>, appearances: Vec<usize>) -> Self {
        Self {
            component_name: name.into(),
            component_version: version.map(String::from),
            identifiers: IdentifierPools::new(),
            appearances,
        }
    }

    pub fn with_identifier(
        mut self,
        kind: IdentifierKind,
        value: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        self.identifiers.pool_mut(kind).insert(value.into(), attributes);
        self
    }

    /// Version string for display; versionless entries render as "N/A"
    pub fn version_label(&self) -> &str {
        self.component_version.as_deref().unwrap_or("N/A")
    }

    pub fn appears_in(&self, document_index: usize) -> bool {
        self.appearances.contains(&document_index)
    }

    /// True when this version was found in every compared document
    pub fn is_present_everywhere(&self, document_count: usize) -> bool {
        self.appearances.len() >= document_count
    }
}
