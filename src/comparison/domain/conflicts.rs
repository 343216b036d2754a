use super::identifier::Attributes;
use serde::{Deserialize, Serialize};

/// Document-level conflict tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SbomConflictType {
    OriginFormatMismatch,
    SchemaVersionMismatch,
    SerialNumberMismatch,
    TimestampMismatch,
    SupplierMismatch,
    AuthorMismatch,
    SbomVersionMismatch,
    /// A tag this client does not know about
    #[serde(other)]
    Unrecognized,
}

/// Component-level conflict tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentConflictType {
    ComponentNotFound,
    ComponentNameMismatch,
    ComponentPublisherMismatch,
    ComponentVersionMismatch,
    ComponentCpeMismatch,
    ComponentPurlMismatch,
    ComponentSwidMismatch,
    ComponentHashMismatch,
    ComponentLicenseMismatch,
    ComponentUnknownMismatch,
    #[serde(other)]
    Unrecognized,
}

impl SbomConflictType {
    /// Wire name of the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            SbomConflictType::OriginFormatMismatch => "ORIGIN_FORMAT_MISMATCH",
            SbomConflictType::SchemaVersionMismatch => "SCHEMA_VERSION_MISMATCH",
            SbomConflictType::SerialNumberMismatch => "SERIAL_NUMBER_MISMATCH",
            SbomConflictType::TimestampMismatch => "TIMESTAMP_MISMATCH",
            SbomConflictType::SupplierMismatch => "SUPPLIER_MISMATCH",
            SbomConflictType::AuthorMismatch => "AUTHOR_MISMATCH",
            SbomConflictType::SbomVersionMismatch => "SBOM_VERSION_MISMATCH",
            SbomConflictType::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl ComponentConflictType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentConflictType::ComponentNotFound => "COMPONENT_NOT_FOUND",
            ComponentConflictType::ComponentNameMismatch => "COMPONENT_NAME_MISMATCH",
            ComponentConflictType::ComponentPublisherMismatch => "COMPONENT_PUBLISHER_MISMATCH",
            ComponentConflictType::ComponentVersionMismatch => "COMPONENT_VERSION_MISMATCH",
            ComponentConflictType::ComponentCpeMismatch => "COMPONENT_CPE_MISMATCH",
            ComponentConflictType::ComponentPurlMismatch => "COMPONENT_PURL_MISMATCH",
            ComponentConflictType::ComponentSwidMismatch => "COMPONENT_SWID_MISMATCH",
            ComponentConflictType::ComponentHashMismatch => "COMPONENT_HASH_MISMATCH",
            ComponentConflictType::ComponentLicenseMismatch => "COMPONENT_LICENSE_MISMATCH",
            ComponentConflictType::ComponentUnknownMismatch => "COMPONENT_UNKNOWN_MISMATCH",
            ComponentConflictType::Unrecognized => "UNRECOGNIZED",
        }
    }
}

/// Conflict summary between whole documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SbomConflict {
    #[serde(default)]
    pub conflict_types: Vec<SbomConflictType>,
    /// Raw conflict details as sent by the service
    #[serde(default)]
    pub conflicts: Vec<serde_json::Value>,
}

/// Conflict between two components; either side is absent when the
/// component was not found in that document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentConflict {
    #[serde(default)]
    pub component_a: Option<Attributes>,
    #[serde(default)]
    pub component_b: Option<Attributes>,
    #[serde(default)]
    pub conflict_types: Vec<ComponentConflictType>,
    #[serde(default)]
    pub conflicts: Vec<serde_json::Value>,
}

impl ComponentConflict {
    /// Name of whichever side is present, preferring `componentA`
    pub fn component_name(&self) -> Option<&str> {
        self.component_a
            .as_ref()
            .and_then(|c| c.name.as_deref())
            .or_else(|| self.component_b.as_ref().and_then(|c| c.name.as_deref()))
    }
}

/// One SBOM-level conflict plus the component conflicts found alongside it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffReport {
    #[serde(default)]
    pub sbom_conflict: SbomConflict,
    #[serde(default)]
    pub component_conflicts: Vec<ComponentConflict>,
}

impl DiffReport {
    pub fn has_conflicts(&self) -> bool {
        !self.sbom_conflict.conflict_types.is_empty() || !self.component_conflicts.is_empty()
    }
}
