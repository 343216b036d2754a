use super::component_version::ComponentVersion;
use super::conflicts::DiffReport;
use super::identifier::IdentifierPools;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Component name -> every version observed for that name, in service order
pub type ComponentComparisons = IndexMap<String, Vec<ComponentVersion>>;

/// The result of one compare request.
///
/// Created fresh for every request and never mutated afterwards; filters and
/// navigation borrow from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    /// Label of the target document. Accepts a plain string or the full
    /// SBOM object the service sends under `targetSBOM`.
    #[serde(
        default,
        alias = "targetSBOM",
        deserialize_with = "target_label",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_sbom: Option<String>,
    #[serde(default)]
    pub diff_reports: Vec<DiffReport>,
    #[serde(default)]
    pub comparisons: ComponentComparisons,
}

/// Reduces the target field to a display label: the string itself, or an
/// SBOM object's `name`, falling back to its `serialNumber`
fn target_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(label)) => Some(label),
        Some(serde_json::Value::Object(sbom)) => ["name", "serialNumber"]
            .iter()
            .find_map(|key| sbom.get(*key).and_then(|v| v.as_str()))
            .map(String::from),
        _ => None,
    })
}

/// An `appearances` entry that cannot be a valid document index
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppearanceViolation {
    #[error("'{location}' lists document index {index}, but only {document_count} document(s) were compared")]
    OutOfRange {
        location: String,
        index: usize,
        document_count: usize,
    },
    #[error("'{location}' lists document index {index} more than once")]
    Duplicate { location: String, index: usize },
}

impl Comparison {
    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.comparisons.keys().map(String::as_str)
    }

    pub fn versions(&self, component_name: &str) -> Option<&[ComponentVersion]> {
        self.comparisons.get(component_name).map(Vec::as_slice)
    }

    pub fn version_count(&self) -> usize {
        self.comparisons.values().map(Vec::len).sum()
    }

    /// Checks that every appearance list holds unique indices in
    /// `[0, document_count)`, recursing through nested identifier pools.
    pub fn validate_appearances(&self, document_count: usize) -> Result<(), AppearanceViolation> {
        for (name, versions) in &self.comparisons {
            for version in versions {
                let location = format!("{}@{}", name, version.version_label());
                check_indices(&location, &version.appearances, document_count)?;
                check_pools(&location, &version.identifiers, document_count)?;
            }
        }
        Ok(())
    }
}

fn check_pools(
    parent: &str,
    pools: &IdentifierPools,
    document_count: usize,
) -> Result<(), AppearanceViolation> {
    for (_, value, attributes) in pools.iter() {
        let location = format!("{} > {}", parent, value);
        if let Some(appearances) = &attributes.appearances {
            check_indices(&location, appearances, document_count)?;
        }
        check_pools(&location, &attributes.identifiers, document_count)?;
    }
    Ok(())
}

fn check_indices(
    location: &str,
    appearances: &[usize],
    document_count: usize,
) -> Result<(), AppearanceViolation> {
    let mut seen = HashSet::with_capacity(appearances.len());
    for &index in appearances {
        if index >= document_count {
            return Err(AppearanceViolation::OutOfRange {
                location: location.to_string(),
                index,
                document_count,
            });
        }
        if !seen.insert(index) {
            return Err(AppearanceViolation::Duplicate {
                location: location.to_string(),
                index,
            });
        }
    }
    Ok(())
}
