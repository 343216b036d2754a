use crate::comparison::domain::{Comparison, ComponentVersion};
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A borrowed view over a comparison's component map.
///
/// Either the full map or the divergent subset; keys keep the order the
/// service sent them in.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonView<'a> {
    entries: IndexMap<&'a str, &'a [ComponentVersion]>,
}

impl<'a> ComparisonView<'a> {
    /// View over every component in the comparison
    pub fn full(comparison: &'a Comparison) -> Self {
        Self {
            entries: comparison
                .comparisons
                .iter()
                .map(|(name, versions)| (name.as_str(), versions.as_slice()))
                .collect(),
        }
    }

    pub fn keys(&self) -> Vec<&'a str> {
        self.entries.keys().copied().collect()
    }

    pub fn view(&self) -> &IndexMap<&'a str, &'a [ComponentVersion]> {
        &self.entries
    }

    pub fn get(&self, component_name: &str) -> Option<&'a [ComponentVersion]> {
        self.entries.get(component_name).copied()
    }

    pub(crate) fn get_entry(&self, component_name: &str) -> Option<(&'a str, &'a [ComponentVersion])> {
        self.entries
            .get_key_value(component_name)
            .map(|(name, versions)| (*name, *versions))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a [ComponentVersion])> + '_ {
        self.entries.iter().map(|(name, versions)| (*name, *versions))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ComparisonView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, versions) in &self.entries {
            map.serialize_entry(name, versions)?;
        }
        map.end()
    }
}

/// A component version diverges when it, or any identifier directly under it
/// that carries occurrence data, was not seen in every document.
///
/// Identifiers without `appearances` are not evidence of divergence.
pub fn is_divergent_version(version: &ComponentVersion, document_count: usize) -> bool {
    version.appearances.len() < document_count
        || version
            .identifiers
            .iter()
            .any(|(_, _, attributes)| attributes.is_divergent(document_count))
}

pub fn is_divergent_component(versions: &[ComponentVersion], document_count: usize) -> bool {
    versions
        .iter()
        .any(|version| is_divergent_version(version, document_count))
}

/// Reduces a comparison to the components that differ across the documents.
///
/// Pure: the comparison is only borrowed and the same inputs always give the
/// same view.
pub fn filter_conflicts(comparison: &Comparison, document_count: usize) -> ComparisonView<'_> {
    ComparisonView {
        entries: comparison
            .comparisons
            .iter()
            .filter(|(_, versions)| is_divergent_component(versions, document_count))
            .map(|(name, versions)| (name.as_str(), versions.as_slice()))
            .collect(),
    }
}

/// Caller-held on/off switch for the conflicts-only view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConflictFilter {
    filtered: bool,
}

impl ConflictFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_filtered(&self) -> bool {
        self.filtered
    }

    /// Flips the switch and returns the resulting view: the divergent subset
    /// on the first call, the full comparison on the next.
    pub fn toggle<'a>(&mut self, comparison: &'a Comparison, document_count: usize) -> ComparisonView<'a> {
        self.filtered = !self.filtered;
        self.current_view(comparison, document_count)
    }

    /// The view matching the current switch position
    pub fn current_view<'a>(&self, comparison: &'a Comparison, document_count: usize) -> ComparisonView<'a> {
        if self.filtered {
            filter_conflicts(comparison, document_count)
        } else {
            ComparisonView::full(comparison)
        }
    }
}
