//! Drill-down navigation over a comparison.
//!
//! The state is a stack of locations paired one-to-one with breadcrumb
//! titles. Index 0 is always the component map titled "Components".

use super::conflict_filter::ComparisonView;
use crate::comparison::domain::{Attributes, ComponentVersion, IdentifierKind, IdentifierPool, IdentifierPools};
use crate::shared::error::CompareError;
use crate::shared::Result;
use serde::Serialize;

/// Breadcrumb title of the root location
pub const ROOT_TITLE: &str = "Components";

/// A place in the comparison hierarchy
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "location", rename_all = "camelCase")]
pub enum Location<'a> {
    /// Component name -> versions (full or conflicts-only)
    Components { components: ComparisonView<'a> },
    /// Every observed version of one component
    Versions {
        name: &'a str,
        versions: &'a [ComponentVersion],
    },
    /// One component version and its identifier pools
    Version { version: &'a ComponentVersion },
    /// All identifiers of one kind
    Pool {
        kind: IdentifierKind,
        entries: &'a IdentifierPool,
    },
    /// A single identifier occurrence
    Identifier {
        value: &'a str,
        attributes: &'a Attributes,
    },
}

impl<'a> Location<'a> {
    /// Identifier pools held directly by this location, if it has any
    fn pools(&self) -> Option<&'a IdentifierPools> {
        match *self {
            Location::Version { version } => Some(&version.identifiers),
            Location::Identifier { attributes, .. } => Some(&attributes.identifiers),
            _ => None,
        }
    }
}

/// One identifier in a flattened leaf list
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LeafEntry<'a> {
    pub value: &'a str,
    pub attributes: &'a Attributes,
}

/// Flattened purl/cpe/swid lists for the location being browsed
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LeafView<'a> {
    pub purls: Vec<LeafEntry<'a>>,
    pub cpes: Vec<LeafEntry<'a>>,
    pub swids: Vec<LeafEntry<'a>>,
}

impl<'a> LeafView<'a> {
    /// Derives the leaf lists from any location shaped like an identifier
    /// holder (a component version or an identifier with nested pools).
    /// Other locations yield `None`.
    pub fn derive(location: &Location<'a>) -> Option<Self> {
        let pools = location.pools()?;
        let flatten = |kind| {
            pools
                .pool(kind)
                .iter()
                .map(|(value, attributes)| LeafEntry {
                    value: value.as_str(),
                    attributes,
                })
                .collect()
        };

        Some(Self {
            purls: flatten(IdentifierKind::Purl),
            cpes: flatten(IdentifierKind::Cpe),
            swids: flatten(IdentifierKind::Swid),
        })
    }

    pub fn entries(&self, kind: IdentifierKind) -> &[LeafEntry<'a>] {
        match kind {
            IdentifierKind::Purl => &self.purls,
            IdentifierKind::Cpe => &self.cpes,
            IdentifierKind::Swid => &self.swids,
        }
    }
}

/// Breadcrumb stack over a comparison view
#[derive(Debug, Clone)]
pub struct NavigationState<'a> {
    locations: Vec<Location<'a>>,
    titles: Vec<String>,
    leaf: Option<LeafView<'a>>,
}

impl<'a> NavigationState<'a> {
    pub fn new(root: ComparisonView<'a>) -> Self {
        Self {
            locations: vec![Location::Components { components: root }],
            titles: vec![ROOT_TITLE.to_string()],
            leaf: None,
        }
    }

    /// Drops every drill-down level and installs a new root
    pub fn reset(&mut self, root: ComparisonView<'a>) {
        *self = Self::new(root);
    }

    /// Pushes a location and its breadcrumb title
    pub fn descend(&mut self, location: Location<'a>, title: impl Into<String>) {
        self.locations.push(location);
        self.titles.push(title.into());
        self.refresh_leaf();
    }

    /// Truncates both stacks to `to_index + 1` entries.
    ///
    /// Only moves up: asking for the current index or anything deeper leaves
    /// the state unchanged. Returns whether anything was popped.
    pub fn ascend(&mut self, to_index: usize) -> bool {
        if to_index >= self.deepest_index() {
            return false;
        }
        self.locations.truncate(to_index + 1);
        self.titles.truncate(to_index + 1);
        self.refresh_leaf();
        true
    }

    pub fn current(&self) -> &Location<'a> {
        // The stacks are never empty
        &self.locations[self.deepest_index()]
    }

    pub fn locations(&self) -> &[Location<'a>] {
        &self.locations
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn depth(&self) -> usize {
        self.locations.len()
    }

    pub fn deepest_index(&self) -> usize {
        self.locations.len() - 1
    }

    /// Breadcrumb trail, e.g. `Components / openssl / 3.0.2`
    pub fn breadcrumb(&self) -> String {
        self.titles.join(" / ")
    }

    pub fn leaf_view(&self) -> Option<&LeafView<'a>> {
        self.leaf.as_ref()
    }

    fn refresh_leaf(&mut self) {
        self.leaf = LeafView::derive(self.current());
    }
}

/// Named drill-down steps for the common paths through a comparison
impl<'a> NavigationState<'a> {
    /// From the component map into one component's versions
    pub fn descend_into_component(&mut self, name: &str) -> Result<()> {
        let Location::Components { components } = self.current() else {
            return Err(self.wrong_level("a component"));
        };
        let (name, versions) = components.get_entry(name).ok_or_else(|| {
            CompareError::validation(format!("Component '{}' is not in the current view", name))
        })?;
        self.descend(Location::Versions { name, versions }, name);
        Ok(())
    }

    /// From a component's versions into one version
    pub fn descend_into_version(&mut self, version: &str) -> Result<()> {
        let Location::Versions { name, versions } = *self.current() else {
            return Err(self.wrong_level("a version"));
        };
        let found = versions
            .iter()
            .find(|candidate| candidate.version_label() == version)
            .ok_or_else(|| {
                CompareError::validation(format!(
                    "Component '{}' has no version '{}'",
                    name, version
                ))
            })?;
        self.descend(Location::Version { version: found }, found.version_label());
        Ok(())
    }

    /// From a version or identifier into one of its identifier pools
    pub fn descend_into_pool(&mut self, kind: IdentifierKind) -> Result<()> {
        let pools = self
            .current()
            .pools()
            .ok_or_else(|| self.wrong_level("an identifier pool"))?;
        self.descend(
            Location::Pool {
                kind,
                entries: pools.pool(kind),
            },
            kind.label(),
        );
        Ok(())
    }

    /// From a pool into one identifier
    pub fn descend_into_identifier(&mut self, value: &str) -> Result<()> {
        let Location::Pool { kind, entries } = *self.current() else {
            return Err(self.wrong_level("an identifier"));
        };
        let (value, attributes) = entries.get_key_value(value).ok_or_else(|| {
            CompareError::validation(format!("No {} entry '{}'", kind.label(), value))
        })?;
        self.descend(
            Location::Identifier {
                value: value.as_str(),
                attributes,
            },
            value.as_str(),
        );
        Ok(())
    }

    fn wrong_level(&self, what: &str) -> anyhow::Error {
        CompareError::validation(format!(
            "Cannot select {} from '{}'",
            what,
            self.breadcrumb()
        ))
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::domain::Comparison;

    fn sample() -> Comparison {
        let mut comparison = Comparison::default();
        comparison.comparisons.insert(
            "openssl".to_string(),
            vec![
                ComponentVersion::new("openssl", Some("3.0.1"), vec![0])
                    .with_identifier(
                        IdentifierKind::Purl,
                        "pkg:generic/openssl@3.0.1",
                        Attributes::with_appearances(vec![0]),
                    )
                    .with_identifier(
                        IdentifierKind::Cpe,
                        "cpe:2.3:a:openssl:openssl:3.0.1",
                        Attributes::default(),
                    ),
                ComponentVersion::new("openssl", Some("3.0.2"), vec![1]),
            ],
        );
        comparison.comparisons.insert(
            "zlib".to_string(),
            vec![ComponentVersion::new("zlib", Some("1.3"), vec![0, 1])],
        );
        comparison
    }

    fn assert_balanced(nav: &NavigationState<'_>) {
        assert_eq!(nav.locations().len(), nav.titles().len());
        assert!(nav.depth() >= 1);
        assert_eq!(nav.titles()[0], ROOT_TITLE);
        assert!(matches!(nav.locations()[0], Location::Components { .. }));
    }

    #[test]
    fn test_new_state_is_root_only() {
        let comparison = sample();
        let nav = NavigationState::new(ComparisonView::full(&comparison));
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.breadcrumb(), "Components");
        assert!(nav.leaf_view().is_none());
        assert_balanced(&nav);
    }

    #[test]
    fn test_drill_down_to_version_derives_leaf_view() {
        let comparison = sample();
        let mut nav = NavigationState::new(ComparisonView::full(&comparison));

        nav.descend_into_component("openssl").unwrap();
        assert!(nav.leaf_view().is_none());
        nav.descend_into_version("3.0.1").unwrap();

        assert_eq!(nav.depth(), 3);
        assert_eq!(nav.breadcrumb(), "Components / openssl / 3.0.1");
        let leaf = nav.leaf_view().unwrap();
        assert_eq!(leaf.purls.len(), 1);
        assert_eq!(leaf.purls[0].value, "pkg:generic/openssl@3.0.1");
        assert_eq!(leaf.entries(IdentifierKind::Cpe).len(), 1);
        assert!(leaf.swids.is_empty());
        assert_balanced(&nav);
    }

    #[test]
    fn test_leaf_view_follows_shape_not_depth() {
        let comparison = sample();
        let version = &comparison.comparisons["zlib"][0];
        let mut nav = NavigationState::new(ComparisonView::full(&comparison));

        // A version pushed straight under the root still gets a leaf view
        nav.descend(Location::Version { version }, "zlib 1.3");
        assert_eq!(nav.depth(), 2);
        assert!(nav.leaf_view().is_some());
    }

    #[test]
    fn test_drill_into_pool_and_identifier() {
        let comparison = sample();
        let mut nav = NavigationState::new(ComparisonView::full(&comparison));
        nav.descend_into_component("openssl").unwrap();
        nav.descend_into_version("3.0.1").unwrap();
        nav.descend_into_pool(IdentifierKind::Purl).unwrap();
        assert!(nav.leaf_view().is_none());

        nav.descend_into_identifier("pkg:generic/openssl@3.0.1").unwrap();
        assert_eq!(
            nav.breadcrumb(),
            "Components / openssl / 3.0.1 / PURLs / pkg:generic/openssl@3.0.1"
        );
        match nav.current() {
            Location::Identifier { attributes, .. } => {
                assert_eq!(attributes.appearances, Some(vec![0]));
            }
            other => panic!("unexpected location: {:?}", other),
        }
        // Identifiers hold (possibly empty) nested pools
        assert!(nav.leaf_view().is_some());
        assert_balanced(&nav);
    }

    #[test]
    fn test_ascend_truncates_both_stacks() {
        let comparison = sample();
        let mut nav = NavigationState::new(ComparisonView::full(&comparison));
        nav.descend_into_component("openssl").unwrap();
        nav.descend_into_version("3.0.1").unwrap();

        assert!(nav.ascend(1));
        assert_eq!(nav.depth(), 2);
        assert_eq!(nav.titles(), &["Components".to_string(), "openssl".to_string()]);
        assert!(nav.leaf_view().is_none());

        assert!(nav.ascend(0));
        assert_eq!(nav.depth(), 1);
        assert_balanced(&nav);
    }

    #[test]
    fn test_ascend_to_current_or_deeper_is_noop() {
        let comparison = sample();
        let mut nav = NavigationState::new(ComparisonView::full(&comparison));
        nav.descend_into_component("openssl").unwrap();
        let before = nav.titles().to_vec();

        assert!(!nav.ascend(1));
        assert!(!nav.ascend(7));
        assert_eq!(nav.titles(), before.as_slice());
        assert_eq!(nav.depth(), 2);
    }

    #[test]
    fn test_ascend_on_root_is_noop() {
        let comparison = sample();
        let mut nav = NavigationState::new(ComparisonView::full(&comparison));
        assert!(!nav.ascend(0));
        assert_balanced(&nav);
    }

    #[test]
    fn test_reset_returns_to_single_root() {
        let comparison = sample();
        let mut nav = NavigationState::new(ComparisonView::full(&comparison));
        nav.descend_into_component("zlib").unwrap();
        nav.descend_into_version("1.3").unwrap();

        nav.reset(crate::comparison::services::filter_conflicts(&comparison, 2));
        assert_eq!(nav.depth(), 1);
        assert!(nav.leaf_view().is_none());
        match nav.current() {
            Location::Components { components } => assert_eq!(components.keys(), vec!["openssl"]),
            other => panic!("unexpected location: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_component_is_rejected_without_moving() {
        let comparison = sample();
        let mut nav = NavigationState::new(ComparisonView::full(&comparison));
        let err = nav.descend_into_component("missing").unwrap_err();
        assert!(err.to_string().contains("not in the current view"));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_wrong_level_is_rejected() {
        let comparison = sample();
        let mut nav = NavigationState::new(ComparisonView::full(&comparison));
        let err = nav.descend_into_version("1.3").unwrap_err();
        assert!(err.to_string().contains("Cannot select a version from 'Components'"));
        assert!(nav.descend_into_pool(IdentifierKind::Swid).is_err());
        assert_balanced(&nav);
    }

    #[test]
    fn test_random_walk_keeps_stacks_balanced() {
        let comparison = sample();
        let version = &comparison.comparisons["openssl"][0];
        let mut nav = NavigationState::new(ComparisonView::full(&comparison));

        for step in 0..40usize {
            if step % 3 == 2 {
                nav.ascend(step % 4);
            } else {
                nav.descend(Location::Version { version }, format!("step {}", step));
            }
            assert_balanced(&nav);
        }
    }
}
