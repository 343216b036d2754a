use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The three kinds of unique identifier a component may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    Purl,
    Cpe,
    Swid,
}

impl IdentifierKind {
    /// All kinds, in display order
    pub const ALL: [IdentifierKind; 3] = [IdentifierKind::Purl, IdentifierKind::Cpe, IdentifierKind::Swid];

    /// Human-readable label used in breadcrumbs and reports
    pub fn label(self) -> &'static str {
        match self {
            IdentifierKind::Purl => "PURLs",
            IdentifierKind::Cpe => "CPEs",
            IdentifierKind::Swid => "SWIDs",
        }
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier values of one kind, keyed by identifier string
pub type IdentifierPool = IndexMap<String, Attributes>;

/// The purl/cpe/swid collections of a component version or identifier.
///
/// On the wire these are three sibling objects (`purls`, `cpes`, `swids`);
/// each may be absent, which reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdentifierPools {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    purls: IdentifierPool,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    cpes: IdentifierPool,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    swids: IdentifierPool,
}

impl IdentifierPools {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(&self, kind: IdentifierKind) -> &IdentifierPool {
        match kind {
            IdentifierKind::Purl => &self.purls,
            IdentifierKind::Cpe => &self.cpes,
            IdentifierKind::Swid => &self.swids,
        }
    }

    pub fn pool_mut(&mut self, kind: IdentifierKind) -> &mut IdentifierPool {
        match kind {
            IdentifierKind::Purl => &mut self.purls,
            IdentifierKind::Cpe => &mut self.cpes,
            IdentifierKind::Swid => &mut self.swids,
        }
    }

    /// Builder-style insert, mostly useful for constructing fixtures
    pub fn with(mut self, kind: IdentifierKind, value: impl Into<String>, attributes: Attributes) -> Self {
        self.pool_mut(kind).insert(value.into(), attributes);
        self
    }

    /// Iterates every identifier across the three pools, purls first
    pub fn iter(&self) -> impl Iterator<Item = (IdentifierKind, &String, &Attributes)> {
        IdentifierKind::ALL
            .into_iter()
            .flat_map(move |kind| self.pool(kind).iter().map(move |(value, attrs)| (kind, value, attrs)))
    }

    pub fn len(&self) -> usize {
        self.purls.len() + self.cpes.len() + self.swids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One identifier occurrence as reported by the comparison service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(flatten)]
    pub identifiers: IdentifierPools,
    /// Document indices this occurrence was seen in. `None` means the service
    /// sent no occurrence data, which is not the same as "seen nowhere".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearances: Option<Vec<usize>>,
}

impl Attributes {
    pub fn with_appearances(appearances: Vec<usize>) -> Self {
        Self {
            appearances: Some(appearances),
            ..Self::default()
        }
    }

    /// True when occurrence data is present and misses at least one document
    pub fn is_divergent(&self, document_count: usize) -> bool {
        self.appearances
            .as_ref()
            .is_some_and(|appearances| appearances.len() < document_count)
    }
}
