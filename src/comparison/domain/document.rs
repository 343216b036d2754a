use crate::shared::error::CompareError;
use crate::shared::Result;
use serde::Serialize;
use std::collections::HashSet;

/// Maximum length for a document reference (security limit)
const MAX_DOCUMENT_REF_LENGTH: usize = 4096;

/// NewType wrapper for a compared document's path or identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DocumentRef(String);

impl DocumentRef {
    pub fn new(reference: impl Into<String>) -> Result<Self> {
        let reference = reference.into();

        if reference.trim().is_empty() {
            return Err(CompareError::validation("Document reference cannot be empty").into());
        }

        if reference.len() > MAX_DOCUMENT_REF_LENGTH {
            return Err(CompareError::validation(format!(
                "Document reference is too long ({} bytes). Maximum allowed: {} bytes",
                reference.len(),
                MAX_DOCUMENT_REF_LENGTH
            ))
            .into());
        }

        Ok(Self(reference))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The ordered documents of one compare operation.
///
/// Index 0 is always the target; the others follow in the order the caller
/// supplied them. This is the order in which `appearances` indices returned by
/// the comparison service are interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSet {
    target: DocumentRef,
    others: Vec<DocumentRef>,
}

impl DocumentSet {
    /// Creates a document set, rejecting inputs that would make the
    /// appearance indices ambiguous.
    ///
    /// # Errors
    /// - `others` is empty
    /// - the target is also listed in `others`
    /// - `others` contains the same document twice
    pub fn new(target: DocumentRef, others: Vec<DocumentRef>) -> Result<Self> {
        if others.is_empty() {
            return Err(CompareError::validation(
                "At least one document must be compared against the target",
            )
            .into());
        }

        if others.contains(&target) {
            return Err(CompareError::validation(format!(
                "Target document '{}' must not also be listed as a compared document",
                target
            ))
            .into());
        }

        let mut seen = HashSet::with_capacity(others.len());
        for other in &others {
            if !seen.insert(other) {
                return Err(CompareError::validation(format!(
                    "Document '{}' is listed more than once",
                    other
                ))
                .into());
            }
        }

        Ok(Self { target, others })
    }

    pub fn target(&self) -> &DocumentRef {
        &self.target
    }

    pub fn others(&self) -> &[DocumentRef] {
        &self.others
    }

    /// Total number of compared documents, target included
    pub fn len(&self) -> usize {
        self.others.len() + 1
    }

    /// Always false: a set holds at least a target and one other document
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates documents target-first, then others in caller order
    pub fn iter(&self) -> impl Iterator<Item = &DocumentRef> {
        std::iter::once(&self.target).chain(self.others.iter())
    }

    /// Returns the document at an appearance index
    pub fn get(&self, index: usize) -> Option<&DocumentRef> {
        match index {
            0 => Some(&self.target),
            n => self.others.get(n - 1),
        }
    }

    pub fn index_of(&self, document: &DocumentRef) -> Option<usize> {
        self.iter().position(|d| d == document)
    }
}
