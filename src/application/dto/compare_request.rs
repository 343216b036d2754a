use crate::comparison::domain::{DocumentRef, DocumentSet};
use crate::shared::Result;

/// CompareRequest - Input DTO for the compare use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareRequest {
    /// Target first, then the other documents in caller order
    pub documents: DocumentSet,
}

impl CompareRequest {
    /// Builds a request from raw document references
    ///
    /// # Errors
    /// Returns a validation error for empty references, a missing other
    /// document, or a document listed twice.
    pub fn new<S: Into<String>>(target: S, others: impl IntoIterator<Item = S>) -> Result<Self> {
        let target = DocumentRef::new(target)?;
        let others = others
            .into_iter()
            .map(DocumentRef::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            documents: DocumentSet::new(target, others)?,
        })
    }

    pub fn from_set(documents: DocumentSet) -> Self {
        Self { documents }
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}
