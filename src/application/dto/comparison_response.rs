use crate::comparison::domain::{Comparison, DocumentSet};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// ComparisonResponse - Output DTO of the compare use case
///
/// Owns the comparison returned by the service together with the document
/// order its `appearances` indices refer to.
#[derive(Debug, Clone)]
pub struct ComparisonResponse {
    /// Identifies this compare call in logs
    pub request_id: Uuid,
    pub compared_at: DateTime<Utc>,
    pub documents: DocumentSet,
    pub comparison: Comparison,
}

impl ComparisonResponse {
    pub fn new(request_id: Uuid, documents: DocumentSet, comparison: Comparison) -> Self {
        Self {
            request_id,
            compared_at: Utc::now(),
            documents,
            comparison,
        }
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }
}
