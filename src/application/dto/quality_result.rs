use crate::comparison::domain::DocumentRef;
use serde::Serialize;

/// Quality metrics for one document; `None` when fetching or analysing it failed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityResult {
    pub document: DocumentRef,
    pub metrics: Option<serde_json::Value>,
}

impl QualityResult {
    pub fn is_available(&self) -> bool {
        self.metrics.is_some()
    }
}
