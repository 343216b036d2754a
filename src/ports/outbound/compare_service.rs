use crate::comparison::domain::{Comparison, DocumentRef};
use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Request body for the comparison service.
///
/// Both fields are JSON-encoded string arrays, index-aligned, with the target
/// document at index 0. Index positions here are the document indices the
/// service uses in every `appearances` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparePayload {
    pub contents: String,
    pub file_names: String,
}

impl ComparePayload {
    /// Encodes already-ordered `(document, content)` pairs
    pub fn from_documents(documents: &[(DocumentRef, String)]) -> Result<Self> {
        let contents: Vec<&str> = documents.iter().map(|(_, content)| content.as_str()).collect();
        let file_names: Vec<&str> = documents.iter().map(|(doc, _)| doc.as_str()).collect();

        Ok(Self {
            contents: serde_json::to_string(&contents)?,
            file_names: serde_json::to_string(&file_names)?,
        })
    }

    pub fn decoded_file_names(&self) -> Result<Vec<String>> {
        Ok(serde_json::from_str(&self.file_names)?)
    }

    pub fn decoded_contents(&self) -> Result<Vec<String>> {
        Ok(serde_json::from_str(&self.contents)?)
    }
}

/// CompareService port for the remote comparison engine
///
/// The engine receives every document at once and answers with the merged
/// comparison. Implementations report transport problems and non-success
/// statuses as `CompareError::Request`, and payloads that are not a
/// comparison as `CompareError::MalformedResponse`.
#[async_trait]
pub trait CompareService: Send + Sync {
    async fn compare(&self, payload: &ComparePayload) -> Result<Comparison>;

    /// Endpoint description used in error messages
    fn endpoint(&self) -> &str;
}
