use async_trait::async_trait;
use sbom_compare::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock DocumentFetcher serving in-memory documents with optional delays
#[derive(Default, Clone)]
pub struct MockDocumentFetcher {
    documents: HashMap<String, (u64, std::result::Result<String, String>)>,
    completions: Arc<Mutex<Vec<String>>>,
}

impl MockDocumentFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(self, name: &str, content: &str) -> Self {
        self.with_delayed_document(name, 0, content)
    }

    pub fn with_delayed_document(mut self, name: &str, delay_ms: u64, content: &str) -> Self {
        self.documents
            .insert(name.to_string(), (delay_ms, Ok(content.to_string())));
        self
    }

    pub fn with_failure(mut self, name: &str, message: &str) -> Self {
        self.documents
            .insert(name.to_string(), (0, Err(message.to_string())));
        self
    }

    /// Documents in the order their fetches finished
    pub fn completion_order(&self) -> Vec<String> {
        self.completions.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentFetcher for MockDocumentFetcher {
    async fn fetch(&self, document: &DocumentRef) -> Result<String> {
        let (delay_ms, outcome) = self
            .documents
            .get(document.as_str())
            .cloned()
            .unwrap_or((0, Err(format!("{} not found", document))));
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        self.completions
            .lock()
            .unwrap()
            .push(document.as_str().to_string());
        outcome.map_err(|message| anyhow::anyhow!(message))
    }
}
