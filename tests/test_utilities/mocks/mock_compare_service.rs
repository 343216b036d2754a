use async_trait::async_trait;
use sbom_compare::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock CompareService that records every payload it receives
#[derive(Clone)]
pub struct MockCompareService {
    response: std::result::Result<Comparison, String>,
    payloads: Arc<Mutex<Vec<ComparePayload>>>,
}

impl MockCompareService {
    pub fn returning(comparison: Comparison) -> Self {
        Self {
            response: Ok(comparison),
            payloads: Arc::default(),
        }
    }

    /// Answers with a raw JSON body, as the HTTP client would decode it
    pub fn returning_json(body: &str) -> Self {
        Self::returning(serde_json::from_str(body).unwrap())
    }

    pub fn with_failure(details: &str) -> Self {
        Self {
            response: Err(details.to_string()),
            payloads: Arc::default(),
        }
    }

    pub fn payloads(&self) -> Vec<ComparePayload> {
        self.payloads.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }
}

#[async_trait]
impl CompareService for MockCompareService {
    async fn compare(&self, payload: &ComparePayload) -> Result<Comparison> {
        self.payloads.lock().unwrap().push(payload.clone());
        self.response.clone().map_err(|details| {
            CompareError::Request {
                endpoint: self.endpoint().to_string(),
                details,
            }
            .into()
        })
    }

    fn endpoint(&self) -> &str {
        "mock://svip/sboms/compare"
    }
}
