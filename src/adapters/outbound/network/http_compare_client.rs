use super::http_support::{build_client, excerpt, join_endpoint};
use crate::comparison::domain::Comparison;
use crate::ports::outbound::{ComparePayload, CompareService};
use crate::shared::error::CompareError;
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

const COMPARE_PATH: &str = "sboms/compare";

/// HttpCompareClient adapter for the remote comparison service
///
/// Posts the payload as JSON to `{base_url}/sboms/compare`. Requests are
/// made once; there is no retry.
pub struct HttpCompareClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpCompareClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: join_endpoint(base_url, COMPARE_PATH)?,
        })
    }

    /// Turns a status and body into a comparison or a typed error
    pub(crate) fn decode_response(endpoint: &str, status: StatusCode, body: &str) -> Result<Comparison> {
        if !status.is_success() {
            return Err(CompareError::Request {
                endpoint: endpoint.to_string(),
                details: format!("HTTP {}: {}", status, excerpt(body)),
            }
            .into());
        }

        serde_json::from_str(body).map_err(|e| {
            CompareError::MalformedResponse {
                endpoint: endpoint.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl CompareService for HttpCompareClient {
    async fn compare(&self, payload: &ComparePayload) -> Result<Comparison> {
        tracing::debug!(endpoint = %self.endpoint, "posting compare request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| CompareError::Request {
                endpoint: self.endpoint.clone(),
                details: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| CompareError::Request {
            endpoint: self.endpoint.clone(),
            details: format!("Failed to read response body: {}", e),
        })?;

        tracing::debug!(endpoint = %self.endpoint, %status, bytes = body.len(), "compare response received");
        Self::decode_response(&self.endpoint, status, &body)
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
