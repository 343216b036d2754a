use super::http_support::{build_client, excerpt, join_endpoint};
use crate::ports::outbound::QualityService;
use crate::shared::error::CompareError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

const QUALITY_PATH: &str = "sboms/qa";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QualityRequest<'a> {
    contents: &'a str,
    file_name: &'a str,
}

/// HttpQualityClient adapter for the quality metrics endpoint
pub struct HttpQualityClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpQualityClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            endpoint: join_endpoint(base_url, QUALITY_PATH)?,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QualityService for HttpQualityClient {
    async fn metrics(&self, contents: &str, file_name: &str) -> Result<serde_json::Value> {
        let request_error = |details: String| CompareError::Request {
            endpoint: self.endpoint.clone(),
            details,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&QualityRequest { contents, file_name })
            .send()
            .await
            .map_err(|e| request_error(e.to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| request_error(e.to_string()))?;
        if !status.is_success() {
            return Err(request_error(format!("HTTP {}: {}", status, excerpt(&body))).into());
        }

        serde_json::from_str(&body).map_err(|e| {
            CompareError::MalformedResponse {
                endpoint: self.endpoint.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
