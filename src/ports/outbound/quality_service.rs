use crate::shared::Result;
use async_trait::async_trait;

/// QualityService port for per-document quality metrics
///
/// The metrics document is opaque to this tool and passed through as JSON.
#[async_trait]
pub trait QualityService: Send + Sync {
    async fn metrics(&self, contents: &str, file_name: &str) -> Result<serde_json::Value>;
}
