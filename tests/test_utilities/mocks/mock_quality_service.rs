use async_trait::async_trait;
use sbom_compare::prelude::*;
use std::collections::HashSet;

/// Mock QualityService returning a fixed score per file name
#[derive(Default)]
pub struct MockQualityService {
    failing: HashSet<String>,
}

impl MockQualityService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure(mut self, file_name: &str) -> Self {
        self.failing.insert(file_name.to_string());
        self
    }
}

#[async_trait]
impl QualityService for MockQualityService {
    async fn metrics(&self, contents: &str, file_name: &str) -> Result<serde_json::Value> {
        if self.failing.contains(file_name) {
            anyhow::bail!("Mock quality service failure for {}", file_name);
        }
        Ok(serde_json::json!({
            "fileName": file_name,
            "bytes": contents.len(),
        }))
    }
}
