use crate::comparison::domain::DocumentRef;
use crate::ports::outbound::DocumentFetcher;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_DOCUMENT_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// FileSystemDocumentReader adapter for reading compared documents from disk
///
/// Document references are file paths. Relative paths are resolved against
/// the base directory when one is set, otherwise against the working
/// directory.
pub struct FileSystemDocumentReader {
    base_dir: Option<PathBuf>,
    max_size: u64,
}

impl FileSystemDocumentReader {
    pub fn new() -> Self {
        Self {
            base_dir: None,
            max_size: MAX_DOCUMENT_SIZE,
        }
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(base_dir.into());
        self
    }

    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    fn resolve(&self, document: &DocumentRef) -> PathBuf {
        let path = Path::new(document.as_str());
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl Default for FileSystemDocumentReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentFetcher for FileSystemDocumentReader {
    async fn fetch(&self, document: &DocumentRef) -> Result<String> {
        let path = self.resolve(document);

        // Security checks run before any content is read
        let metadata = tokio::fs::symlink_metadata(&path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read document metadata: {}", e))?;
        let size = validate_regular_file(&metadata, &path)?;
        validate_file_size(size, &path, self.max_size)?;

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read document {}: {}", path.display(), e))
    }
}
