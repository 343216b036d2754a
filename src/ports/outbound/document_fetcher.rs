use crate::comparison::domain::DocumentRef;
use crate::shared::Result;
use async_trait::async_trait;

/// DocumentFetcher port for loading the raw content of a compared document
///
/// This port abstracts where documents live (local files, object storage, ...).
/// The orchestrator calls it once per document and polls the calls
/// concurrently, so implementations must be `Send + Sync`.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Fetches the full text content of a document
    ///
    /// # Errors
    /// Returns an error if the document cannot be located or read
    async fn fetch(&self, document: &DocumentRef) -> Result<String>;
}
