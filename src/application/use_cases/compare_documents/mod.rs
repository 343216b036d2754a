use crate::application::dto::{CompareRequest, ComparisonResponse};
use crate::comparison::domain::{DocumentRef, DocumentSet};
use crate::ports::outbound::{ComparePayload, CompareService, DocumentFetcher, ProgressReporter};
use crate::shared::error::CompareError;
use crate::shared::Result;
use futures::stream::{FuturesUnordered, StreamExt};
use std::collections::HashMap;
use uuid::Uuid;

/// CompareDocumentsUseCase - Core use case for comparing documents
///
/// Fetches every document concurrently, sends them to the comparison
/// service in a deterministic order and validates the answer against that
/// order.
///
/// # Type Parameters
/// * `F` - DocumentFetcher implementation
/// * `S` - CompareService implementation
/// * `PR` - ProgressReporter implementation
pub struct CompareDocumentsUseCase<F, S, PR> {
    document_fetcher: F,
    compare_service: S,
    progress_reporter: PR,
}

impl<F, S, PR> CompareDocumentsUseCase<F, S, PR>
where
    F: DocumentFetcher,
    S: CompareService,
    PR: ProgressReporter,
{
    /// Creates a new CompareDocumentsUseCase with injected dependencies
    pub fn new(document_fetcher: F, compare_service: S, progress_reporter: PR) -> Self {
        Self {
            document_fetcher,
            compare_service,
            progress_reporter,
        }
    }

    /// Executes the compare use case
    ///
    /// # Errors
    /// - `CompareError::Fetch` if any document cannot be read; the service is
    ///   not called in that case
    /// - `CompareError::Request` / `CompareError::MalformedResponse` from the
    ///   service, or when the returned appearance indices do not fit the
    ///   compared documents
    pub async fn execute(&self, request: CompareRequest) -> Result<ComparisonResponse> {
        let request_id = Uuid::new_v4();
        let documents = request.documents;
        let total = documents.len();
        tracing::debug!(%request_id, documents = total, "starting comparison");

        // Step 1: Fetch every document concurrently
        let mut buffer = self.fetch_documents(&documents).await?;

        // Step 2: Build the payload in target-first order
        let ordered = Self::order_documents(&documents, &mut buffer)?;
        let payload = ComparePayload::from_documents(&ordered)?;

        // Step 3: Compare
        self.progress_reporter.report(&format!(
            "🔍 Comparing {} document(s) via {}",
            total,
            self.compare_service.endpoint()
        ));
        let comparison = self.compare_service.compare(&payload).await?;

        // Step 4: Appearance indices must address the documents we sent
        comparison
            .validate_appearances(total)
            .map_err(|violation| CompareError::MalformedResponse {
                endpoint: self.compare_service.endpoint().to_string(),
                details: violation.to_string(),
            })?;

        tracing::debug!(
            %request_id,
            components = comparison.comparisons.len(),
            diff_reports = comparison.diff_reports.len(),
            "comparison received"
        );
        self.progress_reporter.report_completion(&format!(
            "✅ Comparison complete: {} component(s) across {} document(s)",
            comparison.comparisons.len(),
            total
        ));

        Ok(ComparisonResponse::new(request_id, documents, comparison))
    }

    /// Fetches all documents, buffering contents by document until every
    /// fetch has resolved.
    ///
    /// The first failure aborts the batch; fetches still in flight are
    /// dropped.
    async fn fetch_documents(&self, documents: &DocumentSet) -> Result<HashMap<DocumentRef, String>> {
        let total = documents.len();
        self.progress_reporter
            .report(&format!("📖 Loading {} document(s)...", total));

        let mut pending: FuturesUnordered<_> = documents
            .iter()
            .map(|document| async move {
                let result = self.document_fetcher.fetch(document).await;
                (document, result)
            })
            .collect();

        let mut buffer = HashMap::with_capacity(total);
        let mut completed = 0;

        while let Some((document, result)) = pending.next().await {
            completed += 1;
            self.progress_reporter
                .report_progress(completed, total, Some(document.as_str()));

            match result {
                Ok(content) => {
                    tracing::debug!(document = %document, bytes = content.len(), "document fetched");
                    buffer.insert(document.clone(), content);
                }
                Err(e) => {
                    tracing::warn!(document = %document, error = %e, "document fetch failed");
                    self.progress_reporter
                        .report_error(&format!("❌ Failed to load {}", document));
                    return Err(CompareError::Fetch {
                        document: document.to_string(),
                        details: format!("{:#}", e),
                    }
                    .into());
                }
            }
        }

        Ok(buffer)
    }

    /// Places the target first and the others in caller order, looking each
    /// one up by identity rather than by arrival order
    fn order_documents(
        documents: &DocumentSet,
        buffer: &mut HashMap<DocumentRef, String>,
    ) -> Result<Vec<(DocumentRef, String)>> {
        documents
            .iter()
            .map(|document| {
                let content = buffer.remove(document).ok_or_else(|| {
                    anyhow::anyhow!("Content for document '{}' was not fetched", document)
                })?;
                Ok((document.clone(), content))
            })
            .collect()
    }
}
