use crate::application::dto::QualityResult;
use crate::comparison::domain::DocumentRef;
use crate::ports::outbound::{DocumentFetcher, ProgressReporter, QualityService};
use crate::shared::Result;
use futures::future::join_all;

/// AnalyzeQualityUseCase - Collects quality metrics for each document
///
/// Failures are per document: a document that cannot be fetched or
/// analysed gets `metrics: None` and a warning, and the rest of the batch
/// carries on.
pub struct AnalyzeQualityUseCase<F, Q, PR> {
    document_fetcher: F,
    quality_service: Q,
    progress_reporter: PR,
}

impl<F, Q, PR> AnalyzeQualityUseCase<F, Q, PR>
where
    F: DocumentFetcher,
    Q: QualityService,
    PR: ProgressReporter,
{
    pub fn new(document_fetcher: F, quality_service: Q, progress_reporter: PR) -> Self {
        Self {
            document_fetcher,
            quality_service,
            progress_reporter,
        }
    }

    /// Returns one result per document, in the order given
    pub async fn execute(&self, documents: &[DocumentRef]) -> Vec<QualityResult> {
        self.progress_reporter.report(&format!(
            "📊 Collecting quality metrics for {} document(s)...",
            documents.len()
        ));

        let outcomes = join_all(documents.iter().map(|document| self.analyze(document))).await;

        // Report errors collected during async execution
        let mut results = Vec::with_capacity(documents.len());
        for (document, outcome) in documents.iter().zip(outcomes) {
            let metrics = match outcome {
                Ok(metrics) => Some(metrics),
                Err(e) => {
                    tracing::warn!(document = %document, error = %e, "quality analysis failed");
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Warning: Failed to collect quality metrics for {}: {}",
                        document, e
                    ));
                    None
                }
            };
            results.push(QualityResult {
                document: document.clone(),
                metrics,
            });
        }

        let available = results.iter().filter(|r| r.is_available()).count();
        self.progress_reporter.report_completion(&format!(
            "✅ Quality metrics: {} succeeded out of {}, {} failed",
            available,
            results.len(),
            results.len() - available
        ));

        results
    }

    async fn analyze(&self, document: &DocumentRef) -> Result<serde_json::Value> {
        let contents = self.document_fetcher.fetch(document).await?;
        self.quality_service
            .metrics(&contents, document.as_str())
            .await
    }
}
