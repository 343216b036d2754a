/// Mock implementations for testing
mod mock_compare_service;
mod mock_document_fetcher;
mod mock_progress_reporter;
mod mock_quality_service;

pub use mock_compare_service::MockCompareService;
pub use mock_document_fetcher::MockDocumentFetcher;
pub use mock_progress_reporter::{MockProgressReporter, ReportedEvent};
pub use mock_quality_service::MockQualityService;
