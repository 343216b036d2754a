/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod compare_service;
pub mod document_fetcher;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod quality_service;

pub use compare_service::{ComparePayload, CompareService};
pub use document_fetcher::DocumentFetcher;
pub use formatter::ComparisonFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use quality_service::QualityService;
