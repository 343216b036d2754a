/// Use cases module containing application business logic orchestration
mod analyze_quality;
mod compare_documents;

pub use analyze_quality::AnalyzeQualityUseCase;
pub use compare_documents::CompareDocumentsUseCase;
