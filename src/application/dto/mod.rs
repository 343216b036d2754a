/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod compare_request;
mod comparison_response;
mod output_format;
mod quality_result;

pub use compare_request::CompareRequest;
pub use comparison_response::ComparisonResponse;
pub use output_format::OutputFormat;
pub use quality_result::QualityResult;
