//! sbom-compare - compare SBOMs through a comparison service
//!
//! This library reads a target SBOM and one or more other SBOMs, sends them to
//! a comparison service, and turns the answer into a navigable view of the
//! components that diverge between the documents. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`comparison`): Comparison model, conflict filter and navigation
//! - **Application Layer** (`application`): Use cases, DTOs and report read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use sbom_compare::prelude::*;
//! use std::time::Duration;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let document_reader = FileSystemDocumentReader::new();
//! let compare_client = HttpCompareClient::new("http://localhost:8080/svip", Duration::from_secs(30))?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = CompareDocumentsUseCase::new(document_reader, compare_client, progress_reporter);
//!
//! // Execute
//! let request = CompareRequest::new("target.json", ["other.json"])?;
//! let response = use_case.execute(request).await?;
//!
//! // Keep only the divergent components and render them
//! let mut filter = ConflictFilter::new();
//! let view = filter.toggle(&response.comparison, response.document_count());
//! let navigation = NavigationState::new(view);
//! let report = ComparisonReportBuilder::build(&response, &navigation, true, None);
//! println!("{}", MarkdownFormatter::new().format(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod comparison;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemDocumentReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{HttpCompareClient, HttpQualityClient};
    pub use crate::application::dto::{
        CompareRequest, ComparisonResponse, OutputFormat, QualityResult,
    };
    pub use crate::application::read_models::{ComparisonReport, ComparisonReportBuilder};
    pub use crate::application::use_cases::{AnalyzeQualityUseCase, CompareDocumentsUseCase};
    pub use crate::comparison::domain::{
        Attributes, Comparison, ComponentConflict, ComponentConflictType, ComponentVersion,
        DiffReport, DocumentRef, DocumentSet, IdentifierKind, SbomConflict, SbomConflictType,
    };
    pub use crate::comparison::services::{
        filter_conflicts, ComparisonSummary, ComparisonView, ConflictFilter, Location,
        NavigationState,
    };
    pub use crate::ports::outbound::{
        ComparePayload, CompareService, ComparisonFormatter, DocumentFetcher, OutputPresenter,
        ProgressReporter, QualityService,
    };
    pub use crate::shared::error::CompareError;
    pub use crate::shared::Result;
}
