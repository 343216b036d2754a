//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of comparison data for formatters.

pub mod comparison_report;
pub mod comparison_report_builder;

pub use comparison_report::{ComparisonReport, DocumentView, ReportMetadataView};
pub use comparison_report_builder::ComparisonReportBuilder;
