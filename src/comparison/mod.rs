/// Comparison domain layer
///
/// Holds the comparison data model and the pure services (filtering,
/// navigation, summary) that operate on it. Nothing here performs I/O.
pub mod domain;
pub mod services;
