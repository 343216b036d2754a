/// Ports module defining interfaces for hexagonal architecture
///
/// The application core drives infrastructure only through the outbound
/// ports declared here.
pub mod outbound;
