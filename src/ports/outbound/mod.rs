/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, file system, console).
pub mod artifact_sink;
pub mod status_reporter;
pub mod transport;

pub use artifact_sink::ArtifactSink;
pub use status_reporter::StatusReporter;
pub use transport::{ApiError, ApiTransport, Method};
