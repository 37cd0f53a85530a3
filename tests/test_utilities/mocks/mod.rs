/// Mock implementations for testing
mod mock_artifact_sink;
mod mock_status_reporter;
mod mock_transport;

pub use mock_artifact_sink::MockArtifactSink;
pub use mock_status_reporter::MockStatusReporter;
pub use mock_transport::{MockFailure, MockTransport};
