pub mod artifact_sink;

pub use artifact_sink::DirectoryArtifactSink;
