use crate::shared::Result;

/// Outbound port for persisting generated artifacts.
///
/// Implementations resolve `name` relative to a run-scoped output
/// location. Each write is flushed immediately so a run killed mid-way
/// leaves a valid prefix of artifacts rather than a corrupt aggregate.
pub trait ArtifactSink {
    fn write(&self, name: &str, content: &str) -> Result<()>;

    /// Write a shell script and mark it executable where the platform
    /// supports it.
    fn write_executable(&self, name: &str, content: &str) -> Result<()>;
}
