use crate::ports::outbound::ArtifactSink;
use crate::shared::error::SyncError;
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;

/// ArtifactSink that writes into a run-scoped output directory,
/// creating it on construction.
pub struct DirectoryArtifactSink {
    root: PathBuf,
}

impl DirectoryArtifactSink {
    pub fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root).map_err(|e| SyncError::ArtifactWrite {
            path: root.clone(),
            details: e.to_string(),
        })?;
        Ok(Self { root })
    }

    fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.root.join(name);
        fs::write(&path, content).map_err(|e| SyncError::ArtifactWrite {
            path: path.clone(),
            details: e.to_string(),
        })?;
        Ok(path)
    }
}

impl ArtifactSink for DirectoryArtifactSink {
    fn write(&self, name: &str, content: &str) -> Result<()> {
        self.write_file(name, content)?;
        Ok(())
    }

    fn write_executable(&self, name: &str, content: &str) -> Result<()> {
        let path = self.write_file(name, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).map_err(|e| {
                SyncError::ArtifactWrite {
                    path,
                    details: e.to_string(),
                }
            })?;
        }

        Ok(())
    }
}
