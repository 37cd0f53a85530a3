use oig_sync::prelude::*;
use std::collections::HashMap;
use std::sync::Mutex;

/// Mock ArtifactSink that keeps written artifacts in memory
#[derive(Default)]
pub struct MockArtifactSink {
    files: Mutex<HashMap<String, String>>,
    executables: Mutex<Vec<String>>,
}

impl MockArtifactSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(&self, name: &str) -> Option<String> {
        self.files.lock().unwrap().get(name).cloned()
    }

    pub fn file_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.files.lock().unwrap().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn executables(&self) -> Vec<String> {
        self.executables.lock().unwrap().clone()
    }
}

impl ArtifactSink for MockArtifactSink {
    fn write(&self, name: &str, content: &str) -> Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(name.to_string(), content.to_string());
        Ok(())
    }

    fn write_executable(&self, name: &str, content: &str) -> Result<()> {
        self.executables.lock().unwrap().push(name.to_string());
        self.write(name, content)
    }
}
