use oig_sync::prelude::*;
use std::sync::Mutex;

/// Mock StatusReporter that captures status lines and warnings
#[derive(Default)]
pub struct MockStatusReporter {
    messages: Mutex<Vec<String>>,
    warnings: Mutex<Vec<String>>,
}

impl MockStatusReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl StatusReporter for MockStatusReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}
