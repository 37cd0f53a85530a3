use crate::ports::outbound::StatusReporter;

/// StatusReporter that writes to stderr, keeping stdout free for
/// machine-readable output in query mode.
pub struct StderrStatusReporter;

impl StderrStatusReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrStatusReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusReporter for StderrStatusReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn warn(&self, message: &str) {
        eprintln!("  ⚠️  {}", message);
    }
}
