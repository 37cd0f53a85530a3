use crate::application::services::ResourceFetcher;
use crate::config::SyncConfig;
use crate::ports::outbound::{ApiTransport, StatusReporter};
use crate::shared::Result;
use serde_json::Value;

/// QueryStateUseCase - Read-only summary of current governance state
///
/// Prints the labels with their descriptions, the entitlement count,
/// and the owner entries for each resource ORN listed under
/// `query_resources` in the config. Purely informational; a failed
/// lookup is a warning, never a run failure.
pub struct QueryStateUseCase<'a, T, R>
where
    T: ApiTransport,
    R: StatusReporter,
{
    fetcher: ResourceFetcher<'a, T>,
    reporter: &'a R,
}

impl<'a, T, R> QueryStateUseCase<'a, T, R>
where
    T: ApiTransport,
    R: StatusReporter,
{
    pub fn new(transport: &'a T, reporter: &'a R) -> Self {
        Self {
            fetcher: ResourceFetcher::new(transport),
            reporter,
        }
    }

    pub fn execute(&self, config: &SyncConfig) -> Result<()> {
        self.reporter.report("\n=== Current State ===\n");

        self.reporter.report("Labels:");
        match self.fetcher.raw_labels() {
            Ok(labels) => {
                for label in &labels {
                    let name = label.get("name").and_then(Value::as_str).unwrap_or("?");
                    let description = label
                        .get("description")
                        .and_then(Value::as_str)
                        .unwrap_or_default();
                    self.reporter
                        .report(&format!("  - {}: {}", name, description));
                }
                if labels.is_empty() {
                    self.reporter.report("  (none)");
                }
            }
            Err(e) => self.reporter.warn(&format!("Could not list labels: {}", e)),
        }

        self.reporter.report("\nEntitlements:");
        match self.fetcher.entitlement_count() {
            Ok(count) => self.reporter.report(&format!("  Total: {}", count)),
            Err(e) => self
                .reporter
                .warn(&format!("Could not count entitlements: {}", e)),
        }

        self.reporter.report("\nResource Owners:");
        if config.query_resources.is_empty() {
            self.reporter
                .report("  (no query_resources configured)");
        }
        for orn in &config.query_resources {
            match self.fetcher.resource_owners(orn) {
                Ok(entries) => {
                    self.reporter.report(&format!("  Resource: {}", orn));
                    for entry in &entries {
                        let principals = entry
                            .get("principals")
                            .and_then(Value::as_array)
                            .map(Vec::len)
                            .unwrap_or(0);
                        self.reporter
                            .report(&format!("    Owners: {}", principals));
                    }
                }
                Err(e) => self
                    .reporter
                    .warn(&format!("Could not query owners for {}: {}", orn, e)),
            }
        }

        Ok(())
    }
}
