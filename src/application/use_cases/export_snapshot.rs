use crate::application::dto::{ExportKind, ExportRequest, ExportSnapshot, KindStatus, OwnerExport};
use crate::application::services::ResourceFetcher;
use crate::governance::services::Origin;
use crate::ports::outbound::{ApiError, ApiTransport, StatusReporter};
use crate::shared::Result;

/// ExportSnapshotUseCase - Builds the aggregated JSON snapshot
///
/// Fetches the requested kinds and assembles an `ExportSnapshot` whose
/// per-kind statuses make partial completion diagnosable: a kind the
/// org has disabled records `not_available`, a failed call records
/// `error`, and a kind the caller opted out of records `skipped`. A
/// failed kind never aborts the run.
pub struct ExportSnapshotUseCase<'a, T, R>
where
    T: ApiTransport,
    R: StatusReporter,
{
    fetcher: ResourceFetcher<'a, T>,
    reporter: &'a R,
}

impl<'a, T, R> ExportSnapshotUseCase<'a, T, R>
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

    pub fn execute(&self, org: &str, request: &ExportRequest) -> Result<ExportSnapshot> {
        let export_date = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
        let mut snapshot = ExportSnapshot::new(org, export_date);

        self.export_labels(request, &mut snapshot);
        self.export_entitlements(request, &mut snapshot);
        self.export_owners(request, &mut snapshot);

        Ok(snapshot)
    }

    fn export_labels(&self, request: &ExportRequest, snapshot: &mut ExportSnapshot) {
        let kind = ExportKind::Labels;
        if !request.includes(kind) {
            snapshot.set_status(kind.key(), KindStatus::Skipped);
            return;
        }

        self.reporter.report("Exporting labels...");
        match self.fetcher.labels() {
            Ok(labels) => {
                for label in &labels {
                    self.reporter.report(&format!(
                        "  ✅ {}: {} resources",
                        label.name,
                        label.resources.len()
                    ));
                }
                snapshot.labels = labels;
                snapshot.set_status(kind.key(), KindStatus::Success);
            }
            Err(e) => self.record_failure(snapshot, kind.key(), &e),
        }
    }

    fn export_entitlements(&self, request: &ExportRequest, snapshot: &mut ExportSnapshot) {
        let kind = ExportKind::Entitlements;
        if !request.includes(kind) {
            snapshot.set_status(kind.key(), KindStatus::Skipped);
            return;
        }

        self.reporter.report("Exporting entitlements...");
        match self.fetcher.entitlements_detailed() {
            Ok(entitlements) => {
                let total = entitlements.len();
                let kept: Vec<_> = if request.all_origins {
                    entitlements
                } else {
                    entitlements
                        .into_iter()
                        .filter(|e| Origin::of_record(e) == Origin::AppManaged)
                        .collect()
                };
                if kept.len() < total {
                    self.reporter.report(&format!(
                        "  Filtered {} non-app-managed entitlements",
                        total - kept.len()
                    ));
                }
                self.reporter
                    .report(&format!("  ✅ {} entitlements", kept.len()));
                snapshot.entitlements = kept;
                snapshot.set_status(kind.key(), KindStatus::Success);
            }
            Err(e) => self.record_failure(snapshot, kind.key(), &e),
        }
    }

    fn export_owners(&self, request: &ExportRequest, snapshot: &mut ExportSnapshot) {
        let kind = ExportKind::ResourceOwners;
        if !request.includes(kind) || request.owner_resources.is_empty() {
            snapshot.set_status(kind.key(), KindStatus::Skipped);
            return;
        }

        // Owners have no list-all endpoint; each caller-supplied parent
        // ORN is queried separately, and a single failed ORN downgrades
        // the whole kind to error while keeping the successful ones.
        self.reporter.report("Exporting resource owners...");
        let mut status = KindStatus::Success;
        for orn in &request.owner_resources {
            match self.fetcher.resource_owners(orn) {
                Ok(owners) => {
                    self.reporter
                        .report(&format!("  ✅ {}: {} owner entries", orn, owners.len()));
                    snapshot.resource_owners.push(OwnerExport {
                        resource_orn: orn.clone(),
                        owners,
                    });
                }
                Err(e) => {
                    self.reporter
                        .warn(&format!("Could not export owners for {}: {}", orn, e));
                    if !e.is_absence() {
                        status = KindStatus::Error;
                    }
                }
            }
        }
        snapshot.set_status(kind.key(), status);
    }

    fn record_failure(&self, snapshot: &mut ExportSnapshot, key: &str, error: &ApiError) {
        if error.is_absence() {
            self.reporter
                .report(&format!("  {} not available for this org", key));
            snapshot.set_status(key, KindStatus::NotAvailable);
        } else {
            self.reporter
                .warn(&format!("Could not export {}: {}", key, error));
            snapshot.set_status(key, KindStatus::Error);
        }
    }
}
