use crate::application::services::ResourceFetcher;
use crate::governance::domain::{grants_for_bundle, ResourceKind};
use crate::governance::generators::{
    generate_catalog_entries, generate_entitlements, generate_request_settings, generate_reviews,
    generate_sequences, render_import_script, BundleWithGrants, GeneratedConfig, ImportDirective,
};
use crate::ports::outbound::{ApiError, ApiTransport, ArtifactSink, StatusReporter};
use crate::shared::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

/// ImportResourcesUseCase - Generates Terraform adoption artifacts
///
/// Fetches every governance resource kind, renders Terraform config and
/// matching `terraform import` commands, and writes one `.tf` plus one
/// raw `.json` dump per kind, followed by an executable `import.sh`
/// aggregating the uncommented directives.
///
/// Each kind is fetched, generated, and persisted independently: a kind
/// that fails to fetch is reported as a warning and skipped, and the
/// artifacts for every successful kind are already on disk by then.
pub struct ImportResourcesUseCase<'a, T, S, R>
where
    T: ApiTransport,
    S: ArtifactSink,
    R: StatusReporter,
{
    fetcher: ResourceFetcher<'a, T>,
    sink: &'a S,
    reporter: &'a R,
}

/// Per-kind tallies for the end-of-run summary.
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub kinds_written: usize,
    pub directives: usize,
    pub skipped_bundles: usize,
}

impl<'a, T, S, R> ImportResourcesUseCase<'a, T, S, R>
where
    T: ApiTransport,
    S: ArtifactSink,
    R: StatusReporter,
{
    pub fn new(transport: &'a T, sink: &'a S, reporter: &'a R) -> Self {
        Self {
            fetcher: ResourceFetcher::new(transport),
            sink,
            reporter,
        }
    }

    pub fn execute(&self) -> Result<ImportSummary> {
        let mut summary = ImportSummary::default();
        let mut directives: Vec<ImportDirective> = Vec::new();

        self.import_entitlements(&mut summary, &mut directives);
        self.import_reviews(&mut summary, &mut directives);
        self.import_sequences(&mut summary, &mut directives);
        self.import_catalog_entries(&mut summary, &mut directives);
        self.import_request_settings(&mut summary, &mut directives);

        if !directives.is_empty() {
            let script = render_import_script(&directives);
            self.sink.write_executable("import.sh", &script)?;
            self.reporter.report("  Created: import.sh");
        }

        summary.directives = directives.len();
        Ok(summary)
    }

    fn import_entitlements(
        &self,
        summary: &mut ImportSummary,
        directives: &mut Vec<ImportDirective>,
    ) {
        self.reporter.report("Fetching entitlement bundles...");
        let bundles = match self.fetcher.bundles() {
            Ok(bundles) => bundles,
            Err(e) => {
                self.reporter
                    .warn(&format!("Could not fetch entitlement bundles: {}", e));
                return;
            }
        };
        self.reporter
            .report(&format!("  Found {} entitlement bundles", bundles.len()));

        // Grants are fetched per target before generation so the
        // generator stays a pure function of its inputs.
        let pb = progress_bar(bundles.len() as u64, "Fetching grants...");
        let mut with_grants = Vec::with_capacity(bundles.len());
        for bundle in bundles {
            let grants = match &bundle.target {
                Some(target) => {
                    match self
                        .fetcher
                        .grants_for_target(&target.external_id, &target.kind)
                    {
                        Ok(target_grants) => grants_for_bundle(&target_grants, &bundle.id),
                        Err(e) => {
                            self.reporter.warn(&format!(
                                "Could not fetch grants for bundle {}: {}",
                                bundle.id, e
                            ));
                            Vec::new()
                        }
                    }
                }
                None => Vec::new(),
            };
            with_grants.push(BundleWithGrants { bundle, grants });
            pb.inc(1);
        }
        pb.finish_and_clear();

        let raw: Vec<Value> = with_grants.iter().map(|b| b.bundle.raw.clone()).collect();
        let generated = generate_entitlements(&with_grants);
        for name in &generated.skipped {
            self.reporter
                .report(&format!("  Skipping app-managed bundle: {}", name));
        }
        summary.skipped_bundles = generated.skipped.len();

        self.persist_kind(ResourceKind::Bundle, &generated, &raw, summary);
        directives.extend(generated.directives);
    }

    fn import_reviews(&self, summary: &mut ImportSummary, directives: &mut Vec<ImportDirective>) {
        self.reporter.report("Fetching review campaigns...");
        let reviews = match self.fetcher.reviews() {
            Ok(reviews) => reviews,
            Err(e) => {
                self.reporter
                    .warn(&format!("Could not fetch reviews: {}", e));
                return;
            }
        };
        self.reporter
            .report(&format!("  Found {} review campaigns", reviews.len()));

        let raw: Vec<Value> = reviews.iter().map(|r| r.raw.clone()).collect();
        let generated = generate_reviews(&reviews);
        self.persist_kind(ResourceKind::Review, &generated, &raw, summary);
        directives.extend(generated.directives);
    }

    fn import_sequences(&self, summary: &mut ImportSummary, directives: &mut Vec<ImportDirective>) {
        self.reporter.report("Fetching approval workflows...");
        let sequences = match self.fetcher.sequences() {
            Ok(sequences) => sequences,
            Err(e) => {
                self.reporter
                    .warn(&format!("Could not fetch request sequences: {}", e));
                return;
            }
        };
        self.reporter
            .report(&format!("  Found {} approval workflows", sequences.len()));

        let raw: Vec<Value> = sequences.iter().map(|s| s.raw.clone()).collect();
        let generated = generate_sequences(&sequences);
        self.persist_kind(ResourceKind::Sequence, &generated, &raw, summary);
        directives.extend(generated.directives);
    }

    fn import_catalog_entries(
        &self,
        summary: &mut ImportSummary,
        directives: &mut Vec<ImportDirective>,
    ) {
        self.reporter.report("Fetching catalog entries...");
        let entries = match self.fetcher.catalog_entries() {
            Ok(entries) => entries,
            Err(e) => {
                self.reporter
                    .warn(&format!("Could not fetch catalog entries: {}", e));
                return;
            }
        };
        self.reporter
            .report(&format!("  Found {} catalog entries", entries.len()));

        let raw: Vec<Value> = entries.iter().map(|e| e.raw.clone()).collect();
        let generated = generate_catalog_entries(&entries);
        self.persist_kind(ResourceKind::CatalogEntry, &generated, &raw, summary);
        directives.extend(generated.directives);
    }

    fn import_request_settings(
        &self,
        summary: &mut ImportSummary,
        directives: &mut Vec<ImportDirective>,
    ) {
        self.reporter.report("Fetching request settings...");
        let settings = match self.fetcher.request_settings() {
            Ok(settings) => settings,
            Err(e) => {
                self.reporter
                    .warn(&format!("Could not fetch request settings: {}", e));
                return;
            }
        };
        match &settings {
            Some(_) => self.reporter.report("  Found request settings"),
            None => self.reporter.report("  Request settings not available"),
        }

        let raw: Vec<Value> = settings.iter().cloned().collect();
        let generated = generate_request_settings(settings.as_ref());
        self.persist_kind(ResourceKind::RequestSettings, &generated, &raw, summary);
        directives.extend(generated.directives);
    }

    /// Write `<kind>.tf` and `<kind>.json` for one fetched kind. Skips
    /// both files when the kind produced nothing, matching an org with
    /// the feature unused.
    fn persist_kind(
        &self,
        kind: ResourceKind,
        generated: &GeneratedConfig,
        raw: &[Value],
        summary: &mut ImportSummary,
    ) {
        if generated.is_empty() && raw.is_empty() {
            return;
        }

        let tf_name = format!("{}.tf", kind.key());
        if let Err(e) = self.sink.write(&tf_name, &generated.config_text) {
            self.reporter.warn(&format!("{}", e));
            return;
        }
        self.reporter.report(&format!("  Created: {}", tf_name));

        let json_name = format!("{}.json", kind.key());
        let dump = serde_json::to_string_pretty(raw).unwrap_or_else(|_| "[]".to_string());
        if let Err(e) = self.sink.write(&json_name, &dump) {
            self.reporter.warn(&format!("{}", e));
            return;
        }
        self.reporter.report(&format!("  Created: {}", json_name));

        summary.kinds_written += 1;
    }
}

fn progress_bar(len: u64, message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) =
        ProgressStyle::default_bar().template("   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} - {msg}")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb.set_message(message);
    pb
}
