mod adapters;
mod application;
mod cli;
mod config;
mod governance;
mod ports;
mod shared;

use adapters::outbound::console::StderrStatusReporter;
use adapters::outbound::filesystem::DirectoryArtifactSink;
use adapters::outbound::network::OktaTransport;
use application::dto::ExportRequest;
use application::use_cases::{
    ApplyConfigUseCase, ExportSnapshotUseCase, ImportResourcesUseCase, QueryStateUseCase,
    SyncLabelsUseCase,
};
use cli::{Cli, Command};
use config::{load_config, SyncConfig};
use ports::outbound::StatusReporter;
use shared::error::ExitCode;
use shared::Result;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::PreflightError.as_i32());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    // Pre-flight: resolve credentials and read local config before any
    // network traffic, so a misconfigured run fails fast.
    let credentials = cli.credentials()?;
    let reporter = StderrStatusReporter::new();

    let transport = OktaTransport::new(&credentials)?;

    match &cli.command {
        Command::Import { output_dir } => {
            reporter.report(&"=".repeat(60));
            reporter.report("Importing OIG Resources from Okta");
            reporter.report(&format!("{}\n", "=".repeat(60)));

            let sink = DirectoryArtifactSink::new(output_dir.clone())?;
            let use_case = ImportResourcesUseCase::new(&transport, &sink, &reporter);
            let summary = use_case.execute()?;

            reporter.report(&format!(
                "\n✅ Import generation complete: {} kinds, {} import commands, {} app-managed bundles skipped",
                summary.kinds_written, summary.directives, summary.skipped_bundles
            ));
            reporter.report(&format!(
                "Generated files in: {}/",
                output_dir.display()
            ));
            reporter.report("Review the .tf files and complete TODO items, then run ./import.sh");
        }
        Command::Export {
            output,
            kinds,
            owner_resources,
            all_origins,
        } => {
            let mut request = ExportRequest::default();
            if !kinds.is_empty() {
                request.kinds = kinds.clone();
            }
            request.owner_resources = owner_resources.clone();
            request.all_origins = *all_origins;

            let use_case = ExportSnapshotUseCase::new(&transport, &reporter);
            let snapshot = use_case.execute(&credentials.org_name, &request)?;

            let output = output.clone().unwrap_or_else(|| {
                format!(
                    "oig_export_{}_{}.json",
                    credentials.org_name,
                    chrono::Utc::now().timestamp()
                )
                .into()
            });
            write_json_artifact(&output, &serde_json::to_string_pretty(&snapshot)?)?;

            reporter.report("\n✅ Export completed");
            reporter.report(&format!("📄 Output file: {}", output.display()));
            reporter.report("\n📊 Export Summary:");
            reporter.report(&format!("  - Labels: {}", snapshot.labels.len()));
            reporter.report(&format!(
                "  - Entitlements: {}",
                snapshot.entitlements.len()
            ));
        }
        Command::Apply { config } => {
            let config = load_config(config)?;
            let use_case = ApplyConfigUseCase::new(&transport, &reporter);
            let outcome = use_case.apply(&credentials, &config)?;
            reporter.report(&format!(
                "\n✅ Apply finished: {} succeeded, {} failed",
                outcome.succeeded, outcome.failed
            ));
        }
        Command::Destroy { config } => {
            let config = load_config(config)?;
            let use_case = ApplyConfigUseCase::new(&transport, &reporter);
            let outcome = use_case.destroy(&credentials, &config)?;
            reporter.report(&format!(
                "\n✅ Destroy finished: {} succeeded, {} failed",
                outcome.succeeded, outcome.failed
            ));
        }
        Command::Query { config } => {
            let config = match config {
                Some(path) => load_config(path)?,
                None => SyncConfig::default(),
            };
            let use_case = QueryStateUseCase::new(&transport, &reporter);
            use_case.execute(&config)?;
        }
        Command::SyncLabels { output } => {
            let use_case = SyncLabelsUseCase::new(&transport, &reporter);
            match use_case.execute()? {
                Some(mappings) => {
                    write_json_artifact(output, &serde_json::to_string_pretty(&mappings)?)?;
                    reporter.report(&format!(
                        "\n✅ Synced {} labels to {}",
                        mappings.labels.len(),
                        output.display()
                    ));
                }
                None => {
                    reporter.warn("No labels found, nothing to sync");
                    process::exit(ExitCode::PreflightError.as_i32());
                }
            }
        }
    }

    Ok(())
}

/// Write a standalone JSON artifact whose path (unlike the import
/// artifacts) is a full file path rather than a name under a run
/// directory.
fn write_json_artifact(path: &Path, content: &str) -> Result<()> {
    use ports::outbound::ArtifactSink;

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| ".".into());
    let sink = DirectoryArtifactSink::new(parent)?;
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("export.json");
    sink.write(name, content)
}
