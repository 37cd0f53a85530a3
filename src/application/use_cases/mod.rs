/// Use cases - Application orchestration, one per CLI mode
pub mod apply_config;
pub mod export_snapshot;
pub mod import_resources;
pub mod query_state;
pub mod sync_labels;

pub use apply_config::{ApplyConfigUseCase, ApplyOutcome};
pub use export_snapshot::ExportSnapshotUseCase;
pub use import_resources::{ImportResourcesUseCase, ImportSummary};
pub use query_state::QueryStateUseCase;
pub use sync_labels::SyncLabelsUseCase;
