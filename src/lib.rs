//! oig-sync - Okta Identity Governance resource sync tool
//!
//! This library imports existing Okta Identity Governance (OIG) resources
//! into Terraform, exports governance state as JSON snapshots, and manages
//! the API-only resources (labels, resource owners) that the Terraform
//! provider does not cover.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`governance`): Resource models, ORN handling, and
//!   the pure Terraform generators
//! - **Application Layer** (`application`): Use cases, one per CLI mode
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use oig_sync::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let credentials = Credentials {
//!     org_name: "acme".to_string(),
//!     base_url: "okta.com".to_string(),
//!     api_token: "00a-token".to_string(),
//! };
//!
//! // Create adapters
//! let transport = OktaTransport::new(&credentials)?;
//! let sink = DirectoryArtifactSink::new("imported_oig".into())?;
//! let reporter = StderrStatusReporter::new();
//!
//! // Create and execute use case
//! let use_case = ImportResourcesUseCase::new(&transport, &sink, &reporter);
//! let summary = use_case.execute()?;
//! eprintln!("{} kinds written", summary.kinds_written);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod governance;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrStatusReporter;
    pub use crate::adapters::outbound::filesystem::DirectoryArtifactSink;
    pub use crate::adapters::outbound::network::OktaTransport;
    pub use crate::application::dto::{ExportKind, ExportRequest, ExportSnapshot, KindStatus};
    pub use crate::application::use_cases::{
        ApplyConfigUseCase, ExportSnapshotUseCase, ImportResourcesUseCase, QueryStateUseCase,
        SyncLabelsUseCase,
    };
    pub use crate::config::{load_config, Credentials, SyncConfig};
    pub use crate::governance::domain::{
        EntitlementBundle, Grant, Label, LabelMappings, Orn, ResourceKind, ResourceRecord,
    };
    pub use crate::ports::outbound::{
        ApiError, ApiTransport, ArtifactSink, Method, StatusReporter,
    };
    pub use crate::shared::Result;
}
