use clap::{Parser, Subcommand};

use crate::application::dto::ExportKind;
use crate::config::Credentials;
use crate::shared::error::SyncError;
use crate::shared::Result;
use std::path::PathBuf;

/// Manage Okta Identity Governance resources from the command line
#[derive(Parser, Debug)]
#[command(name = "oig-sync")]
#[command(version)]
#[command(about = "Import, export, and sync Okta Identity Governance resources", long_about = None)]
pub struct Cli {
    /// Okta organization name (subdomain)
    #[arg(long, env = "OKTA_ORG_NAME", global = true)]
    pub org_name: Option<String>,

    /// Okta base URL
    #[arg(long, env = "OKTA_BASE_URL", default_value = "okta.com", global = true)]
    pub base_url: String,

    /// Okta API token
    #[arg(long, env = "OKTA_API_TOKEN", global = true, hide_env_values = true)]
    pub api_token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate Terraform config and import commands for existing resources
    Import {
        /// Output directory for generated files
        #[arg(long, default_value = "imported_oig")]
        output_dir: PathBuf,
    },
    /// Export a JSON snapshot of governance state
    Export {
        /// Output file (defaults to oig_export_<org>_<timestamp>.json)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Resource kinds to export: labels, entitlements, resource-owners.
        /// Defaults to labels and entitlements.
        #[arg(long = "kinds", value_name = "KIND", value_delimiter = ',')]
        kinds: Vec<ExportKind>,

        /// Parent resource ORN whose owners to export. Repeatable.
        #[arg(long = "owner-resource", value_name = "ORN")]
        owner_resources: Vec<String>,

        /// Keep entitlements of every origin instead of app-managed only
        #[arg(long)]
        all_origins: bool,
    },
    /// Create labels and assignments described in a config file
    Apply {
        /// Path to the configuration JSON file
        #[arg(long)]
        config: PathBuf,
    },
    /// Remove labels and assignments described in a config file
    Destroy {
        /// Path to the configuration JSON file
        #[arg(long)]
        config: PathBuf,
    },
    /// Print a read-only summary of current governance state
    Query {
        /// Optional config file supplying query_resources
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Refresh the local label mappings file from Okta
    SyncLabels {
        /// Output file path
        #[arg(long, default_value = "config/label_mappings.json")]
        output: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Resolve credentials, failing pre-flight when either required
    /// value is absent from both flags and environment.
    pub fn credentials(&self) -> Result<Credentials> {
        let org_name = self
            .org_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| SyncError::MissingCredentials {
                details: "organization name not set".to_string(),
            })?;
        let api_token = self
            .api_token
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| SyncError::MissingCredentials {
                details: "API token not set".to_string(),
            })?;

        Ok(Credentials {
            org_name: org_name.to_string(),
            base_url: self.base_url.clone(),
            api_token: api_token.to_string(),
        })
    }
}
