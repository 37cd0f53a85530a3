//! Local configuration for oig-sync.
//!
//! Covers the resolved Okta credentials handed to the transport and the
//! JSON config file consumed by the apply/destroy/query modes. The file
//! shape mirrors what Terraform outputs produce:
//!
//! ```json
//! {
//!   "labels": [{"name": "production", "description": "..."}],
//!   "resource_owners": [{"principal_type": "user", "principal_ids": ["00u1"],
//!                        "resource_type": "app", "resource_ids": ["0oa1"]}],
//!   "label_assignments": [{"label_name": "production", "resource_type": "group",
//!                          "resource_ids": ["00g1"]}],
//!   "query_resources": ["orn:okta:idp:acme:apps:oauth2:0oa1"]
//! }
//! ```

use crate::governance::domain::Orn;
use crate::shared::error::SyncError;
use crate::shared::Result;
use anyhow::bail;
use serde::Deserialize;
use std::path::Path;

/// Resolved Okta credentials, passed explicitly into the transport.
/// No ambient environment reads happen past CLI parsing.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub org_name: String,
    pub base_url: String,
    pub api_token: String,
}

impl Credentials {
    /// The org-scoped API origin, e.g. `https://acme.okta.com`.
    pub fn org_url(&self) -> String {
        format!("https://{}.{}", self.org_name, self.base_url)
    }
}

/// Top-level apply/destroy/query config file schema.
#[derive(Debug, Deserialize, Default)]
pub struct SyncConfig {
    #[serde(default)]
    pub labels: Vec<LabelSpec>,
    #[serde(default)]
    pub resource_owners: Vec<OwnerAssignmentSpec>,
    #[serde(default)]
    pub label_assignments: Vec<LabelAssignmentSpec>,
    #[serde(default)]
    pub query_resources: Vec<String>,
}

/// A governance label to create.
#[derive(Debug, Deserialize)]
pub struct LabelSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Owners (principals) to assign to a set of resources.
#[derive(Debug, Deserialize)]
pub struct OwnerAssignmentSpec {
    #[serde(default = "default_principal_type")]
    pub principal_type: String,
    #[serde(default)]
    pub principal_ids: Vec<String>,
    #[serde(flatten)]
    pub resources: ResourceSelector,
}

impl OwnerAssignmentSpec {
    pub fn principal_orns(&self, org: &str) -> Vec<String> {
        self.principal_ids
            .iter()
            .map(|id| {
                if self.principal_type == "group" {
                    Orn::group(org, id).to_string()
                } else {
                    Orn::user(org, id).to_string()
                }
            })
            .collect()
    }
}

/// A label applied to a set of resources.
#[derive(Debug, Deserialize)]
pub struct LabelAssignmentSpec {
    pub label_name: String,
    #[serde(flatten)]
    pub resources: ResourceSelector,
}

/// Resources addressed either by id (resolved through the typed `Orn`
/// builders) or by raw ORN strings for anything else.
#[derive(Debug, Deserialize, Default)]
pub struct ResourceSelector {
    #[serde(default = "default_resource_type")]
    pub resource_type: String,
    #[serde(default = "default_app_type")]
    pub app_type: String,
    #[serde(default)]
    pub resource_ids: Vec<String>,
    #[serde(default)]
    pub resource_orns: Vec<String>,
}

impl ResourceSelector {
    pub fn resolve_orns(&self, org: &str) -> Vec<String> {
        match self.resource_type.as_str() {
            "app" => self
                .resource_ids
                .iter()
                .map(|id| Orn::app(org, &self.app_type, id).to_string())
                .collect(),
            "group" => self
                .resource_ids
                .iter()
                .map(|id| Orn::group(org, id).to_string())
                .collect(),
            _ => self.resource_orns.clone(),
        }
    }
}

fn default_principal_type() -> String {
    "user".to_string()
}

fn default_resource_type() -> String {
    "app".to_string()
}

fn default_app_type() -> String {
    "oauth2".to_string()
}

/// Load and validate the apply/destroy/query config from a JSON file.
pub fn load_config(path: &Path) -> Result<SyncConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| SyncError::ConfigRead {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    let config: SyncConfig =
        serde_json::from_str(&content).map_err(|e| SyncError::ConfigParse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &SyncConfig) -> Result<()> {
    for (i, label) in config.labels.iter().enumerate() {
        if label.name.trim().is_empty() {
            bail!(
                "Invalid config: labels[{}].name must not be empty.\n\n\
                 💡 Hint: Each label entry needs a non-empty 'name' field.",
                i
            );
        }
    }
    for (i, assignment) in config.label_assignments.iter().enumerate() {
        if assignment.label_name.trim().is_empty() {
            bail!(
                "Invalid config: label_assignments[{}].label_name must not be empty.",
                i
            );
        }
    }
    Ok(())
}
