use crate::governance::domain::Label;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Outcome of one resource kind within an export run.
///
/// Distinguishes "the feature is disabled for this org" from "the call
/// failed" from "the caller opted out", so an operator can diagnose
/// partial completion from the snapshot alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KindStatus {
    Success,
    NotAvailable,
    Error,
    Skipped,
}

/// Owners exported for one caller-supplied resource ORN.
#[derive(Debug, Serialize)]
pub struct OwnerExport {
    pub resource_orn: String,
    pub owners: Vec<Value>,
}

/// The aggregated export artifact, written once per run and never
/// mutated after write. The timestamp lives here and only here; the
/// generated config text stays timestamp-free for determinism.
#[derive(Debug, Serialize)]
pub struct ExportSnapshot {
    pub export_date: String,
    pub okta_org: String,
    pub statuses: BTreeMap<String, KindStatus>,
    pub labels: Vec<Label>,
    pub entitlements: Vec<Value>,
    pub resource_owners: Vec<OwnerExport>,
}

impl ExportSnapshot {
    pub fn new(org: &str, export_date: String) -> Self {
        Self {
            export_date,
            okta_org: org.to_string(),
            statuses: BTreeMap::new(),
            labels: Vec::new(),
            entitlements: Vec::new(),
            resource_owners: Vec::new(),
        }
    }

    pub fn set_status(&mut self, kind: &str, status: KindStatus) {
        self.statuses.insert(kind.to_string(), status);
    }
}
