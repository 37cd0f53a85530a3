use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// A governance label with the resources it is applied to.
#[derive(Debug, Clone, Serialize)]
pub struct Label {
    pub name: String,
    pub description: String,
    pub resources: Vec<Value>,
}

/// The bucket an assignment ORN falls into inside `label_mappings.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrnCategory {
    EntitlementBundles,
    Apps,
    Groups,
    Other,
}

impl OrnCategory {
    pub const ALL: [OrnCategory; 4] = [
        OrnCategory::EntitlementBundles,
        OrnCategory::Apps,
        OrnCategory::Groups,
        OrnCategory::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            OrnCategory::EntitlementBundles => "entitlement_bundles",
            OrnCategory::Apps => "apps",
            OrnCategory::Groups => "groups",
            OrnCategory::Other => "other",
        }
    }

    /// Categorize an assignment by substring inspection of its ORN.
    pub fn of(orn: &str) -> Self {
        if orn.contains("entitlement-bundles") {
            OrnCategory::EntitlementBundles
        } else if orn.contains(":apps:") {
            OrnCategory::Apps
        } else if orn.contains(":groups:") {
            OrnCategory::Groups
        } else {
            OrnCategory::Other
        }
    }
}

/// Per-label identifier metadata synced into `label_mappings.json`.
#[derive(Debug, Clone, Serialize)]
pub struct LabelMetadata {
    #[serde(rename = "labelId")]
    pub label_id: Option<String>,
    #[serde(rename = "labelValueId")]
    pub label_value_id: Option<String>,
    pub description: String,
    pub color: Option<String>,
    pub metadata: BTreeMap<String, String>,
}

/// The `label_mappings.json` document. Assignments are keyed
/// category -> label name -> sorted ORN list so the file diffs cleanly
/// under version control.
#[derive(Debug, Serialize)]
pub struct LabelMappings {
    pub description: String,
    pub last_synced: String,
    pub labels: BTreeMap<String, LabelMetadata>,
    pub assignments: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    pub notes: Vec<String>,
}
