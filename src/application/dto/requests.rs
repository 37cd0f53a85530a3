use std::str::FromStr;

/// Resource kinds selectable in export mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Labels,
    Entitlements,
    ResourceOwners,
}

impl ExportKind {
    pub fn key(&self) -> &'static str {
        match self {
            ExportKind::Labels => "labels",
            ExportKind::Entitlements => "entitlements",
            ExportKind::ResourceOwners => "resource_owners",
        }
    }
}

impl FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "labels" => Ok(ExportKind::Labels),
            "entitlements" => Ok(ExportKind::Entitlements),
            "resource-owners" | "resource_owners" => Ok(ExportKind::ResourceOwners),
            _ => Err(format!(
                "Invalid kind: {}. Expected 'labels', 'entitlements' or 'resource-owners'",
                s
            )),
        }
    }
}

/// Parameters for one export run.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub kinds: Vec<ExportKind>,
    /// ORNs whose owners to export. Owners have no list-all endpoint, so
    /// the caller must name the parent resources explicitly.
    pub owner_resources: Vec<String>,
    /// When false (the default), only app-managed entitlements are kept.
    pub all_origins: bool,
}

impl ExportRequest {
    pub fn includes(&self, kind: ExportKind) -> bool {
        self.kinds.contains(&kind)
    }
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self {
            kinds: vec![ExportKind::Labels, ExportKind::Entitlements],
            owner_resources: Vec::new(),
            all_origins: false,
        }
    }
}
