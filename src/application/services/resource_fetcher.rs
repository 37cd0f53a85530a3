use crate::governance::domain::{EntitlementBundle, Grant, Label, ResourceRecord};
use crate::ports::outbound::{ApiError, ApiTransport, Method};
use serde_json::Value;

/// Base path of the governance-specific API.
const GOVERNANCE_BASE: &str = "/governance/api/v1";
/// Page-size ceiling sent on every list request. The original tooling
/// issues a single capped request per endpoint and does not follow
/// cursors; governance data sits in the hundreds, not millions.
const PAGE_LIMIT: &str = "200";

/// Normalize the provider's inconsistent list shapes into one ordered
/// sequence: some endpoints return a bare array, others an envelope
/// whose list field is `data` or an endpoint-specific key. Anything
/// else is an empty list. Downstream code never branches on shape.
pub fn normalize_listing(value: &Value, alternate_key: &str) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::Object(map) => map
            .get("data")
            .or_else(|| map.get(alternate_key))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Read-side access to every governance resource kind.
///
/// Each method issues the capped list request, normalizes the response
/// shape, and parses leniently, dropping items without usable ids.
/// Failures come back as `ApiError`; the orchestrator decides whether a
/// failure blocks the run (it never does past pre-flight).
pub struct ResourceFetcher<'a, T: ApiTransport> {
    transport: &'a T,
}

impl<'a, T: ApiTransport> ResourceFetcher<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    fn list(
        &self,
        path: &str,
        query: &[(&str, &str)],
        alternate_key: &str,
    ) -> Result<Vec<Value>, ApiError> {
        let mut full_query = vec![("limit", PAGE_LIMIT)];
        full_query.extend_from_slice(query);
        let response = self
            .transport
            .execute(Method::Get, path, &full_query, None)?;
        Ok(normalize_listing(&response, alternate_key))
    }

    /// All entitlement bundles in the org.
    pub fn bundles(&self) -> Result<Vec<EntitlementBundle>, ApiError> {
        let path = format!("{}/entitlement-bundles", GOVERNANCE_BASE);
        let items = self.list(&path, &[], "entitlements")?;
        Ok(items.iter().filter_map(EntitlementBundle::from_value).collect())
    }

    /// Grants for a bundle's target resource. The API cannot filter by
    /// entitlement directly, so this returns every grant on the target;
    /// the caller joins client-side against the bundle id.
    pub fn grants_for_target(
        &self,
        target_id: &str,
        target_type: &str,
    ) -> Result<Vec<Grant>, ApiError> {
        let path = format!("{}/grants", GOVERNANCE_BASE);
        let filter = format!(
            "target.externalId eq \"{}\" AND target.type eq \"{}\"",
            target_id, target_type
        );
        let items = self.list(
            &path,
            &[("filter", &filter), ("include", "full_entitlements")],
            "grants",
        )?;
        Ok(items.iter().filter_map(Grant::from_value).collect())
    }

    /// All access review campaigns.
    pub fn reviews(&self) -> Result<Vec<ResourceRecord>, ApiError> {
        let path = format!("{}/reviews", GOVERNANCE_BASE);
        let items = self.list(&path, &[], "reviews")?;
        Ok(items.iter().filter_map(ResourceRecord::from_value).collect())
    }

    /// All approval workflows (request sequences).
    pub fn sequences(&self) -> Result<Vec<ResourceRecord>, ApiError> {
        let path = format!("{}/request-sequences", GOVERNANCE_BASE);
        let items = self.list(&path, &[], "sequences")?;
        Ok(items.iter().filter_map(ResourceRecord::from_value).collect())
    }

    /// All access-request catalog entries.
    pub fn catalog_entries(&self) -> Result<Vec<ResourceRecord>, ApiError> {
        let path = format!("{}/catalog/entries", GOVERNANCE_BASE);
        let items = self.list(&path, &[], "entries")?;
        Ok(items.iter().filter_map(ResourceRecord::from_value).collect())
    }

    /// The org-global request settings object, or `None` when the
    /// feature is disabled.
    pub fn request_settings(&self) -> Result<Option<Value>, ApiError> {
        let path = format!("{}/request-settings", GOVERNANCE_BASE);
        match self.transport.execute(Method::Get, &path, &[], None) {
            Ok(Value::Null) => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_absence() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// All governance labels, each enriched with the resources it is
    /// applied to. A failed per-label resource listing degrades to an
    /// empty resource list rather than failing the kind.
    pub fn labels(&self) -> Result<Vec<Label>, ApiError> {
        let path = format!("{}/labels", GOVERNANCE_BASE);
        let items = self.list(&path, &[], "labels")?;

        let mut labels = Vec::new();
        for item in &items {
            let name = match item.get("name").and_then(Value::as_str) {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => continue,
            };
            let description = item
                .get("description")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let resources = self.label_resources(&name).unwrap_or_default();
            labels.push(Label {
                name,
                description,
                resources,
            });
        }
        Ok(labels)
    }

    /// Raw label list items (with labelId/value metadata) for the
    /// label-mappings sync.
    pub fn raw_labels(&self) -> Result<Vec<Value>, ApiError> {
        let path = format!("{}/labels", GOVERNANCE_BASE);
        self.list(&path, &[], "labels")
    }

    /// Resources carrying a given label.
    pub fn label_resources(&self, label_name: &str) -> Result<Vec<Value>, ApiError> {
        let path = format!(
            "{}/labels/{}/resources",
            GOVERNANCE_BASE,
            urlencoding::encode(label_name)
        );
        self.list(&path, &[], "resources")
    }

    /// All resource-label assignments in the org.
    pub fn resource_labels(&self) -> Result<Vec<Value>, ApiError> {
        let path = format!("{}/resource-labels", GOVERNANCE_BASE);
        self.list(&path, &[], "assignments")
    }

    /// Owner assignments under one parent resource ORN.
    pub fn resource_owners(&self, parent_resource_orn: &str) -> Result<Vec<Value>, ApiError> {
        let path = format!("{}/resource-owners", GOVERNANCE_BASE);
        let filter = format!("parentResourceOrn eq \"{}\"", parent_resource_orn);
        self.list(&path, &[("filter", &filter)], "owners")
    }

    /// Number of entitlements in the org, without the per-item detail
    /// fetches of `entitlements_detailed`.
    pub fn entitlement_count(&self) -> Result<usize, ApiError> {
        Ok(self
            .list("/api/v1/governance/entitlements", &[], "entitlements")?
            .len())
    }

    /// Flat entitlements with per-item detail fetch. Items whose detail
    /// lookup 404s (deleted between list and get) are dropped.
    pub fn entitlements_detailed(&self) -> Result<Vec<Value>, ApiError> {
        let items = self.list("/api/v1/governance/entitlements", &[], "entitlements")?;

        let mut detailed = Vec::new();
        for item in &items {
            let Some(id) = item.get("id").and_then(Value::as_str) else {
                continue;
            };
            match self.entitlement(id)? {
                Some(full) => detailed.push(full),
                None => continue,
            }
        }
        Ok(detailed)
    }

    /// One entitlement by id; `None` on 404.
    pub fn entitlement(&self, entitlement_id: &str) -> Result<Option<Value>, ApiError> {
        let path = format!("/api/v1/governance/entitlements/{}", entitlement_id);
        match self.transport.execute(Method::Get, &path, &[], None) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_absence() => Ok(None),
            Err(e) => Err(e),
        }
    }
}
