use serde_json::Value;

/// A principal-to-entitlement assignment fetched from the grants endpoint.
///
/// Grants arrive in two shapes depending on org configuration: a nested
/// `targetPrincipal` object, or flat `principalId`/`principalType` fields.
/// The nested shape wins when both are present. Principal types carry an
/// `OKTA_` prefix in the nested shape (`OKTA_USER`) which is stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grant {
    pub principal_id: String,
    pub principal_type: String,
    pub principal_name: Option<String>,
    pub entitlement_id: Option<String>,
}

impl Grant {
    /// Parse a grant from a provider list item. Returns `None` when no
    /// principal id can be resolved from either shape.
    pub fn from_value(value: &Value) -> Option<Self> {
        let nested = value.get("targetPrincipal");

        let principal_id = nested
            .and_then(|p| p.get("externalId"))
            .and_then(Value::as_str)
            .or_else(|| value.get("principalId").and_then(Value::as_str))?
            .to_string();

        let principal_type = nested
            .and_then(|p| p.get("type"))
            .and_then(Value::as_str)
            .map(|t| t.trim_start_matches("OKTA_").to_string())
            .filter(|t| !t.is_empty())
            .or_else(|| {
                value
                    .get("principalType")
                    .and_then(Value::as_str)
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "USER".to_string());

        let principal_name = nested
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str)
            .or_else(|| value.get("principalName").and_then(Value::as_str))
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        let entitlement_id = value
            .get("entitlement")
            .and_then(|e| {
                e.get("id")
                    .and_then(Value::as_str)
                    .or_else(|| e.get("externalId").and_then(Value::as_str))
            })
            .map(str::to_string);

        Some(Self {
            principal_id,
            principal_type,
            principal_name,
            entitlement_id,
        })
    }

    /// True when this grant's embedded entitlement reference points at the
    /// given bundle. This is the client-side half of the grants join: the
    /// API only filters by target resource, never by entitlement.
    pub fn matches_bundle(&self, bundle_id: &str) -> bool {
        self.entitlement_id.as_deref() == Some(bundle_id)
    }
}

/// Keep only the grants whose embedded entitlement id equals `bundle_id`.
pub fn grants_for_bundle(grants: &[Grant], bundle_id: &str) -> Vec<Grant> {
    grants
        .iter()
        .filter(|g| g.matches_bundle(bundle_id))
        .cloned()
        .collect()
}
