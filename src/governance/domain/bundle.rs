use serde_json::Value;

/// The resource an entitlement bundle governs (typically an application).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTarget {
    pub external_id: String,
    pub kind: String,
}

/// An entitlement bundle fetched from the governance API.
///
/// The API is loose about field names: the id may arrive as `id` or
/// `bundleId`, and `bundleType` is frequently absent for older bundles,
/// in which case it is treated as MANUAL.
#[derive(Debug, Clone)]
pub struct EntitlementBundle {
    pub id: String,
    pub name: String,
    pub description: String,
    pub orn: String,
    pub bundle_type: String,
    pub target: Option<ResourceTarget>,
    pub raw: Value,
}

impl EntitlementBundle {
    /// Parse a bundle from a provider list item. Returns `None` when
    /// neither `id` nor `bundleId` is present.
    pub fn from_value(value: &Value) -> Option<Self> {
        let id = value
            .get("id")
            .and_then(Value::as_str)
            .or_else(|| value.get("bundleId").and_then(Value::as_str))?
            .to_string();

        let str_field = |field: &str| -> String {
            value
                .get(field)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let name = value
            .get("name")
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
            .unwrap_or("unnamed")
            .to_string();

        let bundle_type = value
            .get("bundleType")
            .and_then(Value::as_str)
            .unwrap_or("MANUAL")
            .to_string();

        let target = value.get("target").and_then(|t| {
            let external_id = t.get("externalId").and_then(Value::as_str)?;
            let kind = t.get("type").and_then(Value::as_str)?;
            if external_id.is_empty() || kind.is_empty() {
                return None;
            }
            Some(ResourceTarget {
                external_id: external_id.to_string(),
                kind: kind.to_string(),
            })
        });

        Some(Self {
            id,
            name,
            description: str_field("description"),
            orn: str_field("orn"),
            bundle_type,
            target,
            raw: value.clone(),
        })
    }

    /// True when the bundle was hand-authored (MANUAL type).
    pub fn is_manual(&self) -> bool {
        self.bundle_type == "MANUAL"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bundle_full_parse() {
        let value = json!({
            "id": "enb1",
            "name": "Finance Admins",
            "description": "Finance admin access",
            "orn": "orn:okta:governance:acme:entitlement-bundles:enb1",
            "bundleType": "MANUAL",
            "target": {"externalId": "0oa123", "type": "APPLICATION"}
        });
        let bundle = EntitlementBundle::from_value(&value).unwrap();
        assert_eq!(bundle.id, "enb1");
        assert_eq!(bundle.name, "Finance Admins");
        assert!(bundle.is_manual());
        let target = bundle.target.unwrap();
        assert_eq!(target.external_id, "0oa123");
        assert_eq!(target.kind, "APPLICATION");
    }

    #[test]
    fn test_bundle_id_falls_back_to_bundle_id_field() {
        let value = json!({"bundleId": "enb2", "name": "Legacy"});
        let bundle = EntitlementBundle::from_value(&value).unwrap();
        assert_eq!(bundle.id, "enb2");
    }

    #[test]
    fn test_bundle_type_defaults_to_manual() {
        let value = json!({"id": "enb3"});
        let bundle = EntitlementBundle::from_value(&value).unwrap();
        assert_eq!(bundle.bundle_type, "MANUAL");
        assert_eq!(bundle.name, "unnamed");
        assert!(bundle.target.is_none());
    }

    #[test]
    fn test_bundle_without_any_id_is_dropped() {
        let value = json!({"name": "no ids"});
        assert!(EntitlementBundle::from_value(&value).is_none());
    }

    #[test]
    fn test_empty_target_fields_yield_no_target() {
        let value = json!({"id": "enb4", "target": {"externalId": "", "type": "APPLICATION"}});
        let bundle = EntitlementBundle::from_value(&value).unwrap();
        assert!(bundle.target.is_none());
    }
}
