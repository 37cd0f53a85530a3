use serde_json::Value;

/// The resource kinds the sync core knows how to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Bundle,
    Grant,
    Review,
    Sequence,
    CatalogEntry,
    RequestSettings,
    Label,
    OwnerAssignment,
    Entitlement,
}

impl ResourceKind {
    /// Stable lowercase token used for artifact file names and status keys.
    pub fn key(&self) -> &'static str {
        match self {
            ResourceKind::Bundle => "entitlements",
            ResourceKind::Grant => "grants",
            ResourceKind::Review => "reviews",
            ResourceKind::Sequence => "request_sequences",
            ResourceKind::CatalogEntry => "catalog_entries",
            ResourceKind::RequestSettings => "request_settings",
            ResourceKind::Label => "labels",
            ResourceKind::OwnerAssignment => "resource_owners",
            ResourceKind::Entitlement => "entitlements",
        }
    }
}

/// A generic fetched governance object.
///
/// The provider id and display name are lifted out for the generators;
/// everything else stays in `raw` so the JSON dumps preserve the full
/// API payload.
#[derive(Debug, Clone)]
pub struct ResourceRecord {
    pub id: String,
    pub name: String,
    pub raw: Value,
}

impl ResourceRecord {
    /// Parse a record from a provider list item. Returns `None` when the
    /// item carries no usable id.
    pub fn from_value(value: &Value) -> Option<Self> {
        let id = value.get("id").and_then(Value::as_str)?.to_string();
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
            .unwrap_or("unnamed")
            .to_string();
        Some(Self {
            id,
            name,
            raw: value.clone(),
        })
    }

    /// Convenience accessor into the raw payload.
    pub fn raw_str(&self, field: &str) -> Option<&str> {
        self.raw.get(field).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_from_value() {
        let value = json!({"id": "rev1", "name": "Quarterly Review", "status": "ACTIVE"});
        let record = ResourceRecord::from_value(&value).unwrap();
        assert_eq!(record.id, "rev1");
        assert_eq!(record.name, "Quarterly Review");
        assert_eq!(record.raw_str("status"), Some("ACTIVE"));
    }

    #[test]
    fn test_record_missing_name_defaults_to_unnamed() {
        let value = json!({"id": "rev2"});
        let record = ResourceRecord::from_value(&value).unwrap();
        assert_eq!(record.name, "unnamed");
    }

    #[test]
    fn test_record_empty_name_defaults_to_unnamed() {
        let value = json!({"id": "rev3", "name": ""});
        let record = ResourceRecord::from_value(&value).unwrap();
        assert_eq!(record.name, "unnamed");
    }

    #[test]
    fn test_record_without_id_is_dropped() {
        let value = json!({"name": "no id here"});
        assert!(ResourceRecord::from_value(&value).is_none());
    }

    #[test]
    fn test_kind_keys() {
        assert_eq!(ResourceKind::Review.key(), "reviews");
        assert_eq!(ResourceKind::Sequence.key(), "request_sequences");
        assert_eq!(ResourceKind::CatalogEntry.key(), "catalog_entries");
        assert_eq!(ResourceKind::Label.key(), "labels");
    }
}
