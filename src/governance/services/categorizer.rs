use serde_json::Value;

/// Marker substring identifying application targets inside an ORN.
const APP_MARKER: &str = ":apps:";

/// Best-effort classification of where an entitlement record came from.
///
/// The provider does not expose an authoritative flag, so this is a
/// structural heuristic over the record's resource reference and its
/// optional source field. Rules apply in order, first match wins:
///
/// 1. resource ORN contains `:apps:`, or the resource type mentions
///    "app" (case-insensitive) -> `AppManaged`;
/// 2. explicit source field `app`/`application` -> `AppManaged`,
///    `manual`/`custom` -> `Manual`;
/// 3. any non-empty resource reference -> `Manual`;
/// 4. otherwise `Unknown`.
///
/// Note the marker check runs before the source field, so a record with
/// an app-typed resource and `source: manual` classifies as `AppManaged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    AppManaged,
    Manual,
    Unknown,
}

impl Origin {
    pub fn classify(
        resource_orn: Option<&str>,
        resource_type: Option<&str>,
        source: Option<&str>,
    ) -> Self {
        let orn = resource_orn.unwrap_or("");
        let rtype = resource_type.unwrap_or("");

        if orn.contains(APP_MARKER) || rtype.to_lowercase().contains("app") {
            return Origin::AppManaged;
        }

        if let Some(source) = source {
            match source.to_lowercase().as_str() {
                "app" | "application" => return Origin::AppManaged,
                "manual" | "custom" => return Origin::Manual,
                _ => {}
            }
        }

        if !orn.is_empty() || !rtype.is_empty() {
            return Origin::Manual;
        }

        Origin::Unknown
    }

    /// Classify a raw entitlement record. The resource reference lives
    /// under `resource` (export endpoint) or `target` (bundle endpoint).
    pub fn of_record(record: &Value) -> Self {
        let reference = record.get("resource").or_else(|| record.get("target"));

        let resource_orn = record
            .get("orn")
            .and_then(Value::as_str)
            .or_else(|| reference.and_then(|r| r.get("orn")).and_then(Value::as_str));

        let resource_type = reference
            .and_then(|r| r.get("type"))
            .and_then(Value::as_str);

        let source = record.get("source").and_then(Value::as_str);

        Self::classify(resource_orn, resource_type, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_app_marker_in_orn_wins() {
        let origin = Origin::classify(Some("orn:okta:idp:acme:apps:oauth2:0oa1"), None, None);
        assert_eq!(origin, Origin::AppManaged);
    }

    #[test]
    fn test_app_typed_resource_wins() {
        let origin = Origin::classify(None, Some("APPLICATION"), None);
        assert_eq!(origin, Origin::AppManaged);
    }

    #[test]
    fn test_marker_check_precedes_source_field() {
        // Observed precedence: an app-like resource with an explicit
        // manual source still classifies as app-managed.
        let origin = Origin::classify(None, Some("APPLICATION"), Some("manual"));
        assert_eq!(origin, Origin::AppManaged);
    }

    #[test]
    fn test_explicit_source_fields() {
        assert_eq!(Origin::classify(None, None, Some("app")), Origin::AppManaged);
        assert_eq!(
            Origin::classify(None, None, Some("APPLICATION")),
            Origin::AppManaged
        );
        assert_eq!(Origin::classify(None, None, Some("manual")), Origin::Manual);
        assert_eq!(Origin::classify(None, None, Some("custom")), Origin::Manual);
    }

    #[test]
    fn test_non_empty_reference_without_markers_is_manual() {
        let origin = Origin::classify(
            Some("orn:okta:directory:acme:groups:00g1"),
            Some("GROUP"),
            None,
        );
        assert_eq!(origin, Origin::Manual);
    }

    #[test]
    fn test_nothing_at_all_is_unknown() {
        assert_eq!(Origin::classify(None, None, None), Origin::Unknown);
        assert_eq!(Origin::classify(Some(""), Some(""), None), Origin::Unknown);
    }

    #[test]
    fn test_of_record_reads_resource_reference() {
        let record = json!({
            "id": "ent1",
            "resource": {"orn": "orn:okta:idp:acme:apps:saml:0oa2", "type": "APPLICATION"}
        });
        assert_eq!(Origin::of_record(&record), Origin::AppManaged);

        let record = json!({
            "id": "ent2",
            "resource": {"orn": "orn:okta:directory:acme:groups:00g1", "type": "GROUP"}
        });
        assert_eq!(Origin::of_record(&record), Origin::Manual);

        let record = json!({"id": "ent3"});
        assert_eq!(Origin::of_record(&record), Origin::Unknown);
    }

    #[test]
    fn test_of_record_unknown_source_string_falls_through() {
        let record = json!({"id": "ent4", "source": "mystery"});
        assert_eq!(Origin::of_record(&record), Origin::Unknown);
    }
}
