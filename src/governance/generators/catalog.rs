use super::{GeneratedConfig, ImportDirective};
use crate::governance::domain::ResourceRecord;
use crate::governance::services::sanitize;

/// Generate `okta_catalog_entry_default` configuration for catalog entries.
pub fn generate_catalog_entries(entries: &[ResourceRecord]) -> GeneratedConfig {
    if entries.is_empty() {
        return GeneratedConfig::default();
    }

    let mut out = GeneratedConfig::default();
    let mut lines: Vec<String> = vec!["# Catalog Entries".to_string(), String::new()];

    for entry in entries {
        let key = sanitize(&entry.name);
        let app_id = entry.raw_str("appId").unwrap_or_default();

        lines.push(format!(
            "resource \"okta_catalog_entry_default\" \"{}\" {{",
            key
        ));
        lines.push(format!("  # ID: {}", entry.id));
        lines.push(format!("  app_id = \"{}\"", app_id));
        lines.push(String::new());
        lines.push("  # TODO: Review and add catalog configuration".to_string());
        lines.push(
            "  # See: https://registry.terraform.io/providers/okta/okta/latest/docs/resources/catalog_entry_default"
                .to_string(),
        );
        lines.push("}".to_string());
        lines.push(String::new());

        out.directives.push(ImportDirective::new(
            "okta_catalog_entry_default",
            &key,
            &entry.id,
        ));
    }

    out.config_text = lines.join("\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog_block_includes_app_id() {
        let entries = vec![ResourceRecord::from_value(
            &json!({"id": "cen1", "name": "Salesforce", "appId": "0oa55"}),
        )
        .unwrap()];
        let generated = generate_catalog_entries(&entries);

        assert!(generated
            .config_text
            .contains("resource \"okta_catalog_entry_default\" \"salesforce\""));
        assert!(generated.config_text.contains("app_id = \"0oa55\""));
        assert_eq!(generated.directives.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        assert!(generate_catalog_entries(&[]).is_empty());
    }
}
