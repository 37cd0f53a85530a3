use super::{GeneratedConfig, ImportDirective};
use serde_json::Value;

/// Generate the single `okta_request_settings` block. The settings object
/// is org-global, so the import id is the fixed token `default`.
pub fn generate_request_settings(settings: Option<&Value>) -> GeneratedConfig {
    if settings.is_none() {
        return GeneratedConfig::default();
    }

    let lines = [
        "# Global Request Settings",
        "",
        "resource \"okta_request_settings\" \"settings\" {",
        "  # Global settings for access requests",
        "",
        "  # TODO: Add request settings configuration",
        "  # See: https://registry.terraform.io/providers/okta/okta/latest/docs/resources/request_settings",
        "}",
        "",
    ];

    GeneratedConfig {
        config_text: lines.join("\n"),
        directives: vec![ImportDirective::new(
            "okta_request_settings",
            "settings",
            "default",
        )],
        skipped: vec![],
    }
}
