use super::{GeneratedConfig, ImportDirective};
use crate::governance::domain::{EntitlementBundle, Grant};
use crate::governance::services::sanitize;

/// A bundle paired with the grants that resolved to it through the
/// client-side join. Grants are fetched by the orchestrator before
/// generation so this generator stays pure.
#[derive(Debug, Clone)]
pub struct BundleWithGrants {
    pub bundle: EntitlementBundle,
    pub grants: Vec<Grant>,
}

const RULE: &str = "# =============================================================================";

/// Generate the `okta_principal_entitlements` configuration for manual
/// entitlement bundles.
///
/// Bundles whose ORN marks an application target and whose type is not
/// MANUAL belong to the app's own lifecycle and are skipped; the skip is
/// reported through `GeneratedConfig::skipped`. Import directives for
/// this resource type are emitted commented-out.
pub fn generate_entitlements(bundles: &[BundleWithGrants]) -> GeneratedConfig {
    if bundles.is_empty() {
        return GeneratedConfig::default();
    }

    let mut out = GeneratedConfig::default();
    let mut lines: Vec<String> = vec![
        RULE.to_string(),
        "# OKTA IDENTITY GOVERNANCE - ENTITLEMENT BUNDLES".to_string(),
        RULE.to_string(),
        "# Entitlement bundles imported from Okta. Each bundle is a collection of".to_string(),
        "# access rights; principal assignments are managed through the".to_string(),
        "# okta_principal_entitlements resource, while the bundles themselves remain".to_string(),
        "# API-managed and cannot be created from Terraform.".to_string(),
        "#".to_string(),
        "# To import: run the generated import.sh script".to_string(),
        RULE.to_string(),
        String::new(),
    ];

    let mut emitted_any = false;

    for entry in bundles {
        let bundle = &entry.bundle;

        // App-managed bundles are owned by the app lifecycle, not Terraform.
        if bundle.orn.contains(":apps:") && !bundle.is_manual() {
            out.skipped
                .push(format!("app-managed bundle: {}", bundle.name));
            continue;
        }

        emitted_any = true;
        let key = sanitize(&bundle.name);

        lines.push(format!("# {}", "-".repeat(77)));
        lines.push(format!("# {}", bundle.name));
        lines.push(format!("# {}", "-".repeat(77)));
        lines.push(String::new());
        lines.push(format!(
            "resource \"okta_principal_entitlements\" \"{}\" {{",
            key
        ));
        lines.push(format!("  # Bundle ID: {}", bundle.id));
        lines.push(format!("  # ORN: {}", bundle.orn));
        lines.push(format!("  # Type: {}", bundle.bundle_type));
        if !bundle.description.is_empty() {
            lines.push(format!("  # Description: {}", bundle.description));
        }
        lines.push(String::new());

        if entry.grants.is_empty() {
            lines.push("  # TODO: No principal assignments found".to_string());
            lines.push("  # Add principal and entitlement configuration as needed".to_string());
            lines.push(String::new());
            lines.push("  # Example configuration:".to_string());
            lines.push("  # principal {".to_string());
            lines.push("  #   id   = \"00u...\"  # User or group ID".to_string());
            lines.push("  #   type = \"USER\"    # or \"GROUP\"".to_string());
            lines.push("  # }".to_string());
            lines.push("  #".to_string());
            lines.push("  # entitlement {".to_string());
            lines.push(format!("  #   id   = \"{}\"", bundle.id));
            lines.push(format!("  #   name = \"{}\"", bundle.name));
            lines.push("  # }".to_string());
        } else {
            for grant in &entry.grants {
                lines.push("  principal {".to_string());
                lines.push(format!("    id   = \"{}\"", grant.principal_id));
                lines.push(format!("    type = \"{}\"", grant.principal_type));
                if let Some(name) = &grant.principal_name {
                    lines.push(format!("    # Name: {}", name));
                }
                lines.push("  }".to_string());
                lines.push(String::new());
            }
            lines.push("  entitlement {".to_string());
            lines.push(format!("    id   = \"{}\"", bundle.id));
            lines.push(format!("    name = \"{}\"", bundle.name));
            lines.push("  }".to_string());
        }

        lines.push("}".to_string());
        lines.push(String::new());

        out.directives.push(
            ImportDirective::new("okta_principal_entitlements", &key, &bundle.id)
                .commented(format!("Import bundle: {}", bundle.name)),
        );
    }

    if emitted_any {
        out.config_text = lines.join("\n");
    }
    out
}
