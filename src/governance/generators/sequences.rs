use super::{GeneratedConfig, ImportDirective};
use crate::governance::domain::ResourceRecord;
use crate::governance::services::sanitize;

/// Generate `okta_request_sequences` configuration for approval workflows.
pub fn generate_sequences(sequences: &[ResourceRecord]) -> GeneratedConfig {
    if sequences.is_empty() {
        return GeneratedConfig::default();
    }

    let mut out = GeneratedConfig::default();
    let mut lines: Vec<String> = vec![
        "# Approval Workflows (Request Sequences)".to_string(),
        String::new(),
    ];

    for seq in sequences {
        let key = sanitize(&seq.name);
        let description = seq.raw_str("description").unwrap_or_default();

        lines.push(format!("resource \"okta_request_sequences\" \"{}\" {{", key));
        lines.push(format!("  # ID: {}", seq.id));
        lines.push(format!("  name        = \"{}\"", seq.name));
        if !description.is_empty() {
            lines.push(format!("  description = \"{}\"", description));
        }
        lines.push(String::new());
        lines.push("  # TODO: Add approval stages".to_string());
        lines.push(
            "  # See: https://registry.terraform.io/providers/okta/okta/latest/docs/resources/request_sequences"
                .to_string(),
        );
        lines.push("}".to_string());
        lines.push(String::new());

        out.directives
            .push(ImportDirective::new("okta_request_sequences", &key, &seq.id));
    }

    out.config_text = lines.join("\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sequence_block_and_directive() {
        let sequences = vec![ResourceRecord::from_value(
            &json!({"id": "seq1", "name": "Manager Approval"}),
        )
        .unwrap()];
        let generated = generate_sequences(&sequences);

        assert!(generated
            .config_text
            .contains("resource \"okta_request_sequences\" \"manager_approval\""));
        assert_eq!(generated.directives.len(), 1);
        assert_eq!(
            generated.directives[0].render(),
            "terraform import okta_request_sequences.manager_approval seq1"
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(generate_sequences(&[]).is_empty());
    }
}
