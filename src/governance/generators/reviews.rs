use super::{GeneratedConfig, ImportDirective};
use crate::governance::domain::ResourceRecord;
use crate::governance::services::sanitize;

/// Generate `okta_reviews` configuration for access review campaigns.
pub fn generate_reviews(reviews: &[ResourceRecord]) -> GeneratedConfig {
    if reviews.is_empty() {
        return GeneratedConfig::default();
    }

    let mut out = GeneratedConfig::default();
    let mut lines: Vec<String> = vec!["# Access Review Campaigns".to_string(), String::new()];

    for review in reviews {
        let key = sanitize(&review.name);
        let description = review.raw_str("description").unwrap_or_default();

        lines.push(format!("resource \"okta_reviews\" \"{}\" {{", key));
        lines.push(format!("  # ID: {}", review.id));
        lines.push(format!("  name        = \"{}\"", review.name));
        if !description.is_empty() {
            lines.push(format!("  description = \"{}\"", description));
        }
        lines.push(String::new());
        lines.push("  # TODO: Add schedule, scope, and reviewer configuration".to_string());
        lines.push(
            "  # See: https://registry.terraform.io/providers/okta/okta/latest/docs/resources/reviews"
                .to_string(),
        );
        lines.push("}".to_string());
        lines.push(String::new());

        out.directives
            .push(ImportDirective::new("okta_reviews", &key, &review.id));
    }

    out.config_text = lines.join("\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: &str, name: &str) -> ResourceRecord {
        ResourceRecord::from_value(&json!({"id": id, "name": name, "description": "desc"})).unwrap()
    }

    #[test]
    fn test_one_block_and_directive_per_review() {
        let reviews = vec![record("rev1", "Quarterly SOX"), record("rev2", "Annual")];
        let generated = generate_reviews(&reviews);

        assert!(generated
            .config_text
            .contains("resource \"okta_reviews\" \"quarterly_sox\""));
        assert!(generated.config_text.contains("# ID: rev1"));
        assert_eq!(generated.directives.len(), 2);
        assert_eq!(
            generated.directives[0].render(),
            "terraform import okta_reviews.quarterly_sox rev1"
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(generate_reviews(&[]).is_empty());
    }

    #[test]
    fn test_deterministic_output() {
        let reviews = vec![record("rev1", "Quarterly SOX")];
        assert_eq!(
            generate_reviews(&reviews).config_text,
            generate_reviews(&reviews).config_text
        );
    }
}
