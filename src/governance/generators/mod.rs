//! Pure config generators: fetched records in, declarative Terraform text
//! plus import directives out. No I/O and no clocks live here, so output
//! is byte-identical for identical input — the orchestrator owns logging
//! and persistence.

pub mod catalog;
pub mod entitlements;
pub mod reviews;
pub mod sequences;
pub mod settings;

pub use catalog::generate_catalog_entries;
pub use entitlements::{generate_entitlements, BundleWithGrants};
pub use reviews::generate_reviews;
pub use sequences::generate_sequences;
pub use settings::generate_request_settings;

/// One `terraform import` command pairing a declarative key with the
/// provider-assigned id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDirective {
    pub resource_type: String,
    pub key: String,
    pub id: String,
    /// Emitted commented-out when the provider's import syntax for this
    /// resource type is unconfirmed; the operator uncomments after review.
    pub commented: bool,
    /// Optional comment line rendered above the command.
    pub note: Option<String>,
}

impl ImportDirective {
    pub fn new(resource_type: &str, key: &str, id: &str) -> Self {
        Self {
            resource_type: resource_type.to_string(),
            key: key.to_string(),
            id: id.to_string(),
            commented: false,
            note: None,
        }
    }

    pub fn commented(mut self, note: impl Into<String>) -> Self {
        self.commented = true;
        self.note = Some(note.into());
        self
    }

    /// Render as shell-script lines.
    pub fn render(&self) -> String {
        let command = format!(
            "terraform import {}.{} {}",
            self.resource_type, self.key, self.id
        );
        match (&self.note, self.commented) {
            (Some(note), true) => format!("# {}\n# {}", note, command),
            (Some(note), false) => format!("# {}\n{}", note, command),
            (None, true) => format!("# {}", command),
            (None, false) => command,
        }
    }
}

/// Output of one per-kind generator.
#[derive(Debug, Default)]
pub struct GeneratedConfig {
    pub config_text: String,
    pub directives: Vec<ImportDirective>,
    /// Human-readable notes for records the generator refused to manage.
    pub skipped: Vec<String>,
}

impl GeneratedConfig {
    pub fn is_empty(&self) -> bool {
        self.config_text.is_empty()
    }
}

/// Render the aggregated import script from every kind's directives.
pub fn render_import_script(directives: &[ImportDirective]) -> String {
    let mut lines = vec![
        "#!/bin/bash".to_string(),
        "# Terraform import commands for OIG resources".to_string(),
        "# Review the generated .tf files and complete TODO items before running".to_string(),
        String::new(),
        "set -e".to_string(),
        String::new(),
    ];
    for directive in directives {
        lines.push(directive.render());
        lines.push(String::new());
    }
    lines.join("\n")
}
