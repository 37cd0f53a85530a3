use crate::application::services::ResourceFetcher;
use crate::governance::domain::{LabelMappings, LabelMetadata, OrnCategory};
use crate::ports::outbound::{ApiTransport, StatusReporter};
use crate::shared::Result;
use serde_json::Value;
use std::collections::BTreeMap;

/// SyncLabelsUseCase - Builds the version-controlled label mappings file
///
/// Pulls every label and every resource-label assignment, then folds
/// them into the `label_mappings.json` structure: label name to
/// identifier metadata, and category -> label name -> sorted ORN list
/// for the assignments. Every label gets an entry in every category,
/// empty or not, so adding an assignment is always a one-line diff.
pub struct SyncLabelsUseCase<'a, T, R>
where
    T: ApiTransport,
    R: StatusReporter,
{
    fetcher: ResourceFetcher<'a, T>,
    reporter: &'a R,
}

impl<'a, T, R> SyncLabelsUseCase<'a, T, R>
where
    T: ApiTransport,
    R: StatusReporter,
{
    pub fn new(transport: &'a T, reporter: &'a R) -> Self {
        Self {
            fetcher: ResourceFetcher::new(transport),
            reporter,
        }
    }

    /// Returns `None` when the org has no labels, in which case there
    /// is nothing meaningful to write and the run should exit nonzero.
    pub fn execute(&self) -> Result<Option<LabelMappings>> {
        self.reporter.report("Querying labels from Okta...");
        let labels = self.fetcher.raw_labels()?;
        self.reporter
            .report(&format!("  ✅ Found {} labels", labels.len()));
        if labels.is_empty() {
            return Ok(None);
        }

        self.reporter.report("Querying resource-label assignments...");
        let assignments = self.fetcher.resource_labels()?;
        self.reporter
            .report(&format!("  ✅ Found {} assignments", assignments.len()));

        let last_synced = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string();
        Ok(Some(build_mappings(&labels, &assignments, last_synced)))
    }
}

/// Fold raw label and assignment payloads into the mappings document.
/// Pure so the shape is testable without a transport.
pub fn build_mappings(
    labels: &[Value],
    assignments: &[Value],
    last_synced: String,
) -> LabelMappings {
    let mut label_metadata = BTreeMap::new();
    for label in labels {
        let Some(name) = label.get("name").and_then(Value::as_str) else {
            continue;
        };
        let values = label.get("values").and_then(Value::as_array);
        let first_value = values.and_then(|v| v.first());
        let background_color = first_value
            .and_then(|v| v.get("metadata"))
            .and_then(|m| m.get("additionalProperties"))
            .and_then(|p| p.get("backgroundColor"))
            .and_then(Value::as_str);

        let mut metadata = BTreeMap::new();
        if let Some(bg) = background_color {
            metadata.insert("backgroundColor".to_string(), bg.to_string());
        }

        label_metadata.insert(
            name.to_string(),
            LabelMetadata {
                label_id: label
                    .get("labelId")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                label_value_id: first_value
                    .and_then(|v| v.get("labelValueId"))
                    .and_then(Value::as_str)
                    .map(str::to_string),
                description: label
                    .get("description")
                    .and_then(Value::as_str)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} label", name)),
                color: background_color.map(str::to_string),
                metadata,
            },
        );
    }

    // label name -> category -> ORN set, deduplicated as we fold.
    let mut by_label: BTreeMap<String, BTreeMap<&'static str, Vec<String>>> = BTreeMap::new();
    for assignment in assignments {
        let resource_orn = assignment
            .get("resource")
            .and_then(|r| r.get("orn"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        if resource_orn.is_empty() {
            continue;
        }
        let category = OrnCategory::of(resource_orn).key();

        let Some(assignment_labels) = assignment.get("labels").and_then(Value::as_array) else {
            continue;
        };
        for label in assignment_labels {
            let Some(label_name) = label.get("name").and_then(Value::as_str) else {
                continue;
            };
            let orns = by_label
                .entry(label_name.to_string())
                .or_default()
                .entry(category)
                .or_default();
            if !orns.iter().any(|o| o == resource_orn) {
                orns.push(resource_orn.to_string());
            }
        }
    }

    let mut mapping_assignments: BTreeMap<String, BTreeMap<String, Vec<String>>> = BTreeMap::new();
    for category in OrnCategory::ALL {
        let mut per_label = BTreeMap::new();
        for name in label_metadata.keys() {
            let mut orns = by_label
                .get(name)
                .and_then(|categories| categories.get(category.key()))
                .cloned()
                .unwrap_or_default();
            orns.sort();
            per_label.insert(name.clone(), orns);
        }
        mapping_assignments.insert(category.key().to_string(), per_label);
    }

    LabelMappings {
        description: "Label ID mappings synced from Okta OIG".to_string(),
        last_synced,
        labels: label_metadata,
        assignments: mapping_assignments,
        notes: vec![
            "This file is the source of truth for label assignments".to_string(),
            "To add a new label assignment, submit a PR adding the ORN to the appropriate array"
                .to_string(),
            "Run the sync-labels mode to refresh this file from Okta".to_string(),
        ],
    }
}
