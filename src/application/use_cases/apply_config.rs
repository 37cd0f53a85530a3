use crate::config::{Credentials, SyncConfig};
use crate::ports::outbound::{ApiTransport, Method, StatusReporter};
use crate::shared::Result;
use serde_json::json;

/// ApplyConfigUseCase - Pushes API-only resources from local config
///
/// Labels, owner assignments, and label assignments have no Terraform
/// provider support, so they are managed directly against the API from
/// the JSON config file. Both directions are item-level best-effort: a
/// failed item is reported as a warning and the run continues, so the
/// summary counts reflect what actually landed.
///
/// Apply is idempotent: a 409 on label create means the label already
/// exists and counts as success, and the owner/label assignment PUTs
/// replace state rather than append.
pub struct ApplyConfigUseCase<'a, T, R>
where
    T: ApiTransport,
    R: StatusReporter,
{
    transport: &'a T,
    reporter: &'a R,
}

/// Item tallies for one apply or destroy run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ApplyOutcome {
    pub succeeded: usize,
    pub failed: usize,
}

impl ApplyOutcome {
    fn ok(&mut self) {
        self.succeeded += 1;
    }

    fn err(&mut self) {
        self.failed += 1;
    }
}

impl<'a, T, R> ApplyConfigUseCase<'a, T, R>
where
    T: ApiTransport,
    R: StatusReporter,
{
    pub fn new(transport: &'a T, reporter: &'a R) -> Self {
        Self {
            transport,
            reporter,
        }
    }

    pub fn apply(&self, credentials: &Credentials, config: &SyncConfig) -> Result<ApplyOutcome> {
        let org = &credentials.org_name;
        let mut outcome = ApplyOutcome::default();

        if !config.labels.is_empty() {
            self.reporter.report("Creating labels...");
        }
        for label in &config.labels {
            let description = if label.description.is_empty() {
                format!("Governance label: {}", label.name)
            } else {
                label.description.clone()
            };
            let body = json!({"name": label.name, "description": description});
            match self.transport.execute(
                Method::Post,
                "/governance/api/v1/labels",
                &[],
                Some(&body),
            ) {
                Ok(_) => {
                    self.reporter
                        .report(&format!("  Created label: {}", label.name));
                    outcome.ok();
                }
                Err(e) if e.is_conflict() => {
                    self.reporter
                        .report(&format!("  Label already exists: {}", label.name));
                    outcome.ok();
                }
                Err(e) => {
                    self.reporter
                        .warn(&format!("Could not create label {}: {}", label.name, e));
                    outcome.err();
                }
            }
        }

        if !config.resource_owners.is_empty() {
            self.reporter.report("Assigning resource owners...");
        }
        for assignment in &config.resource_owners {
            let principal_orns = assignment.principal_orns(org);
            let resource_orns = assignment.resources.resolve_orns(org);
            let body = json!({
                "principalOrns": principal_orns,
                "resourceOrns": resource_orns,
            });
            match self.transport.execute(
                Method::Put,
                "/governance/api/v1/resource-owners",
                &[],
                Some(&body),
            ) {
                Ok(_) => {
                    self.reporter.report(&format!(
                        "  Assigned {} owners to {} resources",
                        principal_orns.len(),
                        resource_orns.len()
                    ));
                    outcome.ok();
                }
                Err(e) => {
                    self.reporter
                        .warn(&format!("Could not assign owners: {}", e));
                    outcome.err();
                }
            }
        }

        if !config.label_assignments.is_empty() {
            self.reporter.report("Applying labels to resources...");
        }
        for assignment in &config.label_assignments {
            let resource_orns = assignment.resources.resolve_orns(org);
            let path = format!(
                "/governance/api/v1/labels/{}/resources",
                urlencoding::encode(&assignment.label_name)
            );
            let body = json!({"resourceOrns": resource_orns});
            match self
                .transport
                .execute(Method::Put, &path, &[], Some(&body))
            {
                Ok(_) => {
                    self.reporter.report(&format!(
                        "  Applied label '{}' to {} resources",
                        assignment.label_name,
                        resource_orns.len()
                    ));
                    outcome.ok();
                }
                Err(e) => {
                    self.reporter.warn(&format!(
                        "Could not apply label {}: {}",
                        assignment.label_name, e
                    ));
                    outcome.err();
                }
            }
        }

        Ok(outcome)
    }

    /// Remove everything the config describes, in reverse order of
    /// apply. Owner removal is a PATCH REMOVE per resource/principal
    /// pair because the API has no bulk unassign.
    pub fn destroy(&self, credentials: &Credentials, config: &SyncConfig) -> Result<ApplyOutcome> {
        let org = &credentials.org_name;
        let mut outcome = ApplyOutcome::default();

        if !config.label_assignments.is_empty() {
            self.reporter.report("Removing label assignments...");
        }
        for assignment in &config.label_assignments {
            let resource_orns = assignment.resources.resolve_orns(org);
            let path = format!(
                "/governance/api/v1/labels/{}/resources",
                urlencoding::encode(&assignment.label_name)
            );
            let body = json!({"resourceOrns": resource_orns});
            match self
                .transport
                .execute(Method::Delete, &path, &[], Some(&body))
            {
                Ok(_) => {
                    self.reporter.report(&format!(
                        "  Removed label '{}' from {} resources",
                        assignment.label_name,
                        resource_orns.len()
                    ));
                    outcome.ok();
                }
                Err(e) if e.is_absence() => {
                    self.reporter.report(&format!(
                        "  Label '{}' not present, nothing to remove",
                        assignment.label_name
                    ));
                    outcome.ok();
                }
                Err(e) => {
                    self.reporter.warn(&format!(
                        "Could not remove label {}: {}",
                        assignment.label_name, e
                    ));
                    outcome.err();
                }
            }
        }

        if !config.resource_owners.is_empty() {
            self.reporter.report("Removing resource owners...");
        }
        for assignment in &config.resource_owners {
            let principal_orns = assignment.principal_orns(org);
            let resource_orns = assignment.resources.resolve_orns(org);
            for resource_orn in &resource_orns {
                for principal_orn in &principal_orns {
                    let body = json!({
                        "resourceOrn": resource_orn,
                        "data": [{
                            "op": "REMOVE",
                            "path": "/principalOrn",
                            "value": principal_orn,
                        }],
                    });
                    match self.transport.execute(
                        Method::Patch,
                        "/governance/api/v1/resource-owners",
                        &[],
                        Some(&body),
                    ) {
                        Ok(_) => {
                            self.reporter.report(&format!(
                                "  Removed owner {} from {}",
                                principal_orn, resource_orn
                            ));
                            outcome.ok();
                        }
                        Err(e) if e.is_absence() => {
                            self.reporter.report(&format!(
                                "  Owner {} not assigned to {}",
                                principal_orn, resource_orn
                            ));
                            outcome.ok();
                        }
                        Err(e) => {
                            self.reporter
                                .warn(&format!("Could not remove owner: {}", e));
                            outcome.err();
                        }
                    }
                }
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LabelAssignmentSpec, LabelSpec, OwnerAssignmentSpec, ResourceSelector};
    use crate::ports::outbound::ApiError;
    use serde_json::Value;
    use std::cell::RefCell;

    struct ScriptedTransport {
        // One canned outcome per call, in order.
        script: RefCell<Vec<std::result::Result<Value, ApiError>>>,
        calls: RefCell<Vec<(Method, String, Option<Value>)>>,
    }

    impl ScriptedTransport {
        fn new(script: Vec<std::result::Result<Value, ApiError>>) -> Self {
            Self {
                script: RefCell::new(script),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ApiTransport for ScriptedTransport {
        fn execute(
            &self,
            method: Method,
            path: &str,
            _query: &[(&str, &str)],
            body: Option<&Value>,
        ) -> std::result::Result<Value, ApiError> {
            self.calls
                .borrow_mut()
                .push((method, path.to_string(), body.cloned()));
            let mut script = self.script.borrow_mut();
            if script.is_empty() {
                Ok(Value::Null)
            } else {
                script.remove(0)
            }
        }
    }

    struct SilentReporter {
        warnings: RefCell<Vec<String>>,
    }

    impl SilentReporter {
        fn new() -> Self {
            Self {
                warnings: RefCell::new(Vec::new()),
            }
        }
    }

    impl StatusReporter for SilentReporter {
        fn report(&self, _message: &str) {}

        fn warn(&self, message: &str) {
            self.warnings.borrow_mut().push(message.to_string());
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            org_name: "acme".to_string(),
            base_url: "okta.com".to_string(),
            api_token: "token".to_string(),
        }
    }

    fn full_config() -> SyncConfig {
        SyncConfig {
            labels: vec![LabelSpec {
                name: "production".to_string(),
                description: String::new(),
            }],
            resource_owners: vec![OwnerAssignmentSpec {
                principal_type: "user".to_string(),
                principal_ids: vec!["00u1".to_string()],
                resources: ResourceSelector {
                    resource_type: "app".to_string(),
                    app_type: "oauth2".to_string(),
                    resource_ids: vec!["0oa1".to_string()],
                    resource_orns: Vec::new(),
                },
            }],
            label_assignments: vec![LabelAssignmentSpec {
                label_name: "production".to_string(),
                resources: ResourceSelector {
                    resource_type: "group".to_string(),
                    app_type: "oauth2".to_string(),
                    resource_ids: vec!["00g1".to_string()],
                    resource_orns: Vec::new(),
                },
            }],
            query_resources: Vec::new(),
        }
    }

    #[test]
    fn test_apply_issues_expected_requests() {
        let transport = ScriptedTransport::new(vec![]);
        let reporter = SilentReporter::new();
        let use_case = ApplyConfigUseCase::new(&transport, &reporter);

        let outcome = use_case.apply(&credentials(), &full_config()).unwrap();
        assert_eq!(
            outcome,
            ApplyOutcome {
                succeeded: 3,
                failed: 0
            }
        );

        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].0, Method::Post);
        assert_eq!(calls[0].1, "/governance/api/v1/labels");
        assert_eq!(
            calls[0].2.as_ref().unwrap()["description"],
            "Governance label: production"
        );
        assert_eq!(calls[1].0, Method::Put);
        assert_eq!(calls[1].1, "/governance/api/v1/resource-owners");
        assert_eq!(
            calls[1].2.as_ref().unwrap()["principalOrns"][0],
            "orn:okta:directory:acme:users:00u1"
        );
        assert_eq!(
            calls[1].2.as_ref().unwrap()["resourceOrns"][0],
            "orn:okta:idp:acme:apps:oauth2:0oa1"
        );
        assert_eq!(calls[2].0, Method::Put);
        assert_eq!(calls[2].1, "/governance/api/v1/labels/production/resources");
        assert_eq!(
            calls[2].2.as_ref().unwrap()["resourceOrns"][0],
            "orn:okta:directory:acme:groups:00g1"
        );
    }

    #[test]
    fn test_apply_conflict_counts_as_success() {
        let transport = ScriptedTransport::new(vec![Err(ApiError::Conflict {
            body: "exists".to_string(),
        })]);
        let reporter = SilentReporter::new();
        let use_case = ApplyConfigUseCase::new(&transport, &reporter);

        let config = SyncConfig {
            labels: vec![LabelSpec {
                name: "production".to_string(),
                description: "prod".to_string(),
            }],
            ..SyncConfig::default()
        };
        let outcome = use_case.apply(&credentials(), &config).unwrap();

        assert_eq!(outcome.succeeded, 1);
        assert_eq!(outcome.failed, 0);
        assert!(reporter.warnings.borrow().is_empty());
    }

    #[test]
    fn test_apply_continues_past_failed_item() {
        let transport = ScriptedTransport::new(vec![Err(ApiError::Server {
            status: 500,
            body: "boom".to_string(),
        })]);
        let reporter = SilentReporter::new();
        let use_case = ApplyConfigUseCase::new(&transport, &reporter);

        let outcome = use_case.apply(&credentials(), &full_config()).unwrap();

        // Label create failed, owners and label assignment still ran.
        assert_eq!(outcome.succeeded, 2);
        assert_eq!(outcome.failed, 1);
        assert_eq!(transport.calls.borrow().len(), 3);
        assert_eq!(reporter.warnings.borrow().len(), 1);
    }

    #[test]
    fn test_destroy_removes_assignments_then_owners() {
        let transport = ScriptedTransport::new(vec![]);
        let reporter = SilentReporter::new();
        let use_case = ApplyConfigUseCase::new(&transport, &reporter);

        let outcome = use_case.destroy(&credentials(), &full_config()).unwrap();
        assert_eq!(outcome.succeeded, 2);

        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, Method::Delete);
        assert_eq!(calls[0].1, "/governance/api/v1/labels/production/resources");
        assert_eq!(calls[1].0, Method::Patch);
        assert_eq!(calls[1].1, "/governance/api/v1/resource-owners");
        let patch = calls[1].2.as_ref().unwrap();
        assert_eq!(patch["resourceOrn"], "orn:okta:idp:acme:apps:oauth2:0oa1");
        assert_eq!(patch["data"][0]["op"], "REMOVE");
        assert_eq!(patch["data"][0]["path"], "/principalOrn");
        assert_eq!(
            patch["data"][0]["value"],
            "orn:okta:directory:acme:users:00u1"
        );
    }

    #[test]
    fn test_destroy_treats_absence_as_success() {
        let transport = ScriptedTransport::new(vec![
            Err(ApiError::NotFound {
                path: "/governance/api/v1/labels/production/resources".to_string(),
            }),
            Err(ApiError::NotFound {
                path: "/governance/api/v1/resource-owners".to_string(),
            }),
        ]);
        let reporter = SilentReporter::new();
        let use_case = ApplyConfigUseCase::new(&transport, &reporter);

        let outcome = use_case.destroy(&credentials(), &full_config()).unwrap();
        assert_eq!(
            outcome,
            ApplyOutcome {
                succeeded: 2,
                failed: 0
            }
        );
        assert!(reporter.warnings.borrow().is_empty());
    }
}
