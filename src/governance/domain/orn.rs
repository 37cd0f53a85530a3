use std::fmt;

/// The resource a typed Okta resource name points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrnResource {
    User { id: String },
    Group { id: String },
    App { app_type: String, id: String },
    EntitlementBundle { id: String },
}

/// A typed Okta Resource Name.
///
/// The governance API addresses principals and resources by opaque
/// `orn:okta:...` strings. Modeling the components instead of templating
/// strings at call sites keeps malformed references out of API payloads;
/// `Display` is the single rendering point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orn {
    org: String,
    resource: OrnResource,
}

impl Orn {
    pub fn new(org: impl Into<String>, resource: OrnResource) -> Self {
        Self {
            org: org.into(),
            resource,
        }
    }

    pub fn user(org: &str, user_id: &str) -> Self {
        Self::new(org, OrnResource::User { id: user_id.to_string() })
    }

    pub fn group(org: &str, group_id: &str) -> Self {
        Self::new(org, OrnResource::Group { id: group_id.to_string() })
    }

    pub fn app(org: &str, app_type: &str, app_id: &str) -> Self {
        Self::new(
            org,
            OrnResource::App {
                app_type: app_type.to_string(),
                id: app_id.to_string(),
            },
        )
    }

    pub fn entitlement_bundle(org: &str, bundle_id: &str) -> Self {
        Self::new(org, OrnResource::EntitlementBundle { id: bundle_id.to_string() })
    }
}

impl fmt::Display for Orn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.resource {
            OrnResource::User { id } => {
                write!(f, "orn:okta:directory:{}:users:{}", self.org, id)
            }
            OrnResource::Group { id } => {
                write!(f, "orn:okta:directory:{}:groups:{}", self.org, id)
            }
            OrnResource::App { app_type, id } => {
                write!(f, "orn:okta:idp:{}:apps:{}:{}", self.org, app_type, id)
            }
            OrnResource::EntitlementBundle { id } => {
                write!(
                    f,
                    "orn:okta:governance:{}:entitlement-bundles:{}",
                    self.org, id
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_orn_rendering() {
        let orn = Orn::user("acme", "00u123");
        assert_eq!(orn.to_string(), "orn:okta:directory:acme:users:00u123");
    }

    #[test]
    fn test_group_orn_rendering() {
        let orn = Orn::group("acme", "00g456");
        assert_eq!(orn.to_string(), "orn:okta:directory:acme:groups:00g456");
    }

    #[test]
    fn test_app_orn_rendering() {
        let orn = Orn::app("acme", "oauth2", "0oa789");
        assert_eq!(orn.to_string(), "orn:okta:idp:acme:apps:oauth2:0oa789");
    }

    #[test]
    fn test_entitlement_bundle_orn_rendering() {
        let orn = Orn::entitlement_bundle("acme", "enb1");
        assert_eq!(
            orn.to_string(),
            "orn:okta:governance:acme:entitlement-bundles:enb1"
        );
    }
}
