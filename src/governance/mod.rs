//! Governance domain: resource values, pure services, and config
//! generators for the Okta Identity Governance sync core.

pub mod domain;
pub mod generators;
pub mod services;
