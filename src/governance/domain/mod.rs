//! Pure domain values for governance resources. Nothing in this module
//! performs I/O; parsing is lenient because the provider API varies its
//! field names across endpoints and org configurations.

pub mod bundle;
pub mod grant;
pub mod label;
pub mod orn;
pub mod record;

pub use bundle::{EntitlementBundle, ResourceTarget};
pub use grant::{grants_for_bundle, Grant};
pub use label::{Label, LabelMappings, LabelMetadata, OrnCategory};
pub use orn::{Orn, OrnResource};
pub use record::{ResourceKind, ResourceRecord};
