pub mod requests;
pub mod snapshot;

pub use requests::{ExportKind, ExportRequest};
pub use snapshot::{ExportSnapshot, KindStatus, OwnerExport};
