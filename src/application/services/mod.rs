pub mod resource_fetcher;

pub use resource_fetcher::{normalize_listing, ResourceFetcher};
