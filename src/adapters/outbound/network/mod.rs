pub mod okta_client;

pub use okta_client::OktaTransport;
