//! Container-registry adapters.

pub mod http;

pub use http::HttpRegistryClient;
