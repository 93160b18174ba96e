//! Infrastructure adapters for pregate.
//!
//! This crate implements the ports defined in `pregate-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod params_file;
pub mod registry;

// Re-export commonly used adapters
pub use params_file::{ParamsFileError, load_params};
pub use registry::HttpRegistryClient;
