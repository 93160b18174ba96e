//! Application layer for pregate.
//!
//! This layer contains:
//! - **Pipeline**: runs every check and folds the outcomes
//! - **Ports**: interface definitions (traits) for external dependencies
//!
//! The application layer coordinates the domain layer but holds no field
//! rules itself. All deterministic rules live in `crate::domain::rules`.

pub mod pipeline;
pub mod ports;

pub use pipeline::Pipeline;

// Re-export port traits (for adapter implementation)
pub use ports::{RegistryClient, TagLookup};
