//! Driven (output) ports - implemented by infrastructure.
//!
//! The `pregate-adapters` crate provides the production implementation.

use std::fmt;

/// Result of asking the registry whether `image:tag` exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagLookup {
    /// Registry answered with a success status.
    Exists,
    /// Registry answered with an error status.
    NotFound { status: u16 },
    /// No answer (timeout, refused connection, DNS failure).
    Unknown { reason: String },
}

impl fmt::Display for TagLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exists => f.write_str("exists"),
            Self::NotFound { status } => write!(f, "not found (HTTP {status})"),
            Self::Unknown { reason } => write!(f, "unknown ({reason})"),
        }
    }
}

/// Port for container-registry tag lookups.
///
/// Implemented by:
/// - `pregate_adapters::HttpRegistryClient` (production)
/// - `MockRegistryClient` (tests, generated by `mockall`)
///
/// Lookups never fail: anything that is not a definite answer from the
/// registry comes back as [`TagLookup::Unknown`].
#[cfg_attr(test, mockall::automock)]
pub trait RegistryClient: Send + Sync {
    /// Look up a single tag of an image repository.
    fn lookup_tag(&self, image: &str, tag: &str) -> TagLookup;

    /// The URL queried for `image:tag`, for log messages.
    fn tag_url(&self, image: &str, tag: &str) -> String;
}
