//! Domain layer for pregate.
//!
//! ## Principles
//!
//! - **Pure**: every rule here is a function of raw field values
//! - **No I/O**: the registry lookup lives behind a port in `crate::application`
//! - **No async**: domain logic is synchronous
//!
//! ## Layout
//!
//! - [`params`]: the input record handed to the pipeline
//! - [`check`]: identity and ordering of the seven checks
//! - [`rules`]: the deterministic field predicates
//! - [`outcome`]: per-check reports and the folded run result
//! - [`error`]: the validation failure taxonomy

pub mod check;
pub mod error;
pub mod outcome;
pub mod params;
pub mod rules;

pub use check::Check;
pub use error::ValidationError;
pub use outcome::{CheckReport, RunResult};
pub use params::{GenerationParams, ParamsInput};
