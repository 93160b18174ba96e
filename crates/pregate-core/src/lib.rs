//! Pregate Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the pregate
//! pre-generation gate, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           pregate-cli (CLI)             │
//! │   (Builds GenerationParams, reports)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Layer               │
//! │      (Pipeline: runs every Check)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │           (RegistryClient)              │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    pregate-adapters (Infrastructure)    │
//! │          (HttpRegistryClient)           │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (GenerationParams, rules, RunResult)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pregate_core::prelude::*;
//!
//! # fn client() -> Box<dyn RegistryClient> { unimplemented!() }
//! let params = GenerationParams {
//!     project_name: "My Project".into(),
//!     ..GenerationParams::default()
//! };
//!
//! let result = Pipeline::new(client()).run(&params);
//! if result.has_failures() {
//!     std::process::exit(1);
//! }
//! ```

pub mod domain;

pub mod application;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{Pipeline, RegistryClient, TagLookup};
    pub use crate::domain::{
        Check, CheckReport, GenerationParams, ParamsInput, RunResult, ValidationError,
    };
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
