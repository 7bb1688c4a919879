//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! limited partnerships test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `harness`: Services wired to in-memory collaborators
//! - `assertions`: Custom assertion helpers for validation results
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod harness;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use harness::*;
pub use assertions::*;
pub use generators::*;
