//! Shared test utilities.

/// `TestContext` and program helpers.
pub mod harness;
