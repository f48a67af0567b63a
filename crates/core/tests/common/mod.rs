//! Common test utilities and helpers for loader integration tests.
//!
//! This module provides shared functionality across the integration tests:
//! - Test fixtures (stream trees, sample streams)
//! - Custom assertions

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
pub use fixtures::*;
