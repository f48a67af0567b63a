//! # sk-protocol
//!
//! Shared data models for stream-kit.
//!
//! This crate defines the structures that stream files and loader settings
//! deserialize into:
//! - Stream definitions (YAML or JSON, one stream per file)
//! - Loader settings (`streams.toml`)
//!
//! ## Modules
//!
//! - [`stream_models`]: Stream, component and pipeline structures
//! - [`config_models`]: Loader settings
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde and serde_json
//! - Format independent: Models carry no knowledge of YAML or JSON
//! - Independent compilation: No dependencies on other stream-kit crates

pub mod config_models;
pub mod stream_models;

// Re-export all public types for convenience
pub use config_models::*;
pub use stream_models::*;
