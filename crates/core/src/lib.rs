//! # sk-core
//!
//! Stream configuration loading for stream-kit.
//!
//! This crate provides:
//! - Discovery of stream files in a directory tree
//! - Key derivation from each file's relative path
//! - YAML and JSON parsing behind a pluggable parser
//! - Environment variable interpolation and linting of stream documents
//!
//! ## Modules
//!
//! - [`config`]: Directory loading, parsing and linting

pub mod config;
