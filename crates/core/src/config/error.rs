//! Error types for stream configuration loading.
//!
//! This module defines all errors that can occur while walking a stream
//! directory and parsing the files found in it. Every variant is fatal to
//! the load that produced it; soft issues are reported as lints instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while decoding and validating a single document.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The document is not valid YAML.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document decoded but does not match the configuration structure.
    #[error("does not match the stream structure: {0}")]
    Schema(serde_json::Error),

    /// The document text is not UTF-8 and cannot be interpolated.
    #[error("document is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// The document decoded but violates the required structure.
    #[error("invalid structure: {0}")]
    Structure(String),
}

/// Errors that can occur while loading a directory of stream configs.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The root directory is missing, unreadable or not a directory.
    #[error("Failed to access stream directory {path}: {source}")]
    RootAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to walk the directory structure.
    #[error("Failed to traverse directory {path}: {source}")]
    DirectoryWalk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// Failed to read a candidate file from disk.
    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse loader settings.
    #[error("Failed to parse TOML file at {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Failed to parse a candidate file.
    #[error("Failed to parse config file at {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },

    /// Two files, or a file and a pre-existing entry, map to the same key.
    #[error("Stream key '{key}' from {path} collides with {}", describe_existing(.existing))]
    KeyCollision {
        key: String,
        path: PathBuf,
        existing: Option<PathBuf>,
    },

    /// A walked path could not be turned into a key.
    #[error("Cannot derive a stream key for {path} under {root}: {reason}")]
    InvalidPath {
        path: PathBuf,
        root: PathBuf,
        reason: String,
    },
}

fn describe_existing(existing: &Option<PathBuf>) -> String {
    match existing {
        Some(path) => path.display().to_string(),
        None => "an existing entry".to_string(),
    }
}

/// Type alias for Result with LoadError.
pub type LoadResult<T> = Result<T, LoadError>;
