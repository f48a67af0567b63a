//! Serialization formats recognised for stream files.
//!
//! Dispatch is purely by file extension. Every format decodes into the same
//! `serde_json::Value` document model, so a stream reads the same whichever
//! format it was written in.

use crate::config::error::ParseError;
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// A supported stream file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    /// All supported formats.
    pub const ALL: [ConfigFormat; 2] = [ConfigFormat::Yaml, ConfigFormat::Json];

    /// File extensions (without the dot) claimed by this format.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            ConfigFormat::Yaml => &["yaml", "yml"],
            ConfigFormat::Json => &["json"],
        }
    }

    /// Looks up the format for an extension, ignoring ASCII case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.extensions().contains(&ext.as_str()))
    }

    /// Looks up the format for a file path by its extension.
    ///
    /// A dotfile such as `.yml` has no extension, only a stem, so it has
    /// no format.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// Decodes document text into the shared document model.
    ///
    /// A blank YAML document decodes to `Value::Null`.
    pub fn decode(self, text: &str) -> Result<Value, ParseError> {
        match self {
            ConfigFormat::Yaml if text.trim().is_empty() => Ok(Value::Null),
            ConfigFormat::Yaml => Ok(serde_yaml::from_str(text)?),
            ConfigFormat::Json => Ok(serde_json::from_str(text)?),
        }
    }

    /// Encodes a document in this format.
    pub fn encode<T: serde::Serialize>(self, value: &T) -> Result<String, ParseError> {
        match self {
            ConfigFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            ConfigFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::Yaml => f.write_str("YAML"),
            ConfigFormat::Json => f.write_str("JSON"),
        }
    }
}
