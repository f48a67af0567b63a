//! Stream configuration models for `*.yaml`, `*.yml` and `*.json` stream files.
//!
//! A stream is a single runnable pipeline: one input, an optional buffer,
//! a processing stage, and one output. Every component names a plugin with
//! its `type` field and keeps that plugin's options in a section named
//! after the type.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;

/// Plugin type used when a stream omits its `input` section.
pub const DEFAULT_INPUT_TYPE: &str = "stdin";

/// Plugin type used when a stream omits its `buffer` section.
pub const DEFAULT_BUFFER_TYPE: &str = "none";

/// Plugin type used when a stream omits its `output` section.
pub const DEFAULT_OUTPUT_TYPE: &str = "stdout";

/// A pluggable stream component (input, buffer, processor or output).
///
/// The `type` field selects the plugin. Options for that plugin live in a
/// sibling section with the same name; any other sections are kept as-is
/// so they survive a round trip, but they have no effect.
///
/// # Example
///
/// ```yaml
/// type: kafka
/// kafka:
///   addresses: ["localhost:9092"]
///   topic: events
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ComponentConfig {
    /// Name of the plugin implementing this component.
    #[serde(rename = "type")]
    pub kind: String,

    /// Plugin option sections keyed by plugin name.
    #[serde(flatten)]
    pub sections: BTreeMap<String, Value>,
}

impl ComponentConfig {
    /// Creates a component of the given plugin type with no options.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            sections: BTreeMap::new(),
        }
    }

    /// Adds an option section, returning the updated component.
    pub fn with_section(mut self, name: impl Into<String>, options: Value) -> Self {
        self.sections.insert(name.into(), options);
        self
    }

    /// Options of the selected plugin, if the section is present.
    pub fn options(&self) -> Option<&Value> {
        self.sections.get(&self.kind)
    }
}

/// Processing stage applied between input and output.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Number of parallel processing threads. Must be at least one.
    #[serde(default = "default_threads")]
    pub threads: NonZeroUsize,

    /// Processors applied to every message, in order.
    #[serde(default)]
    pub processors: Vec<ComponentConfig>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            threads: default_threads(),
            processors: Vec::new(),
        }
    }
}

/// Full configuration of one stream.
///
/// Loaded from a single file; the stream's name is derived from where the
/// file lives rather than from its contents.
///
/// # Example
///
/// ```yaml
/// input:
///   type: http_server
///   http_server:
///     path: /ingest
/// pipeline:
///   threads: 2
///   processors:
///     - type: jmespath
///       jmespath:
///         query: "events[*]"
/// output:
///   type: stdout
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StreamConfig {
    /// Source of messages.
    #[serde(default = "default_input")]
    pub input: ComponentConfig,

    /// Optional buffer between input and pipeline.
    #[serde(default = "default_buffer")]
    pub buffer: ComponentConfig,

    /// Processing stage.
    #[serde(default)]
    pub pipeline: PipelineConfig,

    /// Destination of messages.
    #[serde(default = "default_output")]
    pub output: ComponentConfig,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            buffer: default_buffer(),
            pipeline: PipelineConfig::default(),
            output: default_output(),
        }
    }
}

fn default_threads() -> NonZeroUsize {
    NonZeroUsize::MIN
}

fn default_input() -> ComponentConfig {
    ComponentConfig::new(DEFAULT_INPUT_TYPE)
}

fn default_buffer() -> ComponentConfig {
    ComponentConfig::new(DEFAULT_BUFFER_TYPE)
}

fn default_output() -> ComponentConfig {
    ComponentConfig::new(DEFAULT_OUTPUT_TYPE)
}
