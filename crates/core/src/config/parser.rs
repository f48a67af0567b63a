//! Parsing of individual stream documents.
//!
//! The directory loader never looks inside a document. It hands the raw
//! bytes and the format implied by the file extension to a [`ConfigParser`],
//! which either fails or returns a configuration together with lints.

use crate::config::error::ParseError;
use crate::config::format::ConfigFormat;
use crate::config::interpolate::{interpolate, VarSource};
use crate::config::lint::lint_stream;
use serde_json::{Map, Value};
use sk_protocol::config_models::LoaderSettings;
use sk_protocol::stream_models::StreamConfig;
use std::borrow::Cow;

/// A successfully parsed document and its non-fatal findings.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<C> {
    pub config: C,
    pub lints: Vec<String>,
}

/// Turns the bytes of one document into a configuration.
///
/// Implementations return `Err` for documents that cannot be used at all
/// and report softer issues through [`Parsed::lints`].
pub trait ConfigParser {
    /// Configuration type produced by this parser.
    type Config;

    /// Parses `bytes` as a document in `format`.
    fn parse(&self, bytes: &[u8], format: ConfigFormat) -> Result<Parsed<Self::Config>, ParseError>;
}

impl<F, C> ConfigParser for F
where
    F: Fn(&[u8], ConfigFormat) -> Result<Parsed<C>, ParseError>,
{
    type Config = C;

    fn parse(&self, bytes: &[u8], format: ConfigFormat) -> Result<Parsed<C>, ParseError> {
        self(bytes, format)
    }
}

/// Parser producing [`StreamConfig`] values.
///
/// Documents go through environment interpolation (unless disabled),
/// decoding, linting and finally typed deserialization, so YAML and JSON
/// files with the same structure produce identical configs.
#[derive(Debug, Clone)]
pub struct StreamConfigParser {
    vars: Option<VarSource>,
}

impl StreamConfigParser {
    /// Creates a parser that interpolates variables from `vars`.
    pub fn new(vars: VarSource) -> Self {
        Self { vars: Some(vars) }
    }

    /// Creates a parser that leaves `${...}` references untouched.
    pub fn without_interpolation() -> Self {
        Self { vars: None }
    }

    /// Creates a parser configured by loader settings, reading the process
    /// environment when interpolation is enabled.
    pub fn from_settings(settings: &LoaderSettings) -> Self {
        if settings.interpolate_env {
            Self::new(VarSource::Process)
        } else {
            Self::without_interpolation()
        }
    }
}

impl Default for StreamConfigParser {
    fn default() -> Self {
        Self::new(VarSource::Process)
    }
}

impl ConfigParser for StreamConfigParser {
    type Config = StreamConfig;

    fn parse(&self, bytes: &[u8], format: ConfigFormat) -> Result<Parsed<StreamConfig>, ParseError> {
        let text = std::str::from_utf8(bytes)?;
        let mut lints = Vec::new();

        let text = match &self.vars {
            Some(vars) => {
                let interpolated = interpolate(text, vars);
                lints.extend(interpolated.missing.iter().map(|name| {
                    format!("environment variable {name} is not set and has no default")
                }));
                interpolated.text
            }
            None => Cow::Borrowed(text),
        };

        let doc = format.decode(&text)?;
        lints.extend(lint_stream(&doc));

        let doc = match doc {
            Value::Null => Value::Object(Map::new()),
            Value::Object(_) => doc,
            other => {
                return Err(ParseError::Structure(format!(
                    "expected a mapping at the top level, found {}",
                    describe(&other)
                )))
            }
        };

        let config = serde_json::from_value(doc).map_err(ParseError::Schema)?;
        Ok(Parsed { config, lints })
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sk_protocol::stream_models::ComponentConfig;

    fn parser() -> StreamConfigParser {
        StreamConfigParser::new(VarSource::fixed([("TOPIC", "events")]))
    }

    #[test]
    fn test_parse_yaml_and_json_equivalent() {
        let yaml = b"input:\n  type: kafka\n  kafka:\n    topic: events\noutput:\n  type: stdout\n";
        let json = br#"{"input": {"type": "kafka", "kafka": {"topic": "events"}}, "output": {"type": "stdout"}}"#;

        let from_yaml = parser().parse(yaml, ConfigFormat::Yaml).expect("Failed to parse YAML");
        let from_json = parser().parse(json, ConfigFormat::Json).expect("Failed to parse JSON");

        assert_eq!(from_yaml, from_json);
        assert!(from_yaml.lints.is_empty());
        assert_eq!(from_yaml.config.input.kind, "kafka");
    }

    #[test]
    fn test_parse_interpolates_env() {
        let yaml = b"input:\n  type: kafka\n  kafka:\n    topic: ${TOPIC}\n    group: ${GROUP:default-group}\noutput:\n  type: stdout\n";

        let parsed = parser().parse(yaml, ConfigFormat::Yaml).expect("Failed to parse");
        let expected = ComponentConfig::new("kafka").with_section(
            "kafka",
            serde_json::json!({"topic": "events", "group": "default-group"}),
        );

        assert_eq!(parsed.config.input, expected);
        assert!(parsed.lints.is_empty());
    }

    #[test]
    fn test_parse_missing_env_is_lint() {
        let yaml = b"input:\n  type: ${INPUT_TYPE:stdin}\noutput:\n  type: file\n  file:\n    path: \"${OUT_PATH}\"\n";

        let parsed = parser().parse(yaml, ConfigFormat::Yaml).expect("Failed to parse");

        assert_eq!(parsed.config.input.kind, "stdin");
        assert_eq!(
            parsed.lints,
            vec!["environment variable OUT_PATH is not set and has no default"]
        );
    }

    #[test]
    fn test_parse_without_interpolation() {
        let json = br#"{"input": {"type": "stdin"}, "output": {"type": "file", "file": {"path": "${OUT}"}}}"#;

        let parsed = StreamConfigParser::without_interpolation()
            .parse(json, ConfigFormat::Json)
            .expect("Failed to parse");

        assert_eq!(
            parsed.config.output.options(),
            Some(&serde_json::json!({"path": "${OUT}"}))
        );
        assert!(parsed.lints.is_empty());
    }

    #[test]
    fn test_parse_empty_document_uses_defaults() {
        let parsed = parser().parse(b"", ConfigFormat::Yaml).expect("Failed to parse");

        assert_eq!(parsed.config, StreamConfig::default());
        assert_eq!(parsed.lints.len(), 1);
    }

    #[test]
    fn test_parse_rejects_non_mapping() {
        let result = parser().parse(b"- input\n- output\n", ConfigFormat::Yaml);

        if let Err(ParseError::Structure(reason)) = result {
            assert!(reason.contains("sequence"));
        } else {
            panic!("Expected Structure error");
        }
    }

    #[test]
    fn test_parse_rejects_schema_violation() {
        let result = parser().parse(br#"{"input": {"kafka": {}}}"#, ConfigFormat::Json);
        assert!(matches!(result, Err(ParseError::Schema(_))));
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        let result = parser().parse(&[0xff, 0xfe, 0x00], ConfigFormat::Yaml);
        assert!(matches!(result, Err(ParseError::Utf8(_))));
    }

    #[test]
    fn test_closure_parser() {
        let count_bytes = |bytes: &[u8], _format: ConfigFormat| -> Result<Parsed<usize>, ParseError> {
            Ok(Parsed {
                config: bytes.len(),
                lints: Vec::new(),
            })
        };

        let parsed = count_bytes.parse(b"abc", ConfigFormat::Json).expect("Failed to parse");
        assert_eq!(parsed.config, 3);
    }
}
