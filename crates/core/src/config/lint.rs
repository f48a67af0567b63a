//! Non-fatal checks on decoded stream documents.
//!
//! Lints run on the raw document rather than on [`StreamConfig`], because
//! the typed model silently drops or defaults exactly the things worth
//! warning about: unknown fields, option sections for plugins that are not
//! selected, and omitted sections.
//!
//! [`StreamConfig`]: sk_protocol::stream_models::StreamConfig

use serde_json::{Map, Value};
use sk_protocol::stream_models::{DEFAULT_INPUT_TYPE, DEFAULT_OUTPUT_TYPE};

const STREAM_FIELDS: [&str; 4] = ["input", "buffer", "pipeline", "output"];
const PIPELINE_FIELDS: [&str; 2] = ["threads", "processors"];

/// Returns lint messages for a decoded stream document.
///
/// Each message starts with the dotted location it refers to. A document
/// that is not an object produces no lints; rejecting it is the parser's job.
pub fn lint_stream(doc: &Value) -> Vec<String> {
    let mut lints = Vec::new();

    let root = match doc {
        Value::Null => {
            lints.push("config is empty, every section uses its default".to_string());
            return lints;
        }
        Value::Object(root) => root,
        _ => return lints,
    };

    for key in root.keys() {
        if !STREAM_FIELDS.contains(&key.as_str()) {
            lints.push(format!("{key}: field is not recognised and will be ignored"));
        }
    }

    lint_recommended(root, "input", DEFAULT_INPUT_TYPE, &mut lints);
    lint_recommended(root, "output", DEFAULT_OUTPUT_TYPE, &mut lints);

    for section in ["input", "buffer", "output"] {
        if let Some(component) = root.get(section) {
            lint_component(section, component, &mut lints);
        }
    }

    if let Some(Value::Object(pipeline)) = root.get("pipeline") {
        for key in pipeline.keys() {
            if !PIPELINE_FIELDS.contains(&key.as_str()) {
                lints.push(format!(
                    "pipeline.{key}: field is not recognised and will be ignored"
                ));
            }
        }
        if let Some(Value::Array(processors)) = pipeline.get("processors") {
            for (i, processor) in processors.iter().enumerate() {
                lint_component(&format!("pipeline.processors.{i}"), processor, &mut lints);
            }
        }
    }

    lints
}

fn lint_recommended(root: &Map<String, Value>, section: &str, default: &str, lints: &mut Vec<String>) {
    if !root.contains_key(section) {
        lints.push(format!(
            "{section}: section is omitted, defaulting to type {default}"
        ));
    }
}

/// Flags option sections that the selected plugin type will never read.
fn lint_component(location: &str, component: &Value, lints: &mut Vec<String>) {
    let Value::Object(fields) = component else {
        return;
    };
    let Some(kind) = fields.get("type").and_then(Value::as_str) else {
        return;
    };

    for key in fields.keys() {
        if key != "type" && key != kind {
            lints.push(format!(
                "{location}.{key}: field is ignored by {location} type {kind}"
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_complete_stream_has_no_lints() {
        let doc = json!({
            "input": {"type": "kafka", "kafka": {"topic": "events"}},
            "buffer": {"type": "memory", "memory": {"limit": 1024}},
            "pipeline": {"threads": 2, "processors": [{"type": "noop"}]},
            "output": {"type": "stdout"}
        });

        assert!(lint_stream(&doc).is_empty());
    }

    #[test]
    fn test_empty_document() {
        let lints = lint_stream(&Value::Null);
        assert_eq!(lints.len(), 1);
        assert!(lints[0].contains("empty"));
    }

    #[test]
    fn test_omitted_recommended_sections() {
        let lints = lint_stream(&json!({"input": {"type": "TEST_FOO"}}));
        assert_eq!(lints, vec!["output: section is omitted, defaulting to type stdout"]);

        let lints = lint_stream(&json!({}));
        assert_eq!(lints.len(), 2);
        assert!(lints[0].starts_with("input:"));
        assert!(lints[1].starts_with("output:"));
    }

    #[test]
    fn test_unknown_fields() {
        let doc = json!({
            "input": {"type": "stdin"},
            "output": {"type": "stdout"},
            "logger": {"level": "INFO"},
            "pipeline": {"thread": 4}
        });

        let lints = lint_stream(&doc);
        assert_eq!(
            lints,
            vec![
                "logger: field is not recognised and will be ignored",
                "pipeline.thread: field is not recognised and will be ignored",
            ]
        );
    }

    #[test]
    fn test_unselected_plugin_sections() {
        let doc = json!({
            "input": {"type": "stdin", "kafka": {"topic": "events"}},
            "pipeline": {"processors": [{"type": "noop"}, {"type": "jmespath", "bloblang": "root = this"}]},
            "output": {"type": "stdout"}
        });

        let lints = lint_stream(&doc);
        assert_eq!(
            lints,
            vec![
                "input.kafka: field is ignored by input type stdin",
                "pipeline.processors.1.bloblang: field is ignored by pipeline.processors.1 type jmespath",
            ]
        );
    }

    #[test]
    fn test_non_object_document_has_no_lints() {
        assert!(lint_stream(&json!(["input"])).is_empty());
        assert!(lint_stream(&json!("stdin")).is_empty());
    }
}
