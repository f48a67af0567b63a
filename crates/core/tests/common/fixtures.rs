//! Test fixtures for creating stream directory trees.

use serde_json::json;
use sk_core::config::format::ConfigFormat;
use sk_protocol::stream_models::{ComponentConfig, PipelineConfig, StreamConfig};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create an empty temporary stream root.
///
/// Returns a TempDir that must be kept alive for the test duration.
pub fn create_stream_root() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Write `content` to `relative` under `root`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    std::fs::write(&path, content).expect("Failed to write file");
    path
}

/// Write a stream config to `relative` in the given format.
pub fn write_stream(root: &Path, relative: &str, stream: &StreamConfig, format: ConfigFormat) -> PathBuf {
    let content = format.encode(stream).expect("Failed to encode stream");
    write_file(root, relative, &content)
}

/// A stream reading `input_type` and writing to stdout, with no options.
pub fn create_minimal_stream(input_type: &str) -> StreamConfig {
    StreamConfig {
        input: ComponentConfig::new(input_type),
        ..StreamConfig::default()
    }
}

/// A stream exercising every section, nested options and processors.
pub fn create_full_stream() -> StreamConfig {
    StreamConfig {
        input: ComponentConfig::new("kafka").with_section(
            "kafka",
            json!({
                "addresses": ["localhost:9092", "localhost:9093"],
                "topic": "events",
                "batching": {"count": 10, "period": "1s"}
            }),
        ),
        buffer: ComponentConfig::new("memory").with_section("memory", json!({"limit": 524288000})),
        pipeline: PipelineConfig {
            threads: NonZeroUsize::new(4).expect("non-zero"),
            processors: vec![
                ComponentConfig::new("jmespath").with_section("jmespath", json!({"query": "events[*]"})),
                ComponentConfig::new("compress").with_section("compress", json!({"algorithm": "gzip", "level": 5})),
            ],
        },
        output: ComponentConfig::new("http_client").with_section(
            "http_client",
            json!({"url": "http://localhost:8080/post", "verb": "POST", "retry": true}),
        ),
    }
}
