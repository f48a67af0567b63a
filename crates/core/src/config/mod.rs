//! Stream configuration discovery, parsing and linting.
//!
//! This module turns a directory tree of YAML and JSON stream files into a
//! map of keyed [`StreamConfig`] values plus a list of lints.
//!
//! [`StreamConfig`]: sk_protocol::stream_models::StreamConfig

pub mod error;
pub mod format;
pub mod interpolate;
pub mod key;
pub mod lint;
pub mod loader;
pub mod parser;
pub mod settings;

pub use error::{LoadError, LoadResult, ParseError};
pub use format::ConfigFormat;
pub use interpolate::VarSource;
pub use loader::{load_stream_configs_from_path, load_with_settings, PathLoader};
pub use parser::{ConfigParser, Parsed, StreamConfigParser};
pub use settings::{load_settings, SETTINGS_FILE};
