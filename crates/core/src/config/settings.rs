//! Loader settings from `streams.toml`.

use crate::config::error::{LoadError, LoadResult};
use sk_protocol::config_models::LoaderSettings;
use std::path::Path;

/// Conventional settings file name, looked up in the stream root.
///
/// The loader never picks it up as a stream since `.toml` is not a stream
/// format.
pub const SETTINGS_FILE: &str = "streams.toml";

/// Loads loader settings from a TOML file.
///
/// A missing file yields the default settings.
///
/// # Errors
///
/// Returns `LoadError` if the file exists but cannot be read or is not
/// valid TOML.
pub fn load_settings(path: &Path) -> LoadResult<LoaderSettings> {
    if !path.exists() {
        return Ok(LoaderSettings::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| LoadError::TomlParse {
        path: path.to_path_buf(),
        source,
    })
}
