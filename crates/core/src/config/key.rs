//! Stream key derivation and test fixture detection.
//!
//! A stream's key is its file path relative to the stream root, with the
//! extension dropped and directory boundaries flattened, so
//! `<root>/bar/test.yaml` becomes `bar_test`.

use crate::config::error::{LoadError, LoadResult};
use std::path::{Component, Path};

/// Separator joining directory components in a stream key.
pub const KEY_SEPARATOR: &str = "_";

/// Derives the stream key for `path`, which must live under `root`.
///
/// # Errors
///
/// Returns `LoadError::InvalidPath` if `path` is not under `root`, has no
/// file name, or contains components that are not valid UTF-8.
///
/// # Example
///
/// ```rust
/// use sk_core::config::key::derive_key;
/// use std::path::Path;
///
/// let key = derive_key(Path::new("streams"), Path::new("streams/bar/test.yaml")).unwrap();
/// assert_eq!(key, "bar_test");
/// ```
pub fn derive_key(root: &Path, path: &Path) -> LoadResult<String> {
    let invalid = |reason: &str| LoadError::InvalidPath {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
        reason: reason.to_string(),
    };

    let relative = path
        .strip_prefix(root)
        .map_err(|_| invalid("path is outside the stream root"))?;

    let stem = relative.with_extension("");
    let mut parts = Vec::new();
    for component in stem.components() {
        match component {
            Component::Normal(part) => {
                let part = part
                    .to_str()
                    .ok_or_else(|| invalid("path is not valid UTF-8"))?;
                parts.push(part);
            }
            Component::CurDir => {}
            _ => return Err(invalid("path contains a non-normal component")),
        }
    }

    if parts.is_empty() {
        return Err(invalid("path has no file name"));
    }

    Ok(parts.join(KEY_SEPARATOR))
}

/// Returns `true` if `path` is a test fixture for the given suffix.
///
/// A fixture's file stem ends with `_<suffix>`, e.g. `test_benthos_test.yaml`
/// for the suffix `benthos_test`. An empty suffix matches nothing.
pub fn is_test_fixture(path: &Path, suffix: &str) -> bool {
    if suffix.is_empty() {
        return false;
    }

    let marker = format!("{KEY_SEPARATOR}{suffix}");
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.ends_with(&marker))
}
