//! Stream configuration loader for a directory tree of stream files.
//!
//! Every YAML or JSON file under the root becomes one stream, keyed by its
//! path relative to the root:
//! - `<root>/foo.yml` is loaded as `foo`
//! - `<root>/bar/test.yaml` is loaded as `bar_test`
//! - `<root>/bar/test_benthos_test.yaml` is a test fixture and skipped
//! - `<root>/README.md` has no stream format and is skipped

use crate::config::error::{LoadError, LoadResult};
use crate::config::format::ConfigFormat;
use crate::config::key::{derive_key, is_test_fixture};
use crate::config::parser::{ConfigParser, Parsed, StreamConfigParser};
use sk_protocol::config_models::LoaderSettings;
use sk_protocol::stream_models::StreamConfig;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Loads keyed stream configurations from a directory tree.
///
/// The loader keeps no state between calls; it only owns the parser used
/// for each file.
#[derive(Debug, Clone, Default)]
pub struct PathLoader<P> {
    parser: P,
}

impl<P: ConfigParser> PathLoader<P> {
    /// Creates a loader that parses files with `parser`.
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// The parser applied to each candidate file.
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Loads every stream file under `root` into `configs`.
    ///
    /// Files are visited depth-first in file name order. A file is skipped
    /// when its stem ends with `_<test_suffix>` (unless `test_suffix` is
    /// empty) or when its extension is not a known [`ConfigFormat`]. Every
    /// other file is parsed and inserted under the key derived from its
    /// relative path.
    ///
    /// `configs` may already contain entries; they are kept, and a file
    /// whose key matches one of them is a collision.
    ///
    /// # Returns
    ///
    /// Lints from every parsed file, in visiting order, each prefixed with
    /// the path of the file it came from.
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if:
    /// - `root` does not exist, cannot be read, or is not a directory
    /// - A directory or candidate file cannot be read
    /// - A candidate file fails to parse
    /// - Two files, or a file and an existing entry, share a key
    ///
    /// There is no rollback: streams inserted before the failing file stay
    /// in `configs`. Callers should treat the whole map as unusable when an
    /// error is returned.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use sk_core::config::loader::PathLoader;
    /// use sk_core::config::parser::StreamConfigParser;
    /// use std::collections::HashMap;
    /// use std::path::Path;
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let loader = PathLoader::new(StreamConfigParser::default());
    /// let mut streams = HashMap::new();
    /// let lints = loader.load(Path::new("streams"), "benthos_test", &mut streams)?;
    /// println!("Loaded {} streams with {} lints", streams.len(), lints.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(
        &self,
        root: &Path,
        test_suffix: &str,
        configs: &mut HashMap<String, P::Config>,
    ) -> LoadResult<Vec<String>> {
        check_root(root)?;

        let mut sources: HashMap<String, PathBuf> = HashMap::new();
        let mut lints = Vec::new();

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|source| LoadError::DirectoryWalk {
                path: source.path().unwrap_or(root).to_path_buf(),
                source,
            })?;

            let path = entry.path();

            if is_directory(&entry) {
                continue;
            }

            if is_test_fixture(path, test_suffix) {
                debug!(path = %path.display(), "skipping test fixture");
                continue;
            }

            let Some(format) = ConfigFormat::from_path(path) else {
                debug!(path = %path.display(), "skipping file with unrecognised extension");
                continue;
            };

            let key = derive_key(root, path)?;

            if configs.contains_key(&key) {
                return Err(LoadError::KeyCollision {
                    path: path.to_path_buf(),
                    existing: sources.remove(&key),
                    key,
                });
            }

            let parsed = self.parse_file(path, format)?;

            for lint in parsed.lints {
                warn!(path = %path.display(), "{lint}");
                lints.push(format!("{}: {lint}", path.display()));
            }

            debug!(key = %key, path = %path.display(), %format, "loaded stream config");
            configs.insert(key.clone(), parsed.config);
            sources.insert(key, path.to_path_buf());
        }

        info!(
            root = %root.display(),
            streams = sources.len(),
            lints = lints.len(),
            "loaded stream configs"
        );

        Ok(lints)
    }

    /// Reads a single file and parses it in the given format.
    fn parse_file(&self, path: &Path, format: ConfigFormat) -> LoadResult<Parsed<P::Config>> {
        let bytes = fs::read(path).map_err(|source| LoadError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

        self.parser
            .parse(&bytes, format)
            .map_err(|source| LoadError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Loads stream configs from `root` with environment interpolation from the
/// process environment.
///
/// See [`PathLoader::load`] for the loading rules and error behaviour.
pub fn load_stream_configs_from_path(
    root: &Path,
    test_suffix: &str,
    configs: &mut HashMap<String, StreamConfig>,
) -> LoadResult<Vec<String>> {
    PathLoader::new(StreamConfigParser::default()).load(root, test_suffix, configs)
}

/// Loads stream configs from `root` as described by loader settings.
pub fn load_with_settings(
    root: &Path,
    settings: &LoaderSettings,
    configs: &mut HashMap<String, StreamConfig>,
) -> LoadResult<Vec<String>> {
    PathLoader::new(StreamConfigParser::from_settings(settings)).load(
        root,
        &settings.test_suffix,
        configs,
    )
}

fn check_root(root: &Path) -> LoadResult<()> {
    let metadata = fs::metadata(root).map_err(|source| LoadError::RootAccess {
        path: root.to_path_buf(),
        source,
    })?;

    if !metadata.is_dir() {
        return Err(LoadError::RootAccess {
            path: root.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a directory"),
        });
    }

    Ok(())
}

/// Directories, and symlinks that resolve to directories. Everything else,
/// including a dangling symlink, is a candidate and must be readable.
fn is_directory(entry: &walkdir::DirEntry) -> bool {
    let file_type = entry.file_type();
    file_type.is_dir() || (file_type.is_symlink() && entry.path().is_dir())
}
