//! Loader settings read from `streams.toml`.
//!
//! These settings control how a directory of stream files is discovered,
//! not what any individual stream does.

use serde::Deserialize;
use serde::Serialize;

/// Suffix marking stream test fixtures that must not be loaded as streams.
pub const DEFAULT_TEST_SUFFIX: &str = "benthos_test";

/// Represents loader settings from `streams.toml`.
///
/// # Example
///
/// ```toml
/// # streams.toml
/// test-suffix = "benthos_test"
/// interpolate-env = true
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct LoaderSettings {
    /// Files whose stem ends with `_<test-suffix>` are skipped.
    ///
    /// An empty string disables the exclusion.
    pub test_suffix: String,

    /// Replace `${VAR}` and `${VAR:default}` references before parsing.
    pub interpolate_env: bool,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            test_suffix: DEFAULT_TEST_SUFFIX.to_string(),
            interpolate_env: true,
        }
    }
}
