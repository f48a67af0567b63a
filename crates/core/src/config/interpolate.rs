//! Environment variable interpolation for stream file text.
//!
//! `${NAME}` is replaced by the value of `NAME`, `${NAME:default}` falls
//! back to `default` when `NAME` is unset or empty, and `$${NAME}` escapes
//! to a literal `${NAME}`.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;

static ENV_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$(\$?)\{([A-Za-z_][A-Za-z0-9_]*)(?::([^}]*))?\}").expect("valid env reference regex")
});

/// Where `${NAME}` references are resolved from.
#[derive(Debug, Clone, Default)]
pub enum VarSource {
    /// The process environment.
    #[default]
    Process,
    /// A fixed set of variables; nothing else is visible.
    Fixed(HashMap<String, String>),
}

impl VarSource {
    /// Creates a source that sees only the given variables.
    pub fn fixed(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        VarSource::Fixed(vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    /// Resolves `name`. Unset and empty variables both resolve to `None`,
    /// so either falls through to the reference's default.
    pub fn lookup(&self, name: &str) -> Option<String> {
        let value = match self {
            VarSource::Process => std::env::var(name).ok(),
            VarSource::Fixed(vars) => vars.get(name).cloned(),
        };
        value.filter(|value| !value.is_empty())
    }
}

/// Result of interpolating one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolated<'a> {
    /// Document text with references replaced.
    pub text: Cow<'a, str>,

    /// Referenced variables that were unset and had no default, in order of
    /// first appearance.
    pub missing: Vec<String>,
}

/// Replaces environment variable references in `text`.
///
/// Unresolvable references are replaced by an empty string and reported in
/// [`Interpolated::missing`] so the caller can surface them as lints.
pub fn interpolate<'a>(text: &'a str, vars: &VarSource) -> Interpolated<'a> {
    let mut missing: Vec<String> = Vec::new();

    let text = ENV_REFERENCE.replace_all(text, |caps: &Captures<'_>| {
        let name = &caps[2];
        let default = caps.get(3).map(|m| m.as_str());

        if !caps[1].is_empty() {
            return match default {
                Some(default) => format!("${{{name}:{default}}}"),
                None => format!("${{{name}}}"),
            };
        }

        if let Some(value) = vars.lookup(name) {
            return value;
        }
        match default {
            Some(default) => default.to_string(),
            None => {
                if !missing.iter().any(|m| m == name) {
                    missing.push(name.to_string());
                }
                String::new()
            }
        }
    });

    Interpolated { text, missing }
}
