//! Custom assertion helpers for loader integration tests.

use std::collections::HashMap;

/// Assert that the map's keys are exactly `expected`, in any order.
pub fn assert_keys<V>(configs: &HashMap<String, V>, expected: &[&str]) {
    let mut actual: Vec<&str> = configs.keys().map(String::as_str).collect();
    actual.sort_unstable();

    let mut expected = expected.to_vec();
    expected.sort_unstable();

    assert_eq!(actual, expected, "Wrong keys in loaded set");
}

/// Assert that no lint mentions `needle`.
pub fn assert_no_lint_mentions(lints: &[String], needle: &str) {
    if let Some(lint) = lints.iter().find(|lint| lint.contains(needle)) {
        panic!("Expected no lint mentioning {needle}, got: {lint}");
    }
}
