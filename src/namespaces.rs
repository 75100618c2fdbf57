use regex::Regex;

use crate::types::{ConfigMap, Namespace};

/// Config keys containing this text name a namespace to report on.
pub const NAMESPACE_KEY_PATTERN: &str = "NAMESPACE";

pub fn default_namespace_pattern() -> Regex {
    Regex::new(NAMESPACE_KEY_PATTERN).expect("literal pattern is valid")
}

/// Picks the entries whose key matches `pattern`, in config order.
///
/// Values are used verbatim as directory names.
pub fn select_namespaces(config: &ConfigMap, pattern: &Regex) -> Vec<Namespace> {
    config
        .iter()
        .filter(|(key, _)| pattern.is_match(key))
        .map(|(key, value)| Namespace {
            key: key.to_string(),
            name: value.to_string(),
        })
        .collect()
}
