use std::fmt;
use std::path::PathBuf;

use regex::Regex;

/// One decoded Kubernetes-style object. Shape is not enforced.
pub type ResourceItem = serde_json::Value;

/// Items of one list document, in file order.
pub type ResourceCollection = Vec<ResourceItem>;

/// Flat `KEY=VALUE` settings, kept in first-seen key order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigMap {
    entries: Vec<(String, String)>,
}

impl ConfigMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or overwrites a value. An overwritten key keeps its position.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ConfigMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ConfigMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

/// A namespace picked from the config, together with the key that named it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Pods,
    WekaContainer,
    WekaCluster,
    WekaClient,
}

impl ResourceKind {
    /// Report order.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Pods,
        ResourceKind::WekaContainer,
        ResourceKind::WekaCluster,
        ResourceKind::WekaClient,
    ];

    /// File stem under `cluster-info/<namespace>/`.
    pub fn file_stem(self) -> &'static str {
        match self {
            ResourceKind::Pods => "pods",
            ResourceKind::WekaContainer => "wekacontainer",
            ResourceKind::WekaCluster => "wekacluster",
            ResourceKind::WekaClient => "wekaclient",
        }
    }

    /// Section heading.
    pub fn title(self) -> &'static str {
        match self {
            ResourceKind::Pods => "Pods",
            ResourceKind::WekaContainer => "WekaContainers",
            ResourceKind::WekaCluster => "WekaClusters",
            ResourceKind::WekaClient => "WekaClients",
        }
    }

    /// Noun used in the "none found" line.
    pub fn plural(self) -> &'static str {
        match self {
            ResourceKind::Pods => "pods",
            other => other.title(),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Result of trying to load one `<kind>.json` file.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Found(ResourceCollection),
    NotFound,
    Unreadable(String),
    Malformed(String),
}

/// Everything a report run needs.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub config_path: PathBuf,
    pub output_dir: PathBuf,
    pub namespace_pattern: Regex,
    /// Treat unreadable or malformed resource files like missing ones.
    pub skip_malformed: bool,
}
