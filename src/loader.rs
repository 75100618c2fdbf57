use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use serde_json::Value;
use tracing::{debug, warn};

use crate::types::{LoadOutcome, ResourceKind};

/// Directory under the output root that holds one sub-directory per namespace.
pub const CLUSTER_INFO_DIR: &str = "cluster-info";

/// `<root>/cluster-info/<namespace>/<kind>.json`
///
/// The namespace is appended as text, so a leading `/` still lands under
/// `root`.
pub fn resource_path(root: &Path, namespace: &str, kind: ResourceKind) -> PathBuf {
    let separator = MAIN_SEPARATOR.to_string();
    let mut path: OsString = root.join(CLUSTER_INFO_DIR).into_os_string();
    path.push(&separator);
    path.push(namespace);
    path.push(&separator);
    path.push(format!("{}.json", kind.file_stem()));
    PathBuf::from(path)
}

/// Loads the `items` list of one dumped resource file.
pub fn load_resources(root: &Path, namespace: &str, kind: ResourceKind) -> LoadOutcome {
    let path = resource_path(root, namespace, kind);
    let outcome = load_items_file(&path);
    match &outcome {
        LoadOutcome::Found(items) => {
            debug!("loaded {} {} item(s) from {}", items.len(), kind, path.display())
        }
        LoadOutcome::NotFound => debug!("no {} file at {}", kind, path.display()),
        LoadOutcome::Unreadable(detail) | LoadOutcome::Malformed(detail) => {
            warn!("cannot use {}: {}", path.display(), detail)
        }
    }
    outcome
}

/// Reads a list document from `path`.
pub fn load_items_file(path: &Path) -> LoadOutcome {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return LoadOutcome::NotFound,
        Err(e) => return LoadOutcome::Unreadable(e.to_string()),
    };
    match serde_json::from_slice::<Value>(&bytes) {
        Ok(document) => extract_items(document),
        Err(e) => LoadOutcome::Malformed(e.to_string()),
    }
}

/// Pulls the `items` array out of a decoded list document.
///
/// A missing or `null` `items` key is an empty list.
pub fn extract_items(document: Value) -> LoadOutcome {
    let Value::Object(mut object) = document else {
        return LoadOutcome::Malformed("top-level value is not a JSON object".to_string());
    };
    match object.remove("items") {
        None | Some(Value::Null) => LoadOutcome::Found(Vec::new()),
        Some(Value::Array(items)) => LoadOutcome::Found(items),
        Some(_) => LoadOutcome::Malformed("`items` is not a JSON array".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_resource(root: &Path, namespace: &str, kind: ResourceKind, contents: &str) {
        let path = resource_path(root, namespace, kind);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_resource_path() {
        let path = resource_path(
            Path::new("/bundle"),
            "weka-operator-system",
            ResourceKind::WekaContainer,
        );
        assert_eq!(
            path,
            PathBuf::from("/bundle/cluster-info/weka-operator-system/wekacontainer.json")
        );
    }

    #[test]
    fn test_resource_path_absolute_namespace_stays_under_root() {
        let path = resource_path(Path::new("/bundle"), "/etc", ResourceKind::Pods);
        assert!(
            path.starts_with("/bundle/cluster-info"),
            "path left the bundle: {}",
            path.display()
        );
        assert_eq!(path, PathBuf::from("/bundle/cluster-info/etc/pods.json"));
        assert_eq!(path.to_str(), Some("/bundle/cluster-info//etc/pods.json"));
    }

    #[test]
    fn test_resource_path_unusual_namespaces() {
        let root = Path::new("/bundle");

        let nested = resource_path(root, "team/a", ResourceKind::WekaClient);
        assert_eq!(nested, PathBuf::from("/bundle/cluster-info/team/a/wekaclient.json"));

        let spaced = resource_path(root, "my ns", ResourceKind::WekaCluster);
        assert_eq!(spaced, PathBuf::from("/bundle/cluster-info/my ns/wekacluster.json"));

        let empty = resource_path(root, "", ResourceKind::Pods);
        assert!(empty.starts_with("/bundle/cluster-info"));
        assert_eq!(empty.file_name().and_then(|n| n.to_str()), Some("pods.json"));
    }

    #[test]
    fn test_load_resources_absolute_namespace_reads_inside_root() {
        let dir = TempDir::new().unwrap();
        write_resource(dir.path(), "/etc", ResourceKind::Pods, r#"{"items":[{}]}"#);

        let outcome = load_resources(dir.path(), "/etc", ResourceKind::Pods);
        assert_eq!(outcome, LoadOutcome::Found(vec![json!({})]));
    }

    #[test]
    fn test_load_resources_found() {
        let dir = TempDir::new().unwrap();
        write_resource(
            dir.path(),
            "demo",
            ResourceKind::Pods,
            r#"{"items":[{"metadata":{"name":"a"}}]}"#,
        );

        let outcome = load_resources(dir.path(), "demo", ResourceKind::Pods);
        assert_eq!(outcome, LoadOutcome::Found(vec![json!({"metadata": {"name": "a"}})]));
    }

    #[test]
    fn test_load_resources_preserves_order() {
        let dir = TempDir::new().unwrap();
        write_resource(
            dir.path(),
            "demo",
            ResourceKind::WekaClient,
            r#"{"kind":"List","items":[{"metadata":{"name":"z"}},{"metadata":{"name":"a"}},{"metadata":{"name":"m"}}]}"#,
        );

        let outcome = load_resources(dir.path(), "demo", ResourceKind::WekaClient);
        let LoadOutcome::Found(items) = outcome else {
            panic!("expected items");
        };
        let names: Vec<_> = items
            .iter()
            .map(|item| item["metadata"]["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_load_resources_missing_file() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            load_resources(dir.path(), "demo", ResourceKind::WekaCluster),
            LoadOutcome::NotFound
        );
    }

    #[test]
    fn test_load_resources_malformed() {
        let dir = TempDir::new().unwrap();
        write_resource(dir.path(), "demo", ResourceKind::Pods, "{\"items\": [");

        let outcome = load_resources(dir.path(), "demo", ResourceKind::Pods);
        assert!(matches!(outcome, LoadOutcome::Malformed(_)), "got {:?}", outcome);
    }

    #[test]
    fn test_load_resources_directory_in_place_of_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(resource_path(dir.path(), "demo", ResourceKind::Pods)).unwrap();

        let outcome = load_resources(dir.path(), "demo", ResourceKind::Pods);
        assert!(
            matches!(outcome, LoadOutcome::Unreadable(_) | LoadOutcome::Malformed(_)),
            "got {:?}",
            outcome
        );
    }

    #[test]
    fn test_extract_items() {
        assert_eq!(extract_items(json!({})), LoadOutcome::Found(Vec::new()));
        assert_eq!(extract_items(json!({"items": null})), LoadOutcome::Found(Vec::new()));
        assert_eq!(extract_items(json!({"items": []})), LoadOutcome::Found(Vec::new()));
        assert_eq!(
            extract_items(json!({"items": [1, "two"]})),
            LoadOutcome::Found(vec![json!(1), json!("two")])
        );

        assert!(matches!(extract_items(json!({"items": {}})), LoadOutcome::Malformed(_)));
        assert!(matches!(extract_items(json!([])), LoadOutcome::Malformed(_)));
        assert!(matches!(extract_items(json!("items")), LoadOutcome::Malformed(_)));
    }
}
