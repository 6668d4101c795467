use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-directory fingerprint, tagged by kind so content-hash variants can be
/// added later without breaking the record schema.
///
/// The only variant today is `NoOp`, which carries no information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "properties")]
pub enum DirectoryFingerprint {
    NoOp {},
}

impl Default for DirectoryFingerprint {
    fn default() -> Self {
        DirectoryFingerprint::NoOp {}
    }
}

/// One directory in a content tree: its path, the files directly inside it,
/// and a fingerprint over those files.
///
/// No validation happens on construction; whether the listed files actually
/// exist is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Directory {
    pub path: String,
    pub files: Vec<String>,
    pub fingerprint: DirectoryFingerprint,
}

impl Directory {
    pub fn new(path: impl Into<String>, files: Vec<String>) -> Self {
        Self {
            path: path.into(),
            files,
            fingerprint: DirectoryFingerprint::NoOp {},
        }
    }
}

/// A directory-tree description of a physical data location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Content {
    pub root: String,
    pub directories: Vec<Directory>,
}

impl Content {
    pub fn new(root: impl Into<String>, directories: Vec<Directory>) -> Self {
        Self {
            root: root.into(),
            directories,
        }
    }

    /// A content tree with a root and no directory listing.
    pub fn root_only(root: impl Into<String>) -> Self {
        Self::new(root, Vec::new())
    }

    /// All file paths in the tree, keyed by directory path.
    pub fn files_by_directory(&self) -> BTreeMap<&str, &[String]> {
        self.directories
            .iter()
            .map(|d| (d.path.as_str(), d.files.as_slice()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn structural_equality_covers_the_full_tree() {
        let a = Content::new(
            "/data/t1",
            vec![Directory::new("/data/t1/p=1", vec!["f1".into(), "f2".into()])],
        );
        let b = a.clone();
        assert_eq!(a, b);

        let c = Content::new(
            "/data/t1",
            vec![Directory::new("/data/t1/p=1", vec!["f1".into()])],
        );
        assert_ne!(a, c);
    }

    #[test]
    fn noop_fingerprint_serializes_with_empty_properties() {
        let dir = Directory::new("/data/t1", vec![]);
        let json = serde_json::to_value(&dir).unwrap();
        assert_eq!(
            json["fingerprint"],
            serde_json::json!({"kind": "NoOp", "properties": {}})
        );
    }

    #[test]
    fn files_by_directory_groups_paths() {
        let content = Content::new(
            "/out",
            vec![
                Directory::new("/out/b", vec!["f2".into()]),
                Directory::new("/out/a", vec!["f1".into()]),
            ],
        );
        let grouped = content.files_by_directory();
        assert_eq!(grouped.keys().collect::<Vec<_>>(), vec![&"/out/a", &"/out/b"]);
    }
}
