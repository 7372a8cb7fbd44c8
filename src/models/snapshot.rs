use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Whether a tree entry is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    pub kind: EntryKind,
}

impl TreeEntry {
    pub fn file(path: &str) -> Self {
        Self { path: path.to_string(), kind: EntryKind::File }
    }
    pub fn dir(path: &str) -> Self {
        Self { path: path.to_string(), kind: EntryKind::Dir }
    }

    /// Last path segment.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Number of `/` separators, so top-level entries are depth 0.
    pub fn depth(&self) -> usize {
        self.path.matches('/').count()
    }
}

/// An allow-listed file (or subdirectory listing) that could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Omission {
    pub path: String,
    pub reason: String,
}

/// Fetched, truncated view of a repository used as model input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepoSnapshot {
    pub owner: String,
    pub name: String,
    pub description: Option<String>,
    pub stars: Option<u64>,
    pub default_branch: Option<String>,
    pub tree: Vec<TreeEntry>,
    /// Path to truncated text. Use [`RepoSnapshot::key_files`] for prompt order.
    pub files: BTreeMap<String, String>,
    pub omitted: Vec<Omission>,
}

impl RepoSnapshot {
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// `owner/name`
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Tree paths in fetch order.
    pub fn file_tree(&self) -> impl Iterator<Item = &str> {
        self.tree.iter().map(|e| e.path.as_str())
    }

    pub fn file_entries(&self) -> impl Iterator<Item = &TreeEntry> {
        self.tree.iter().filter(|e| e.kind == EntryKind::File)
    }

    /// Fetched files, shallowest first and in tree order within a level,
    /// so root manifests lead regardless of how paths sort.
    pub fn key_files(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<&TreeEntry> = self.file_entries()
            .filter(|e| self.files.contains_key(&e.path))
            .collect();
        entries.sort_by_key(|e| e.depth());

        let mut ordered: Vec<(&str, &str)> = entries.iter()
            .filter_map(|e| self.files.get_key_value(&e.path))
            .map(|(path, content)| (path.as_str(), content.as_str()))
            .collect();
        for (path, content) in &self.files {
            if !ordered.iter().any(|(p, _)| *p == path.as_str()) {
                ordered.push((path.as_str(), content.as_str()));
            }
        }
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_depth_and_name() {
        let entry = TreeEntry::file("src/api/routes.rs");
        assert_eq!(entry.depth(), 2);
        assert_eq!(entry.name(), "routes.rs");
        assert_eq!(TreeEntry::file("README.md").depth(), 0);
    }

    #[test]
    fn test_file_tree_keeps_order() {
        let mut snapshot = RepoSnapshot::new("octo", "demo");
        snapshot.tree = vec![
            TreeEntry::file("README.md"),
            TreeEntry::dir("src"),
            TreeEntry::file("src/main.py"),
        ];
        let paths: Vec<&str> = snapshot.file_tree().collect();
        assert_eq!(paths, vec!["README.md", "src", "src/main.py"]);
        assert_eq!(snapshot.file_entries().count(), 2);
        assert_eq!(snapshot.full_name(), "octo/demo");
    }

    #[test]
    fn test_key_files_root_first() {
        let mut snapshot = RepoSnapshot::new("octo", "demo");
        snapshot.tree = vec![
            TreeEntry::dir("api"),
            TreeEntry::file("api/package.json"),
            TreeEntry::file("package.json"),
            TreeEntry::file("README.md"),
        ];
        for path in ["api/package.json", "package.json", "README.md"] {
            snapshot.files.insert(path.into(), format!("content of {}", path));
        }
        let order: Vec<&str> = snapshot.key_files().into_iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec!["package.json", "README.md", "api/package.json"]);
    }

    #[test]
    fn test_entry_kind_serialization() {
        let json = serde_json::to_string(&TreeEntry::dir("docs")).unwrap();
        assert_eq!(json, r#"{"path":"docs","kind":"dir"}"#);
    }
}
