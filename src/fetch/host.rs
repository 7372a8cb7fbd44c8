use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::errors::GitGradeError;
use crate::models::{EntryKind, TreeEntry};

/// Repository-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoMetadata {
    pub name: String,
    pub description: Option<String>,
    pub stars: Option<u64>,
    pub default_branch: Option<String>,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub path: String,
    pub kind: EntryKind,
}

impl ContentItem {
    pub fn to_entry(&self) -> TreeEntry {
        TreeEntry {
            path: self.path.clone(),
            kind: self.kind,
        }
    }
}

/// Read-only access to a source hosting service.
///
/// Every method is a single request. Failures are `GitGradeError::Fetch`.
#[async_trait]
pub trait SourceHost: Send + Sync {
    async fn repository(&self, owner: &str, name: &str) -> Result<RepoMetadata, GitGradeError>;

    /// List one directory; `path` is empty for the repository root.
    async fn list_directory(
        &self,
        owner: &str,
        name: &str,
        path: &str,
    ) -> Result<Vec<ContentItem>, GitGradeError>;

    /// Full recursive tree of `branch`.
    async fn git_tree(
        &self,
        owner: &str,
        name: &str,
        branch: &str,
    ) -> Result<Vec<TreeEntry>, GitGradeError>;

    /// Raw file content at `reference` (branch name or `HEAD`).
    async fn raw_file(
        &self,
        owner: &str,
        name: &str,
        reference: &str,
        path: &str,
    ) -> Result<String, GitGradeError>;

    /// Host name for logging
    fn host_name(&self) -> &str;
}
