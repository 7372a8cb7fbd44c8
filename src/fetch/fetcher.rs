use std::collections::VecDeque;
use tracing::{debug, info, warn};
use crate::config::{FetchSettings, TreeStrategy};
use crate::errors::GitGradeError;
use crate::models::{EntryKind, Omission, RepoSnapshot, TreeEntry};
use crate::utils::truncation::truncate_chars;
use super::host::SourceHost;
use super::url::RepoUrl;

const FALLBACK_BRANCHES: &[&str] = &["main", "master"];

/// Builds a [`RepoSnapshot`] from a repository URL. Requests are issued one
/// at a time; nothing is shared between calls.
pub struct Fetcher {
    host: Box<dyn SourceHost>,
    settings: FetchSettings,
}

impl Fetcher {
    pub fn new(host: Box<dyn SourceHost>, settings: FetchSettings) -> Self {
        Self { host, settings }
    }

    pub async fn fetch(&self, url: &str) -> Result<RepoSnapshot, GitGradeError> {
        let repo = RepoUrl::parse(url)?;
        info!(repo = %repo.full_name(), host = self.host.host_name(), strategy = %self.settings.strategy, "Fetching repository");

        let metadata = self.host.repository(&repo.owner, &repo.name).await?;

        let mut snapshot = RepoSnapshot::new(&repo.owner, &repo.name);
        snapshot.description = metadata.description;
        snapshot.stars = metadata.stars;
        snapshot.default_branch = metadata.default_branch;

        let reference = match self.settings.strategy {
            TreeStrategy::Contents => {
                self.walk_contents(&repo, &mut snapshot).await?;
                snapshot.default_branch.clone().unwrap_or_else(|| "HEAD".to_string())
            }
            TreeStrategy::GitTree => {
                let (branch, tree) = self.recursive_tree(&repo, snapshot.default_branch.as_deref()).await?;
                snapshot.tree = tree;
                branch
            }
        };

        self.download_important_files(&repo, &reference, &mut snapshot).await;

        info!(
            repo = %repo.full_name(),
            entries = snapshot.tree.len(),
            files = snapshot.files.len(),
            omitted = snapshot.omitted.len(),
            "Repository snapshot ready"
        );
        Ok(snapshot)
    }

    /// Breadth-first walk of directory listings. Directories at depth
    /// `max_depth - 1` are recorded but not listed.
    async fn walk_contents(&self, repo: &RepoUrl, snapshot: &mut RepoSnapshot) -> Result<(), GitGradeError> {
        let root = self.host.list_directory(&repo.owner, &repo.name, "").await?;
        let mut queue: VecDeque<TreeEntry> = root.iter().map(|item| item.to_entry()).collect();

        while let Some(entry) = queue.pop_front() {
            let descend = entry.kind == EntryKind::Dir && entry.depth() + 1 < self.settings.max_depth;
            let dir_path = entry.path.clone();
            snapshot.tree.push(entry);
            if !descend {
                continue;
            }

            match self.host.list_directory(&repo.owner, &repo.name, &dir_path).await {
                Ok(items) => queue.extend(items.iter().map(|item| item.to_entry())),
                Err(e) => {
                    warn!(path = %dir_path, error = %e, "Directory listing failed, skipping");
                    snapshot.omitted.push(Omission {
                        path: dir_path,
                        reason: format!("directory listing failed: {}", e),
                    });
                }
            }
        }
        Ok(())
    }

    /// Recursive tree of the default branch, or `main` then `master` when
    /// the host did not report one.
    async fn recursive_tree(
        &self,
        repo: &RepoUrl,
        default_branch: Option<&str>,
    ) -> Result<(String, Vec<TreeEntry>), GitGradeError> {
        let mut candidates: Vec<&str> = Vec::new();
        if let Some(branch) = default_branch {
            candidates.push(branch);
        }
        for branch in FALLBACK_BRANCHES {
            if !candidates.contains(branch) {
                candidates.push(*branch);
            }
        }

        let mut last_error = None;
        for branch in candidates {
            match self.host.git_tree(&repo.owner, &repo.name, branch).await {
                Ok(tree) => {
                    debug!(branch, entries = tree.len(), "Fetched recursive tree");
                    return Ok((branch.to_string(), tree));
                }
                Err(e) => {
                    debug!(branch, error = %e, "Tree lookup failed, trying next branch");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| GitGradeError::Fetch("No branch candidates".into())))
    }

    /// Download allow-listed files, shallowest first. Files deeper than
    /// `max_depth` are skipped and at most `max_files` are fetched.
    /// Failures are recorded, never fatal.
    async fn download_important_files(&self, repo: &RepoUrl, reference: &str, snapshot: &mut RepoSnapshot) {
        let mut candidates: Vec<&TreeEntry> = snapshot.file_entries()
            .filter(|e| e.depth() < self.settings.max_depth && self.settings.is_important(e.name()))
            .collect();
        candidates.sort_by_key(|e| e.depth());

        if candidates.len() > self.settings.max_files {
            debug!(
                found = candidates.len(),
                limit = self.settings.max_files,
                "More important files than the download limit, keeping the shallowest"
            );
        }
        let wanted: Vec<String> = candidates.into_iter()
            .take(self.settings.max_files)
            .map(|e| e.path.clone())
            .collect();

        for path in wanted {
            match self.host.raw_file(&repo.owner, &repo.name, reference, &path).await {
                Ok(content) => {
                    let kept = truncate_chars(&content, self.settings.file_char_budget);
                    debug!(path = %path, chars = kept.chars().count(), "Fetched important file");
                    snapshot.files.insert(path, kept.to_string());
                }
                Err(e) => {
                    warn!(path = %path, error = %e, "Important file omitted");
                    snapshot.omitted.push(Omission {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }
    }
}
