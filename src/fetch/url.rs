use serde::{Deserialize, Serialize};
use crate::errors::GitGradeError;

const HOST_MARKER: &str = "github.com/";

/// Owner and repository name parsed from a GitHub URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoUrl {
    pub owner: String,
    pub name: String,
}

impl RepoUrl {
    /// Parse `owner/name` out of anything containing `github.com/owner/name`.
    ///
    /// Accepts scheme-less input, trailing slashes, `.git` suffixes and deeper
    /// paths such as `/tree/main/src`; only the first two segments are used.
    pub fn parse(input: &str) -> Result<Self, GitGradeError> {
        let trimmed = input.trim().trim_end_matches('/');
        let Some(idx) = trimmed.rfind(HOST_MARKER) else {
            return Err(GitGradeError::InvalidUrl(format!(
                "'{}' is not a GitHub URL (expected github.com/<owner>/<repo>)",
                input.trim()
            )));
        };

        let rest = &trimmed[idx + HOST_MARKER.len()..];
        let rest = rest.split(['?', '#']).next().unwrap_or_default();
        let mut segments = rest.split('/');
        let owner = segments.next().unwrap_or_default();
        let name = segments.next().unwrap_or_default();
        let name = name.strip_suffix(".git").unwrap_or(name);

        if owner.is_empty() || name.is_empty() {
            return Err(GitGradeError::InvalidUrl(format!(
                "'{}' must contain both an owner and a repository name",
                input.trim()
            )));
        }

        Ok(Self {
            owner: owner.to_string(),
            name: name.to_string(),
        })
    }

    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

impl std::fmt::Display for RepoUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "https://github.com/{}/{}", self.owner, self.name)
    }
}
