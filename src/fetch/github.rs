use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use crate::config::FetchSettings;
use crate::errors::GitGradeError;
use crate::models::{EntryKind, TreeEntry};
use crate::utils::truncation::truncate_error;
use super::host::{ContentItem, RepoMetadata, SourceHost};

/// GitHub REST API plus raw.githubusercontent.com.
pub struct GitHubClient {
    client: Client,
    api_base: String,
    raw_base: String,
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GitHubRepository {
    name: String,
    description: Option<String>,
    stargazers_count: Option<u64>,
    default_branch: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GitHubContentItem {
    path: String,
    #[serde(rename = "type")]
    item_type: String,
}

#[derive(Debug, Deserialize)]
struct GitHubTreeResponse {
    tree: Vec<GitHubTreeItem>,
    truncated: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct GitHubTreeItem {
    path: String,
    #[serde(rename = "type")]
    item_type: String,
}

impl GitHubClient {
    pub fn new(settings: &FetchSettings) -> Result<Self, GitGradeError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&settings.user_agent)
                .map_err(|e| GitGradeError::Config(format!("Invalid user agent: {}", e)))?,
        );

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(std::time::Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| GitGradeError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!(api_base = %settings.api_base, authenticated = settings.token.is_some(), "Created GitHub client");

        Ok(Self {
            client,
            api_base: settings.api_base.trim_end_matches('/').to_string(),
            raw_base: settings.raw_base.trim_end_matches('/').to_string(),
            token: settings.token.clone(),
        })
    }

    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", token)) {
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }

    async fn get(&self, url: &str, accept: &'static str) -> Result<Response, GitGradeError> {
        debug!(url = %url, "GitHub request");

        let resp = self.client
            .get(url)
            .headers(self.auth_headers())
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(|e| GitGradeError::Fetch(format!("Request to {} failed: {}", url, e)))?;

        if !resp.status().is_success() {
            return Err(response_error(resp).await);
        }
        Ok(resp)
    }

    async fn get_api(&self, url: Url) -> Result<Response, GitGradeError> {
        self.get(url.as_str(), "application/vnd.github.v3+json").await
    }
}

/// Append `parts` to `base`, splitting each on '/' and percent-encoding
/// every segment so names like `a#b` stay in the path.
fn segment_url(base: &str, parts: &[&str]) -> Result<Url, GitGradeError> {
    let mut url = Url::parse(base)
        .map_err(|e| GitGradeError::Config(format!("Invalid base URL {}: {}", base, e)))?;
    {
        let mut segments = url.path_segments_mut()
            .map_err(|_| GitGradeError::Config(format!("Base URL {} cannot carry a path", base)))?;
        segments.pop_if_empty();
        for part in parts {
            segments.extend(part.split('/').filter(|s| !s.is_empty()));
        }
    }
    Ok(url)
}

/// Turn a non-success response into a FetchError carrying status and message.
async fn response_error(resp: Response) -> GitGradeError {
    let status = resp.status();
    let url = resp.url().to_string();
    let body = resp.text().await.unwrap_or_default();

    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| {
            if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("Unknown error").to_string()
            } else {
                body.trim().to_string()
            }
        });

    let hint = match status.as_u16() {
        401 => " (check the GitHub token)",
        403 | 429 => " (rate limited? supply a GitHub token to raise the limit)",
        404 => " (repository not found or not accessible)",
        _ => "",
    };

    GitGradeError::Fetch(format!(
        "HTTP {} for {}: {}{}",
        status.as_u16(),
        url,
        truncate_error(&message),
        hint
    ))
}

fn parse_error(what: &str, e: reqwest::Error) -> GitGradeError {
    GitGradeError::Fetch(format!("Failed to parse {}: {}", what, e))
}

#[async_trait]
impl SourceHost for GitHubClient {
    async fn repository(&self, owner: &str, name: &str) -> Result<RepoMetadata, GitGradeError> {
        let resp = self.get_api(segment_url(&self.api_base, &["repos", owner, name])?).await?;
        let repo: GitHubRepository = resp.json().await
            .map_err(|e| parse_error("repository metadata", e))?;

        Ok(RepoMetadata {
            name: repo.name,
            description: repo.description,
            stars: repo.stargazers_count,
            default_branch: repo.default_branch,
        })
    }

    async fn list_directory(
        &self,
        owner: &str,
        name: &str,
        path: &str,
    ) -> Result<Vec<ContentItem>, GitGradeError> {
        let url = segment_url(&self.api_base, &["repos", owner, name, "contents", path])?;
        let resp = self.get_api(url).await?;
        let items: Vec<GitHubContentItem> = resp.json().await
            .map_err(|e| parse_error("directory listing", e))?;

        Ok(items
            .into_iter()
            .map(|item| ContentItem {
                kind: if item.item_type == "dir" { EntryKind::Dir } else { EntryKind::File },
                path: item.path,
            })
            .collect())
    }

    async fn git_tree(
        &self,
        owner: &str,
        name: &str,
        branch: &str,
    ) -> Result<Vec<TreeEntry>, GitGradeError> {
        let mut url = segment_url(&self.api_base, &["repos", owner, name, "git", "trees", branch])?;
        url.set_query(Some("recursive=1"));
        let resp = self.get_api(url).await?;
        let tree: GitHubTreeResponse = resp.json().await
            .map_err(|e| parse_error("git tree", e))?;

        if tree.truncated.unwrap_or(false) {
            warn!(owner, name, branch, "GitHub file tree was truncated");
        }

        Ok(tree.tree
            .into_iter()
            .filter(|item| item.item_type == "blob" || item.item_type == "tree")
            .map(|item| TreeEntry {
                kind: if item.item_type == "tree" { EntryKind::Dir } else { EntryKind::File },
                path: item.path,
            })
            .collect())
    }

    async fn raw_file(
        &self,
        owner: &str,
        name: &str,
        reference: &str,
        path: &str,
    ) -> Result<String, GitGradeError> {
        let url = segment_url(&self.raw_base, &[owner, name, reference, path])?;
        let resp = self.get(url.as_str(), "text/plain").await?;
        let bytes = resp.bytes().await
            .map_err(|e| GitGradeError::Fetch(format!("Failed to read {}: {}", path, e)))?;

        String::from_utf8(bytes.to_vec())
            .map_err(|_| GitGradeError::Fetch(format!("{} is not valid UTF-8", path)))
    }

    fn host_name(&self) -> &str { "github" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_bases() {
        let settings = FetchSettings {
            api_base: "http://127.0.0.1:1/api/".into(),
            raw_base: "http://127.0.0.1:1/raw/".into(),
            ..Default::default()
        };
        let client = GitHubClient::new(&settings).unwrap();
        assert_eq!(client.api_base, "http://127.0.0.1:1/api");
        assert_eq!(client.raw_base, "http://127.0.0.1:1/raw");
        assert_eq!(client.host_name(), "github");
    }

    #[test]
    fn test_auth_headers_with_token() {
        let settings = FetchSettings {
            token: Some("ghp_abc".into()),
            ..Default::default()
        };
        let client = GitHubClient::new(&settings).unwrap();
        let headers = client.auth_headers();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer ghp_abc");
    }

    #[test]
    fn test_auth_headers_anonymous() {
        let client = GitHubClient::new(&FetchSettings::default()).unwrap();
        assert!(client.auth_headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_invalid_user_agent_rejected() {
        let settings = FetchSettings {
            user_agent: "bad\nagent".into(),
            ..Default::default()
        };
        assert!(matches!(GitHubClient::new(&settings), Err(GitGradeError::Config(_))));
    }

    #[test]
    fn test_segment_url_encodes_path_segments() {
        let url = segment_url("http://127.0.0.1:1/api", &["repos", "octo", "demo", "contents", "a#b/c d.md"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:1/api/repos/octo/demo/contents/a%23b/c%20d.md");
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_segment_url_skips_empty_path() {
        let url = segment_url("https://api.github.com", &["repos", "octo", "demo", "contents", ""]).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/repos/octo/demo/contents");
    }

    #[test]
    fn test_segment_url_rejects_bad_base() {
        assert!(matches!(segment_url("not a url", &["repos"]), Err(GitGradeError::Config(_))));
    }
}
