pub mod url;
pub mod host;
pub mod github;
pub mod fetcher;

pub use url::RepoUrl;
pub use host::{ContentItem, RepoMetadata, SourceHost};
pub use github::GitHubClient;
pub use fetcher::Fetcher;
