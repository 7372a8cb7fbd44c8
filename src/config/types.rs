use serde::{Deserialize, Serialize};

/// On-disk configuration (YAML). Every section is optional; missing values
/// fall back to CLI flags, environment variables and built-in defaults.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GitGradeConfig {
    pub github: Option<GitHubConfig>,
    pub llm: Option<LLMConfig>,
    pub limits: Option<LimitsConfig>,
    pub http: Option<HttpConfig>,
    pub server: Option<ServerConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GitHubConfig {
    pub token: Option<String>,
    pub api_base: Option<String>,
    pub raw_base: Option<String>,
    pub strategy: Option<TreeStrategy>,
    pub max_depth: Option<usize>,
}

/// How the file tree is retrieved.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TreeStrategy {
    /// Walk directory listings down to a fixed depth.
    #[default]
    Contents,
    /// One recursive git tree request against the default branch.
    GitTree,
}

impl TreeStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contents => "contents",
            Self::GitTree => "git_tree",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "contents" => Some(Self::Contents),
            "git_tree" | "git-tree" | "tree" => Some(Self::GitTree),
            _ => None,
        }
    }
}

impl std::fmt::Display for TreeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LLMConfig {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct LimitsConfig {
    pub file_char_budget: Option<usize>,
    pub prompt_char_budget: Option<usize>,
    pub tree_item_limit: Option<usize>,
    pub max_files: Option<usize>,
    pub important_files: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct HttpConfig {
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_strategy_default() {
        assert_eq!(TreeStrategy::default(), TreeStrategy::Contents);
    }

    #[test]
    fn test_tree_strategy_deserialize() {
        let parsed: TreeStrategy = serde_json::from_str("\"git_tree\"").unwrap();
        assert_eq!(parsed, TreeStrategy::GitTree);
    }

    #[test]
    fn test_tree_strategy_from_name() {
        assert_eq!(TreeStrategy::from_name("git-tree"), Some(TreeStrategy::GitTree));
        assert_eq!(TreeStrategy::from_name("contents"), Some(TreeStrategy::Contents));
        assert_eq!(TreeStrategy::from_name("clone"), None);
    }

    #[test]
    fn test_config_default_is_empty() {
        let config = GitGradeConfig::default();
        assert!(config.github.is_none());
        assert!(config.llm.is_none());
        assert!(config.limits.is_none());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "llm:\n  provider: gemini\nlimits:\n  file_char_budget: 100\n";
        let config: GitGradeConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.llm.unwrap().provider.as_deref(), Some("gemini"));
        assert_eq!(config.limits.unwrap().file_char_budget, Some(100));
    }
}
