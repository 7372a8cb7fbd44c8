use crate::llm::catalog;
use super::credentials::{credential_from_env, resolve_credential};
use super::types::{GitGradeConfig, TreeStrategy};

pub const GITHUB_API_BASE: &str = "https://api.github.com";
pub const GITHUB_RAW_BASE: &str = "https://raw.githubusercontent.com";
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_TOKEN";
pub const DEFAULT_PROVIDER: &str = "gemini";
pub const DEFAULT_MAX_DEPTH: usize = 2;
pub const DEFAULT_FILE_CHAR_BUDGET: usize = 5_000;
pub const DEFAULT_PROMPT_CHAR_BUDGET: usize = 25_000;
pub const DEFAULT_TREE_ITEM_LIMIT: usize = 300;
pub const DEFAULT_MAX_FILES: usize = 10;

/// README, dependency manifests and common entry points, matched
/// case-insensitively against file base names.
pub const DEFAULT_IMPORTANT_FILES: &[&str] = &[
    "readme.md",
    "requirements.txt",
    "package.json",
    "dockerfile",
    "main.py",
    "app.py",
    "index.js",
    "cargo.toml",
    "go.mod",
    "pyproject.toml",
];

/// Values supplied on the command line or per API request. They win over
/// the config file, which wins over the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub github_token: Option<String>,
    pub strategy: Option<TreeStrategy>,
}

#[derive(Clone)]
pub struct FetchSettings {
    pub api_base: String,
    pub raw_base: String,
    pub token: Option<String>,
    pub strategy: TreeStrategy,
    pub max_depth: usize,
    pub important_files: Vec<String>,
    pub file_char_budget: usize,
    /// Upper bound on raw downloads per snapshot.
    pub max_files: usize,
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            api_base: GITHUB_API_BASE.to_string(),
            raw_base: GITHUB_RAW_BASE.to_string(),
            token: None,
            strategy: TreeStrategy::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            important_files: DEFAULT_IMPORTANT_FILES.iter().map(|s| s.to_string()).collect(),
            file_char_budget: DEFAULT_FILE_CHAR_BUDGET,
            max_files: DEFAULT_MAX_FILES,
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl FetchSettings {
    /// Whether `file_name` (a base name) is on the allow-list.
    pub fn is_important(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.important_files.iter().any(|f| f.to_lowercase() == lower)
    }
}

#[derive(Clone)]
pub struct LlmSettings {
    pub provider: String,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            model: None,
            api_key: None,
            base_url: None,
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PromptSettings {
    pub tree_item_limit: usize,
    pub prompt_char_budget: usize,
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            tree_item_limit: DEFAULT_TREE_ITEM_LIMIT,
            prompt_char_budget: DEFAULT_PROMPT_CHAR_BUDGET,
        }
    }
}

/// Fully resolved runtime configuration, passed explicitly into the
/// fetcher and the generator.
#[derive(Clone, Default)]
pub struct Settings {
    pub fetch: FetchSettings,
    pub llm: LlmSettings,
    pub prompt: PromptSettings,
}

impl Settings {
    pub fn resolve(file: Option<&GitGradeConfig>, overrides: &Overrides) -> Self {
        let github = file.and_then(|c| c.github.clone()).unwrap_or_default();
        let llm = file.and_then(|c| c.llm.clone()).unwrap_or_default();
        let limits = file.and_then(|c| c.limits.clone()).unwrap_or_default();
        let http = file.and_then(|c| c.http.clone()).unwrap_or_default();
        let defaults = FetchSettings::default();

        let token = overrides.github_token.clone()
            .or_else(|| github.token.as_deref().map(resolve_credential))
            .or_else(|| credential_from_env(GITHUB_TOKEN_ENV))
            .filter(|t| !t.is_empty());

        let fetch = FetchSettings {
            api_base: github.api_base.unwrap_or(defaults.api_base),
            raw_base: github.raw_base.unwrap_or(defaults.raw_base),
            token,
            strategy: overrides.strategy.or(github.strategy).unwrap_or_default(),
            max_depth: github.max_depth.unwrap_or(DEFAULT_MAX_DEPTH),
            important_files: limits.important_files.unwrap_or(defaults.important_files),
            file_char_budget: limits.file_char_budget.unwrap_or(DEFAULT_FILE_CHAR_BUDGET),
            max_files: limits.max_files.unwrap_or(DEFAULT_MAX_FILES),
            timeout_secs: http.timeout_secs,
            user_agent: http.user_agent.unwrap_or(defaults.user_agent),
        };

        let provider = overrides.provider.clone()
            .or(llm.provider)
            .unwrap_or_else(|| DEFAULT_PROVIDER.to_string());

        let api_key = overrides.api_key.clone()
            .or_else(|| llm.api_key.as_deref().map(resolve_credential))
            .or_else(|| {
                catalog::get_provider(&provider).and_then(|p| credential_from_env(p.env_var))
            })
            .filter(|k| !k.is_empty());

        let llm = LlmSettings {
            provider,
            model: overrides.model.clone().or(llm.model),
            api_key,
            base_url: overrides.base_url.clone().or(llm.base_url),
            timeout_secs: http.timeout_secs,
        };

        let prompt = PromptSettings {
            tree_item_limit: limits.tree_item_limit.unwrap_or(DEFAULT_TREE_ITEM_LIMIT),
            prompt_char_budget: limits.prompt_char_budget.unwrap_or(DEFAULT_PROMPT_CHAR_BUDGET),
        };

        Self { fetch, llm, prompt }
    }

    /// Copy with per-request credentials layered on top; blank values are ignored.
    pub fn with_credentials(&self, api_key: Option<String>, github_token: Option<String>) -> Self {
        let mut settings = self.clone();
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            settings.llm.api_key = Some(key);
        }
        if let Some(token) = github_token.filter(|t| !t.trim().is_empty()) {
            settings.fetch.token = Some(token);
        }
        settings
    }
}

fn default_user_agent() -> String {
    format!("gitgrade/{}", env!("CARGO_PKG_VERSION"))
}
