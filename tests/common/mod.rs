#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use gitgrade::errors::GitGradeError;
use gitgrade::fetch::{ContentItem, RepoMetadata, SourceHost};
use gitgrade::llm::{LLMProvider, LLMResponse};
use gitgrade::models::{EntryKind, TreeEntry};

pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn file(path: &str) -> ContentItem {
    ContentItem { path: path.to_string(), kind: EntryKind::File }
}

pub fn dir(path: &str) -> ContentItem {
    ContentItem { path: path.to_string(), kind: EntryKind::Dir }
}

/// In-memory source host. Every call is appended to `calls`.
#[derive(Default)]
pub struct StubHost {
    pub metadata: RepoMetadata,
    pub listings: HashMap<String, Vec<ContentItem>>,
    pub failing_listings: HashSet<String>,
    pub trees: HashMap<String, Vec<TreeEntry>>,
    pub files: HashMap<String, String>,
    pub calls: CallLog,
}

impl StubHost {
    pub fn new() -> Self {
        Self {
            metadata: RepoMetadata {
                name: "demo".into(),
                description: Some("A demo project".into()),
                stars: Some(42),
                default_branch: Some("main".into()),
            },
            ..Default::default()
        }
    }

    pub fn listing(mut self, path: &str, items: Vec<ContentItem>) -> Self {
        self.listings.insert(path.to_string(), items);
        self
    }

    pub fn failing_listing(mut self, path: &str) -> Self {
        self.failing_listings.insert(path.to_string());
        self
    }

    pub fn tree(mut self, branch: &str, entries: Vec<TreeEntry>) -> Self {
        self.trees.insert(branch.to_string(), entries);
        self
    }

    pub fn file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    pub fn call_log(&self) -> CallLog {
        self.calls.clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl SourceHost for StubHost {
    async fn repository(&self, owner: &str, name: &str) -> Result<RepoMetadata, GitGradeError> {
        self.record(format!("repository {}/{}", owner, name));
        Ok(self.metadata.clone())
    }

    async fn list_directory(&self, _owner: &str, _name: &str, path: &str) -> Result<Vec<ContentItem>, GitGradeError> {
        self.record(format!("list {}", path));
        if self.failing_listings.contains(path) {
            return Err(GitGradeError::Fetch(format!("HTTP 500 for contents/{}: boom", path)));
        }
        self.listings
            .get(path)
            .cloned()
            .ok_or_else(|| GitGradeError::Fetch(format!("HTTP 404 for contents/{}: Not Found", path)))
    }

    async fn git_tree(&self, _owner: &str, _name: &str, branch: &str) -> Result<Vec<TreeEntry>, GitGradeError> {
        self.record(format!("tree {}", branch));
        self.trees
            .get(branch)
            .cloned()
            .ok_or_else(|| GitGradeError::Fetch(format!("HTTP 404 for git/trees/{}: Not Found", branch)))
    }

    async fn raw_file(&self, _owner: &str, _name: &str, reference: &str, path: &str) -> Result<String, GitGradeError> {
        self.record(format!("raw {}@{}", path, reference));
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| GitGradeError::Fetch(format!("HTTP 404 for {}: Not Found", path)))
    }

    fn host_name(&self) -> &str { "stub" }
}

/// Prompt and system text received by the stub model.
#[derive(Debug, Clone)]
pub struct SeenPrompt {
    pub user: String,
    pub system: Option<String>,
}

pub struct StubLLM {
    pub reply: Result<String, String>,
    pub seen: Arc<Mutex<Vec<SeenPrompt>>>,
}

impl StubLLM {
    pub fn replying(text: &str) -> Self {
        Self { reply: Ok(text.to_string()), seen: Arc::default() }
    }

    pub fn failing(message: &str) -> Self {
        Self { reply: Err(message.to_string()), seen: Arc::default() }
    }
}

#[async_trait]
impl LLMProvider for StubLLM {
    async fn complete(&self, prompt: &str, system: Option<&str>) -> Result<LLMResponse, GitGradeError> {
        self.seen.lock().unwrap().push(SeenPrompt {
            user: prompt.to_string(),
            system: system.map(|s| s.to_string()),
        });
        match &self.reply {
            Ok(text) => Ok(LLMResponse {
                content: text.clone(),
                input_tokens: Some(prompt.len() as u64),
                output_tokens: Some(text.len() as u64),
                model: "stub-model".into(),
            }),
            Err(message) => Err(GitGradeError::Generation(message.clone())),
        }
    }

    fn provider_name(&self) -> &str { "stub" }
    fn model_name(&self) -> &str { "stub-model" }
}
