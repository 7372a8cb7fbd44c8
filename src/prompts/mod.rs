pub mod templates;

use crate::config::PromptSettings;
use crate::models::{EntryKind, GenerationMode, RepoSnapshot};
use crate::utils::formatting::format_count;
use crate::utils::truncation::truncate_with_marker;

const EMPTY_TREE: &str = "(no files found)";
const EMPTY_FILES: &str = "(none of the key files were found)";

/// Values substituted into a template.
#[derive(Debug, Clone, Default)]
pub struct PromptVariables {
    pub repo_name: String,
    pub owner: String,
    pub description: Option<String>,
    pub stars: Option<u64>,
    pub file_tree: String,
    pub key_files: String,
}

/// System and user text for one model call.
#[derive(Debug, Clone)]
pub struct RenderedPrompt {
    pub system: &'static str,
    pub user: String,
}

impl PromptVariables {
    pub fn from_snapshot(snapshot: &RepoSnapshot, settings: &PromptSettings) -> Self {
        Self {
            repo_name: snapshot.name.clone(),
            owner: snapshot.owner.clone(),
            description: snapshot.description.clone(),
            stars: snapshot.stars,
            file_tree: render_tree(snapshot, settings.tree_item_limit),
            key_files: render_key_files(snapshot, settings.prompt_char_budget),
        }
    }
}

/// Replace `{{VARIABLE}}` placeholders. Missing optional values become `n/a`.
pub fn interpolate(template: &str, vars: &PromptVariables) -> String {
    let stars = vars.stars.map(format_count).unwrap_or_else(|| "n/a".to_string());
    let description = vars.description.as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or("n/a");

    let replacements: &[(&str, &str)] = &[
        ("{{REPO_NAME}}", &vars.repo_name),
        ("{{OWNER}}", &vars.owner),
        ("{{DESCRIPTION}}", description),
        ("{{STARS}}", &stars),
        ("{{FILE_TREE}}", &vars.file_tree),
        ("{{KEY_FILES}}", &vars.key_files),
    ];

    let mut result = template.to_string();
    for (placeholder, value) in replacements {
        result = result.replace(placeholder, value);
    }
    result
}

/// Render the prompt for `mode`.
pub fn render(mode: GenerationMode, snapshot: &RepoSnapshot, settings: &PromptSettings) -> RenderedPrompt {
    let vars = PromptVariables::from_snapshot(snapshot, settings);
    let (system, template) = match mode {
        GenerationMode::Audit => (templates::AUDIT_SYSTEM, templates::AUDIT_TEMPLATE),
        GenerationMode::Readme => (templates::README_SYSTEM, templates::README_TEMPLATE),
        GenerationMode::UnitTests => (templates::UNIT_TESTS_SYSTEM, templates::UNIT_TESTS_TEMPLATE),
    };
    RenderedPrompt {
        system,
        user: interpolate(template, &vars),
    }
}

/// One path per line, capped at `limit` entries.
pub fn render_tree(snapshot: &RepoSnapshot, limit: usize) -> String {
    if snapshot.tree.is_empty() {
        return EMPTY_TREE.to_string();
    }

    let mut out: Vec<String> = snapshot.tree.iter()
        .take(limit)
        .map(|e| match e.kind {
            EntryKind::Dir => format!("- {}/", e.path),
            EntryKind::File => format!("- {}", e.path),
        })
        .collect();

    let hidden = snapshot.tree.len().saturating_sub(limit);
    if hidden > 0 {
        out.push(format!("... ({} more)", hidden));
    }
    out.join("\n")
}

/// Concatenate fetched files as `### path` plus a fenced block, then cap the
/// whole section at `budget` characters.
pub fn render_key_files(snapshot: &RepoSnapshot, budget: usize) -> String {
    if snapshot.files.is_empty() {
        return EMPTY_FILES.to_string();
    }

    let mut out = String::new();
    for (path, content) in snapshot.key_files() {
        out.push_str(&format!("### {}\n```\n{}\n```\n\n", path, content));
    }

    truncate_with_marker(&out, budget)
}
