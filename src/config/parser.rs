use std::path::Path;
use crate::errors::GitGradeError;
use super::types::GitGradeConfig;
use super::schema::CONFIG_SCHEMA;
use tracing::warn;

pub async fn parse_config(path: &Path) -> Result<GitGradeConfig, GitGradeError> {
    if !path.exists() {
        return Err(GitGradeError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(GitGradeError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    parse_config_str(&content)
}

/// Parse YAML text into a validated config.
pub fn parse_config_str(content: &str) -> Result<GitGradeConfig, GitGradeError> {
    if content.trim().is_empty() {
        return Ok(GitGradeConfig::default());
    }

    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;

    // JSON Schema validation
    validate_schema(&yaml)?;

    let config: GitGradeConfig = serde_yaml::from_value(yaml)?;

    validate_limits(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema. Violations are logged, not fatal;
/// typed deserialization afterwards is the hard check.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), GitGradeError> {
    let json_value = serde_json::to_value(yaml)
        .map_err(|e| GitGradeError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| GitGradeError::Config(format!("Schema compilation error: {}", e)))?;

    if let Err(errors) = compiled.validate(&json_value) {
        for e in errors {
            warn!(validation_error = %e, path = %e.instance_path, "Config schema warning");
        }
    }

    Ok(())
}

/// Reject limit combinations that would make every fetch or prompt useless.
fn validate_limits(config: &GitGradeConfig) -> Result<(), GitGradeError> {
    if let Some(limits) = &config.limits {
        if limits.important_files.as_ref().is_some_and(|f| f.is_empty()) {
            return Err(GitGradeError::Config(
                "limits.important_files must list at least one file name".into(),
            ));
        }
        for (name, value) in [
            ("file_char_budget", limits.file_char_budget),
            ("prompt_char_budget", limits.prompt_char_budget),
            ("tree_item_limit", limits.tree_item_limit),
            ("max_files", limits.max_files),
        ] {
            if value == Some(0) {
                return Err(GitGradeError::Config(format!("limits.{} must be greater than 0", name)));
            }
        }
        if let (Some(file), Some(prompt)) = (limits.file_char_budget, limits.prompt_char_budget) {
            if file > prompt {
                warn!(file, prompt, "file_char_budget exceeds prompt_char_budget; later files may be cut from the prompt");
            }
        }
    }

    if let Some(github) = &config.github {
        if github.max_depth == Some(0) {
            return Err(GitGradeError::Config("github.max_depth must be at least 1".into()));
        }
    }

    Ok(())
}
