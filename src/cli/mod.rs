pub mod commands;
pub mod analyze;
pub mod generate;
pub mod serve;
pub mod interactive;

pub use commands::{Cli, Commands};

use std::path::Path;
use tracing::debug;
use commands::ModelArgs;
use crate::config::{self, Overrides, Settings, TreeStrategy};
use crate::errors::GitGradeError;
use crate::fetch::RepoUrl;
use crate::models::GenerationMode;
use crate::pipeline::{AnalysisOutcome, ArtifactOutcome, Pipeline};
use crate::repl::progress::spawn_progress;

impl ModelArgs {
    pub fn overrides(&self) -> Result<Overrides, GitGradeError> {
        let strategy = match self.strategy.as_deref() {
            Some(name) => Some(TreeStrategy::from_name(name).ok_or_else(|| {
                GitGradeError::Config(format!("Unknown tree strategy '{}': use contents or git_tree", name))
            })?),
            None => None,
        };
        Ok(Overrides {
            provider: self.provider.clone(),
            model: self.model.clone(),
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
            github_token: self.github_token.clone(),
            strategy,
        })
    }

    /// Layer command-line values over the config file (if any) and the environment.
    pub async fn load_settings(&self) -> Result<Settings, GitGradeError> {
        let file = match &self.config {
            Some(path) => Some(config::parse_config(Path::new(path)).await?),
            None => None,
        };
        let settings = Settings::resolve(file.as_ref(), &self.overrides()?);
        debug!(
            provider = %settings.llm.provider,
            strategy = %settings.fetch.strategy,
            github_token = settings.fetch.token.is_some(),
            "Settings resolved"
        );
        Ok(settings)
    }
}

/// Run a full audit while a spinner reports progress.
pub async fn analyze_with_progress(
    settings: &Settings,
    url: &str,
    quiet: bool,
) -> Result<AnalysisOutcome, GitGradeError> {
    RepoUrl::parse(url)?;
    let pipeline = Pipeline::from_settings(settings)?;

    let (tx, progress) = spawn_progress(quiet);
    let pipeline = pipeline.with_events(tx);
    let result = pipeline.analyze(url).await;
    drop(pipeline);
    let _ = progress.await;
    result
}

pub async fn generate_with_progress(
    settings: &Settings,
    url: &str,
    mode: GenerationMode,
    quiet: bool,
) -> Result<ArtifactOutcome, GitGradeError> {
    RepoUrl::parse(url)?;
    let pipeline = Pipeline::from_settings(settings)?;

    let (tx, progress) = spawn_progress(quiet);
    let pipeline = pipeline.with_events(tx);
    let result = pipeline.generate_artifact(url, mode).await;
    drop(pipeline);
    let _ = progress.await;
    result
}
