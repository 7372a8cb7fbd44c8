use serde::Serialize;
use tokio::sync::mpsc;
use tracing::info;
use crate::config::Settings;
use crate::errors::GitGradeError;
use crate::fetch::{Fetcher, GitHubClient};
use crate::llm;
use crate::models::{GenerationMode, RepoSnapshot, Report};
use crate::reporting::{score_or_default, BadgeTier, ExtensionBreakdown, ReportGenerator};
use super::events::PipelineEvent;

/// Result of a full audit.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub snapshot: RepoSnapshot,
    pub report: Report,
    pub badge: BadgeTier,
    pub extensions: ExtensionBreakdown,
}

/// Result of a one-click README or unit-test generation.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactOutcome {
    pub snapshot: RepoSnapshot,
    pub report: Report,
}

/// URL → fetch → generate, one step after the other.
pub struct Pipeline {
    fetcher: Fetcher,
    generator: ReportGenerator,
    event_tx: Option<mpsc::UnboundedSender<PipelineEvent>>,
}

impl Pipeline {
    pub fn new(fetcher: Fetcher, generator: ReportGenerator) -> Self {
        Self {
            fetcher,
            generator,
            event_tx: None,
        }
    }

    /// Wire up the GitHub client and model provider from resolved settings.
    /// Fails with a configuration error (no network access) when the model
    /// key is missing.
    pub fn from_settings(settings: &Settings) -> Result<Self, GitGradeError> {
        let provider = llm::create_provider(&settings.llm)?;
        let host = GitHubClient::new(&settings.fetch)?;
        let fetcher = Fetcher::new(Box::new(host), settings.fetch.clone());
        let generator = ReportGenerator::new(provider, settings.prompt.clone());
        Ok(Self::new(fetcher, generator))
    }

    pub fn with_events(mut self, tx: mpsc::UnboundedSender<PipelineEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    fn emit(&self, event: PipelineEvent) {
        if let Some(tx) = &self.event_tx {
            let _ = tx.send(event);
        }
    }

    pub async fn analyze(&self, url: &str) -> Result<AnalysisOutcome, GitGradeError> {
        let (snapshot, report) = self.run(url, GenerationMode::Audit).await?;
        let badge = BadgeTier::from_score(score_or_default(&report.markdown));
        let extensions = ExtensionBreakdown::from_snapshot(&snapshot);
        info!(repo = %snapshot.full_name(), score = report.score, badge = %badge, "Analysis finished");

        Ok(AnalysisOutcome {
            snapshot,
            report,
            badge,
            extensions,
        })
    }

    pub async fn generate_artifact(&self, url: &str, mode: GenerationMode) -> Result<ArtifactOutcome, GitGradeError> {
        let (snapshot, report) = self.run(url, mode).await?;
        Ok(ArtifactOutcome { snapshot, report })
    }

    async fn run(&self, url: &str, mode: GenerationMode) -> Result<(RepoSnapshot, Report), GitGradeError> {
        let result = self.run_inner(url, mode).await;
        if let Err(e) = &result {
            self.emit(PipelineEvent::Failed { error: e.to_string() });
        }
        result
    }

    async fn run_inner(&self, url: &str, mode: GenerationMode) -> Result<(RepoSnapshot, Report), GitGradeError> {
        self.emit(PipelineEvent::FetchStarted { url: url.to_string() });
        let snapshot = self.fetcher.fetch(url).await?;
        self.emit(PipelineEvent::FetchCompleted {
            repo: snapshot.full_name(),
            entries: snapshot.tree.len(),
            files: snapshot.files.len(),
            omitted: snapshot.omitted.len(),
        });

        self.emit(PipelineEvent::GenerationStarted {
            mode,
            model: self.generator.model_name().to_string(),
        });
        let report = self.generator.generate(&snapshot, mode).await?;
        self.emit(PipelineEvent::GenerationCompleted { mode, score: report.score });

        Ok((snapshot, report))
    }
}
