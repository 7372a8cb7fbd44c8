use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::models::{GenerationMode, Omission};
use crate::pipeline::{AnalysisOutcome, ArtifactOutcome};
use crate::reporting::chart::ExtensionCount;
use crate::reporting::BadgeTier;

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    pub url: String,
    pub api_key: Option<String>,
    pub github_token: Option<String>,
}

#[derive(Deserialize)]
pub struct GenerateRequest {
    pub url: String,
    /// `readme` or `tests`
    pub kind: String,
    pub api_key: Option<String>,
    pub github_token: Option<String>,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub repository: String,
    pub description: Option<String>,
    pub stars: Option<u64>,
    pub score: Option<u8>,
    pub badge: BadgeTier,
    pub report: String,
    pub model: String,
    pub generated_at: DateTime<Utc>,
    pub extensions: Vec<ExtensionCount>,
    pub files_analyzed: Vec<String>,
    pub omitted: Vec<Omission>,
}

impl From<AnalysisOutcome> for AnalyzeResponse {
    fn from(outcome: AnalysisOutcome) -> Self {
        Self {
            repository: outcome.snapshot.full_name(),
            files_analyzed: outcome.snapshot.files.keys().cloned().collect(),
            description: outcome.snapshot.description,
            stars: outcome.snapshot.stars,
            score: outcome.report.score,
            badge: outcome.badge,
            report: outcome.report.markdown,
            model: outcome.report.model,
            generated_at: outcome.report.generated_at,
            extensions: outcome.extensions.counts,
            omitted: outcome.snapshot.omitted,
        }
    }
}

#[derive(Serialize)]
pub struct GenerateResponse {
    pub repository: String,
    pub mode: GenerationMode,
    pub content: String,
    pub model: String,
    pub generated_at: DateTime<Utc>,
    pub omitted: Vec<Omission>,
}

impl From<ArtifactOutcome> for GenerateResponse {
    fn from(outcome: ArtifactOutcome) -> Self {
        Self {
            repository: outcome.snapshot.full_name(),
            mode: outcome.report.mode,
            content: outcome.report.markdown,
            model: outcome.report.model,
            generated_at: outcome.report.generated_at,
            omitted: outcome.snapshot.omitted,
        }
    }
}
