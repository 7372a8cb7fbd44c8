use chrono::Utc;
use tracing::info;
use crate::config::PromptSettings;
use crate::errors::GitGradeError;
use crate::llm::LLMProvider;
use crate::models::{GenerationMode, RepoSnapshot, Report};
use crate::prompts;
use super::score::extract_score;

/// Turns a snapshot into report text with a single model call.
pub struct ReportGenerator {
    llm: Box<dyn LLMProvider>,
    prompt: PromptSettings,
}

impl ReportGenerator {
    pub fn new(llm: Box<dyn LLMProvider>, prompt: PromptSettings) -> Self {
        Self { llm, prompt }
    }

    pub fn model_name(&self) -> &str {
        self.llm.model_name()
    }

    /// Render the fixed template for `mode`, send it, and return the text
    /// as produced. The output is not checked against the requested layout.
    pub async fn generate(&self, snapshot: &RepoSnapshot, mode: GenerationMode) -> Result<Report, GitGradeError> {
        let prompt = prompts::render(mode, snapshot, &self.prompt);
        info!(
            repo = %snapshot.full_name(),
            mode = %mode,
            provider = self.llm.provider_name(),
            model = self.llm.model_name(),
            prompt_chars = prompt.user.chars().count(),
            "Requesting generation"
        );

        let response = self.llm.complete(&prompt.user, Some(prompt.system)).await?;

        let score = match mode {
            GenerationMode::Audit => extract_score(&response.content),
            GenerationMode::Readme | GenerationMode::UnitTests => None,
        };

        info!(
            mode = %mode,
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            score,
            "Generation complete"
        );

        Ok(Report {
            mode,
            markdown: response.content,
            score,
            model: response.model,
            generated_at: Utc::now(),
        })
    }
}
