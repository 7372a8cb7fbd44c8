use crate::config::LlmSettings;
use crate::errors::GitGradeError;
use super::provider::{build_http_client, LLMProvider};
use super::openai::{OpenAIProvider, OPENAI_BASE_URL};
use super::gemini::{GeminiProvider, GEMINI_BASE_URL};
use super::catalog;

/// Build the model handle once from explicit settings.
///
/// A missing key is a configuration problem and is reported before any
/// network call is made.
pub fn create_provider(settings: &LlmSettings) -> Result<Box<dyn LLMProvider>, GitGradeError> {
    let api_key = settings.api_key.as_deref()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| {
            let hint = catalog::get_provider(&settings.provider)
                .map(|p| format!(" (or set {})", p.env_var))
                .unwrap_or_default();
            GitGradeError::Config(format!(
                "Please provide an API key for provider '{}'{}",
                settings.provider, hint
            ))
        })?;

    let model = settings.model.as_deref()
        .unwrap_or_else(|| catalog::get_default_model(&settings.provider));
    let client = build_http_client(settings.timeout_secs)?;

    match settings.provider.as_str() {
        "gemini" => {
            let base = settings.base_url.as_deref().unwrap_or(GEMINI_BASE_URL);
            Ok(Box::new(GeminiProvider::with_base_url(client, api_key, Some(model), base)))
        }
        "openai" | "openai_compatible" => {
            let base = settings.base_url.as_deref().unwrap_or(OPENAI_BASE_URL);
            Ok(Box::new(OpenAIProvider::with_base_url(client, api_key, Some(model), base)))
        }
        other => Err(GitGradeError::Config(format!("Unknown LLM provider: {}", other))),
    }
}
