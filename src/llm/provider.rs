use async_trait::async_trait;
use crate::errors::GitGradeError;
use super::types::LLMResponse;

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Free-form text completion. One request, no retry, no streaming.
    async fn complete(
        &self,
        prompt: &str,
        system: Option<&str>,
    ) -> Result<LLMResponse, GitGradeError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;

    /// Model identifier
    fn model_name(&self) -> &str;
}

/// HTTP client shared by the providers. Without a configured timeout the
/// reqwest default applies.
pub(crate) fn build_http_client(timeout_secs: Option<u64>) -> Result<reqwest::Client, GitGradeError> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(std::time::Duration::from_secs(secs));
    }
    builder
        .build()
        .map_err(|e| GitGradeError::Internal(format!("Failed to build HTTP client: {}", e)))
}
