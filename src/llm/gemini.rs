use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;
use crate::config::credentials::redact_credentials;
use crate::errors::GitGradeError;
use crate::utils::truncation::truncate_error;
use super::provider::LLMProvider;
use super::types::LLMResponse;

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(client: Client, api_key: &str, model: Option<&str>) -> Self {
        Self::with_base_url(client, api_key, model, GEMINI_BASE_URL)
    }

    pub fn with_base_url(client: Client, api_key: &str, model: Option<&str>, base_url: &str) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            model: model.unwrap_or("gemini-1.5-flash").to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn redact(&self, text: &str) -> String {
        redact_credentials(text, &[&self.api_key])
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
    async fn complete(&self, prompt: &str, system: Option<&str>) -> Result<LLMResponse, GitGradeError> {
        let text = match system {
            Some(sys) => format!("System: {}\n\n{}", sys, prompt),
            None => prompt.to_string(),
        };

        let body = json!({
            "contents": [{"role": "user", "parts": [{"text": text}]}],
            "generationConfig": {
                "maxOutputTokens": 8192,
            }
        });

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        debug!(model = %self.model, prompt_chars = text.chars().count(), "Sending Gemini request");

        let resp = self.client.post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| GitGradeError::Generation(self.redact(&format!("Gemini request failed: {}", e))))?;

        let status = resp.status();
        let data: Value = resp.json().await
            .map_err(|e| GitGradeError::Generation(format!("Parse error (HTTP {}): {}", status.as_u16(), e)))?;

        if let Some(error) = data.get("error") {
            let message = error["message"].as_str().unwrap_or("Unknown");
            return Err(GitGradeError::Generation(format!(
                "HTTP {}: {}",
                status.as_u16(),
                truncate_error(&self.redact(message))
            )));
        }
        if !status.is_success() {
            return Err(GitGradeError::Generation(format!("HTTP {}", status.as_u16())));
        }

        let content = data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                let reason = data["candidates"][0]["finishReason"].as_str()
                    .or_else(|| data["promptFeedback"]["blockReason"].as_str())
                    .unwrap_or("none");
                GitGradeError::Generation(format!("No text in Gemini response (reason: {})", reason))
            })?
            .to_string();

        let input_tokens = data["usageMetadata"]["promptTokenCount"].as_u64();
        let output_tokens = data["usageMetadata"]["candidatesTokenCount"].as_u64();

        Ok(LLMResponse {
            content,
            input_tokens,
            output_tokens,
            model: self.model.clone(),
        })
    }

    fn provider_name(&self) -> &str { "gemini" }
    fn model_name(&self) -> &str { &self.model }
}
