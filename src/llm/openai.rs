use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use crate::errors::GitGradeError;
use crate::utils::truncation::truncate_error;
use super::provider::LLMProvider;
use super::types::LLMResponse;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAIProvider {
    pub fn new(client: Client, api_key: &str, model: Option<&str>) -> Self {
        Self::with_base_url(client, api_key, model, OPENAI_BASE_URL)
    }

    pub fn with_base_url(client: Client, api_key: &str, model: Option<&str>, base_url: &str) -> Self {
        Self {
            client,
            api_key: api_key.to_string(),
            model: model.unwrap_or("gpt-4o-mini").to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    async fn complete(&self, prompt: &str, system: Option<&str>) -> Result<LLMResponse, GitGradeError> {
        let mut messages = Vec::new();
        if let Some(sys) = system {
            messages.push(json!({"role": "system", "content": sys}));
        }
        messages.push(json!({"role": "user", "content": prompt}));

        let body = json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": 4096,
        });

        let resp = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| GitGradeError::Generation(format!("OpenAI request failed: {}", e)))?;

        let status = resp.status();
        if status.as_u16() == 401 {
            return Err(GitGradeError::Generation("HTTP 401: invalid OpenAI API key".into()));
        }
        if status.as_u16() == 429 {
            return Err(GitGradeError::Generation("HTTP 429: OpenAI rate limit".into()));
        }

        let data: Value = resp.json().await
            .map_err(|e| GitGradeError::Generation(format!("Failed to parse OpenAI response: {}", e)))?;

        if let Some(error) = data.get("error") {
            let message = error["message"].as_str().unwrap_or("Unknown");
            return Err(GitGradeError::Generation(format!(
                "HTTP {}: {}",
                status.as_u16(),
                truncate_error(message)
            )));
        }
        if !status.is_success() {
            return Err(GitGradeError::Generation(format!("HTTP {}", status.as_u16())));
        }

        let content = data["choices"][0]["message"]["content"].as_str()
            .ok_or_else(|| GitGradeError::Generation("No content in OpenAI response".into()))?
            .to_string();
        let input_tokens = data["usage"]["prompt_tokens"].as_u64();
        let output_tokens = data["usage"]["completion_tokens"].as_u64();

        Ok(LLMResponse {
            content,
            input_tokens,
            output_tokens,
            model: self.model.clone(),
        })
    }

    fn provider_name(&self) -> &str { "openai" }
    fn model_name(&self) -> &str { &self.model }
}
