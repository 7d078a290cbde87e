//! Gemini client implementing the core generation port

use async_trait::async_trait;
use recruitbot_core::GenerationPort;
use recruitbot_domain::{GenerationConfig, GenerationPrompt, RecruitbotError, Result};
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::types::{GeminiError, GenerateContentRequest, GenerateContentResponse};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Text generation adapter for Google's Gemini API.
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            http: Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            api_base: GEMINI_API_BASE.to_string(),
        }
    }

    /// Overrides the API base URL (for tests).
    #[cfg(test)]
    pub(crate) fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    async fn call_api(&self, prompt: &str) -> std::result::Result<String, GeminiError> {
        let url = format!("{}/models/{}:generateContent", self.api_base, self.model);
        let request = GenerateContentRequest::single_turn(prompt);

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| GeminiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    GeminiError::Authentication(body)
                }
                StatusCode::TOO_MANY_REQUESTS => GeminiError::RateLimit(60),
                _ => GeminiError::Api {
                    status: status.as_u16(),
                    message: body,
                },
            });
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::InvalidSchema(e.to_string()))?;

        let text = payload
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .ok_or_else(|| GeminiError::InvalidSchema("response contained no text".to_string()))?;

        if text.trim().is_empty() {
            return Err(GeminiError::InvalidSchema(
                "response text was empty".to_string(),
            ));
        }
        Ok(text)
    }
}

#[async_trait]
impl GenerationPort for GeminiClient {
    async fn generate(&self, prompt: &GenerationPrompt) -> Result<String> {
        debug!(model = %self.model, "requesting generated reply");
        self.call_api(prompt.as_str()).await.map_err(|err| {
            warn!(model = %self.model, error = %err, "generation request failed");
            RecruitbotError::from(err)
        })
    }
}
