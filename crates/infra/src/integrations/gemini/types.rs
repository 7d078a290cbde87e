//! Wire types and errors for the Gemini generateContent API

use recruitbot_domain::RecruitbotError;
use serde::{Deserialize, Serialize};

/// Errors from the Gemini API, kept separate from domain errors so the
/// client can distinguish quota exhaustion from schema drift before the
/// caller collapses them into a generic reply.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limit exceeded (retry after {0}s)")]
    RateLimit(u64),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Invalid response schema: {0}")]
    InvalidSchema(String),
}

impl From<GeminiError> for RecruitbotError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::Authentication(msg) => RecruitbotError::Auth(msg),
            GeminiError::Network(msg) => RecruitbotError::Network(msg),
            other => RecruitbotError::Generation(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    pub fn single_turn(text: &str) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Part {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Content,
}
