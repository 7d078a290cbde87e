//! Gemini text generation adapter

mod client;
mod types;

pub use client::GeminiClient;
pub use types::GeminiError;
