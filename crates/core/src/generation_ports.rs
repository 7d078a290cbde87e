//! Text generation port interface

use async_trait::async_trait;
use recruitbot_domain::{GenerationPrompt, Result};

/// Trait for the remote text generation backend
#[async_trait]
pub trait GenerationPort: Send + Sync {
    /// Produce reply text for the given prompt
    ///
    /// Must fail with a distinguishable error (auth, quota, network) rather
    /// than silently returning empty text.
    async fn generate(&self, prompt: &GenerationPrompt) -> Result<String>;
}
