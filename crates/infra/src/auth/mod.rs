//! Google OAuth token lifecycle
//!
//! Tokens are obtained once through the interactive login flow, persisted in
//! the OS keychain, and refreshed transparently when they expire. Callers that
//! need a bearer token go through [`AccessTokenProvider`] and never touch the
//! refresh machinery directly.

mod oauth;
mod store;
mod token_manager;
mod types;

use async_trait::async_trait;
use recruitbot_domain::Result;

pub use oauth::GoogleOAuthClient;
pub use store::{KeyringTokenStore, MemoryTokenStore, TokenStorage};
pub use token_manager::TokenManager;
pub use types::{TokenSet, TokenState};

/// Source of a valid bearer token for Google API calls.
///
/// Implemented by [`TokenManager`]; tests substitute a static provider.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Returns an access token that is valid right now, refreshing if needed.
    async fn access_token(&self) -> Result<String>;
}
