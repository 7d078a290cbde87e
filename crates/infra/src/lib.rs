//! # Recruitbot Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - Google Calendar client (`CalendarPort` adapter)
//! - Gemini text generation client (`GenerationPort` adapter)
//! - OAuth token lifecycle (keyring-backed store, refresh state machine)
//! - Configuration loader (environment first, file fallback)
//!
//! ## Architecture
//! - Implements traits defined in `recruitbot-core`
//! - Depends on `recruitbot-domain` and `recruitbot-core`
//! - Contains all "impure" code (HTTP, credential storage)

pub mod auth;
pub mod config;
pub mod errors;
pub mod integrations;

// Re-export commonly used items
pub use auth::{
    AccessTokenProvider, GoogleOAuthClient, KeyringTokenStore, MemoryTokenStore, TokenManager,
    TokenSet, TokenState, TokenStorage,
};
pub use errors::InfraError;
pub use integrations::gemini::GeminiClient;
pub use integrations::google::GoogleCalendarClient;
