//! Token state machine and transparent refresh

use std::sync::Arc;

use async_trait::async_trait;
use recruitbot_domain::{RecruitbotError, Result};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::oauth::GoogleOAuthClient;
use super::store::TokenStorage;
use super::types::{TokenSet, TokenState};
use super::AccessTokenProvider;

/// Owns the cached token set and drives it through the
/// `NoToken -> Valid -> Expired -> Valid` lifecycle.
///
/// The only transition out of `NoToken` is the interactive login; everything
/// else happens inside [`TokenManager::get_access_token`].
pub struct TokenManager {
    oauth: GoogleOAuthClient,
    store: Arc<dyn TokenStorage>,
    account: String,
    current: RwLock<Option<TokenSet>>,
}

impl TokenManager {
    pub fn new(
        oauth: GoogleOAuthClient,
        store: Arc<dyn TokenStorage>,
        account: impl Into<String>,
    ) -> Self {
        Self {
            oauth,
            store,
            account: account.into(),
            current: RwLock::new(None),
        }
    }

    /// Loads persisted tokens into the cache. Returns whether any were found.
    pub async fn initialize(&self) -> Result<bool> {
        let stored = self.store.load(&self.account)?;
        let found = stored.is_some();
        if found {
            debug!(account = %self.account, "loaded stored tokens");
        } else {
            info!(account = %self.account, "no stored tokens; login required");
        }
        *self.current.write().await = stored;
        Ok(found)
    }

    pub async fn state(&self) -> TokenState {
        match self.current.read().await.as_ref() {
            None => TokenState::NoToken,
            Some(tokens) if tokens.is_expired() => TokenState::Expired,
            Some(_) => TokenState::Valid,
        }
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state().await != TokenState::NoToken
    }

    /// Caches and persists a freshly obtained token set.
    pub async fn store_tokens(&self, tokens: TokenSet) -> Result<()> {
        self.store.save(&self.account, &tokens)?;
        *self.current.write().await = Some(tokens);
        Ok(())
    }

    /// Drops cached and persisted tokens, returning to `NoToken`.
    pub async fn clear_tokens(&self) -> Result<()> {
        self.store.clear(&self.account)?;
        *self.current.write().await = None;
        info!(account = %self.account, "cleared stored tokens");
        Ok(())
    }

    /// Returns a usable access token, refreshing first when expired.
    pub async fn get_access_token(&self) -> Result<String> {
        match self.state().await {
            TokenState::Valid => self.current_access_token().await,
            TokenState::Expired => {
                self.refresh().await?;
                self.current_access_token().await
            }
            TokenState::NoToken => Err(RecruitbotError::Auth(
                "not authenticated; run the login command first".to_string(),
            )),
        }
    }

    async fn current_access_token(&self) -> Result<String> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|tokens| tokens.access_token.clone())
            .ok_or_else(|| RecruitbotError::Auth("token cache is empty".to_string()))
    }

    async fn refresh(&self) -> Result<()> {
        let refresh_token = self
            .current
            .read()
            .await
            .as_ref()
            .and_then(|tokens| tokens.refresh_token.clone())
            .ok_or_else(|| {
                RecruitbotError::Auth(
                    "access token expired and no refresh token is stored; log in again"
                        .to_string(),
                )
            })?;

        debug!(account = %self.account, "refreshing expired access token");
        let mut renewed = match self.oauth.refresh_access_token(&refresh_token).await {
            Ok(tokens) => tokens,
            Err(err) => {
                warn!(account = %self.account, error = %err, "token refresh failed");
                return Err(err);
            }
        };
        // Google omits the refresh token from refresh responses.
        if renewed.refresh_token.is_none() {
            renewed.refresh_token = Some(refresh_token);
        }
        self.store_tokens(renewed).await
    }
}

#[async_trait]
impl AccessTokenProvider for TokenManager {
    async fn access_token(&self) -> Result<String> {
        self.get_access_token().await
    }
}
