//! Google OAuth 2.0 code exchange and refresh

use recruitbot_domain::{RecruitbotError, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::errors::InfraError;

use super::types::TokenSet;

const GOOGLE_AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const CALENDAR_SCOPE: &str = "https://www.googleapis.com/auth/calendar";

/// Loopback redirect for the copy-paste login flow.
const REDIRECT_URI: &str = "http://localhost";

#[derive(Debug, Deserialize)]
struct TokenEndpointResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    expires_in: i64,
}

/// Client for Google's OAuth token endpoint.
pub struct GoogleOAuthClient {
    http: Client,
    client_id: String,
    client_secret: Option<String>,
    token_endpoint: String,
}

impl GoogleOAuthClient {
    pub fn new(client_id: impl Into<String>, client_secret: Option<String>) -> Self {
        Self {
            http: Client::new(),
            client_id: client_id.into(),
            client_secret,
            token_endpoint: GOOGLE_TOKEN_ENDPOINT.to_string(),
        }
    }

    /// Overrides the token endpoint (for tests).
    #[cfg(test)]
    pub(crate) fn with_token_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.token_endpoint = endpoint.into();
        self
    }

    /// URL the user opens in a browser to grant calendar access.
    ///
    /// `access_type=offline` with `prompt=consent` makes Google return a
    /// refresh token on every grant, not only the first one.
    pub fn authorization_url(&self) -> Result<String> {
        let mut url = Url::parse(GOOGLE_AUTH_ENDPOINT)
            .map_err(|e| RecruitbotError::Internal(format!("invalid auth endpoint: {e}")))?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", REDIRECT_URI)
            .append_pair("response_type", "code")
            .append_pair("scope", CALENDAR_SCOPE)
            .append_pair("access_type", "offline")
            .append_pair("prompt", "consent");
        Ok(url.into())
    }

    /// Exchanges an authorization code for the initial token set.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenSet> {
        let mut form = vec![
            ("client_id", self.client_id.as_str()),
            ("code", code),
            ("grant_type", "authorization_code"),
            ("redirect_uri", REDIRECT_URI),
        ];
        if let Some(secret) = &self.client_secret {
            form.push(("client_secret", secret.as_str()));
        }
        self.request_tokens(&form).await
    }

    /// Trades a refresh token for a fresh access token.
    ///
    /// Google usually omits `refresh_token` from refresh responses; the
    /// caller is responsible for carrying the old one forward.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<TokenSet> {
        let mut form = vec![
            ("client_id", self.client_id.as_str()),
            ("refresh_token", refresh_token),
            ("grant_type", "refresh_token"),
        ];
        if let Some(secret) = &self.client_secret {
            form.push(("client_secret", secret.as_str()));
        }
        self.request_tokens(&form).await
    }

    async fn request_tokens(&self, form: &[(&str, &str)]) -> Result<TokenSet> {
        let response = self
            .http
            .post(&self.token_endpoint)
            .form(form)
            .send()
            .await
            .map_err(InfraError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(RecruitbotError::Auth(format!(
                "token request failed ({status}): {body}"
            )));
        }

        let payload: TokenEndpointResponse = response
            .json()
            .await
            .map_err(|e| RecruitbotError::Auth(format!("malformed token response: {e}")))?;
        debug!(expires_in = payload.expires_in, "received tokens from Google");

        Ok(TokenSet::new(
            payload.access_token,
            payload.refresh_token,
            payload.expires_in,
        ))
    }
}
