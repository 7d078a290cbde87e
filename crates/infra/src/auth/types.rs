//! Token data shared across the auth module

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Refresh when less than this many seconds of validity remain.
pub(crate) const REFRESH_THRESHOLD_SECONDS: i64 = 60;

/// An OAuth token pair with its absolute expiry time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    /// Absent when Google did not grant offline access.
    pub refresh_token: Option<String>,
    /// Unix timestamp (seconds) after which the access token is invalid.
    pub expires_at: i64,
}

impl TokenSet {
    /// Builds a token set from a token endpoint response, converting the
    /// relative `expires_in` into an absolute timestamp.
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: Option<String>,
        expires_in_seconds: i64,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token,
            expires_at: Utc::now().timestamp() + expires_in_seconds,
        }
    }

    pub fn seconds_until_expiry(&self) -> i64 {
        self.expires_at - Utc::now().timestamp()
    }

    /// True once the token is within the refresh threshold of expiring.
    pub fn is_expired(&self) -> bool {
        self.seconds_until_expiry() <= REFRESH_THRESHOLD_SECONDS
    }
}

/// Where the stored credentials currently stand.
///
/// `Expired` only means the access token needs a refresh; whether that can
/// succeed depends on a refresh token being present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenState {
    /// No credentials stored; the interactive login has not run.
    NoToken,
    /// Credentials exist but the access token is past (or near) expiry.
    Expired,
    /// The access token can be used as-is.
    Valid,
}
