//! Conversions from third-party error types into domain errors.
//!
//! The domain crate must stay free of infrastructure dependencies, so the
//! `From` impls live here behind a newtype wrapper.

use keyring::Error as KeyringError;
use recruitbot_domain::RecruitbotError;
use reqwest::Error as HttpError;

/// Wrapper that carries a domain error across the orphan-rule boundary.
///
/// Functions in this crate return `recruitbot_domain::Result`; call sites
/// convert external errors with `.map_err(InfraError::from)?`.
#[derive(Debug)]
pub struct InfraError(pub RecruitbotError);

impl From<InfraError> for RecruitbotError {
    fn from(err: InfraError) -> Self {
        err.0
    }
}

impl From<HttpError> for InfraError {
    fn from(err: HttpError) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else if err.is_decode() {
            format!("failed to decode response body: {err}")
        } else {
            format!("http request failed: {err}")
        };
        InfraError(RecruitbotError::Network(message))
    }
}

impl From<KeyringError> for InfraError {
    fn from(err: KeyringError) -> Self {
        let domain = match err {
            KeyringError::NoEntry => {
                RecruitbotError::NotFound("no stored credentials in the keychain".to_string())
            }
            KeyringError::BadEncoding(_) => {
                RecruitbotError::Auth("stored credentials are not valid UTF-8".to_string())
            }
            other => RecruitbotError::Auth(format!("keychain access failed: {other}")),
        };
        InfraError(domain)
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(err: serde_json::Error) -> Self {
        InfraError(RecruitbotError::Internal(format!(
            "serialization failed: {err}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keychain_entry_maps_to_not_found() {
        let err: RecruitbotError = InfraError::from(KeyringError::NoEntry).into();
        assert!(matches!(err, RecruitbotError::NotFound(_)));
    }

    #[test]
    fn other_keychain_errors_map_to_auth() {
        let err: RecruitbotError = InfraError::from(KeyringError::Invalid(
            "attribute".to_string(),
            "bad".to_string(),
        ))
        .into();
        assert!(matches!(err, RecruitbotError::Auth(_)));
    }

    #[test]
    fn json_errors_map_to_internal() {
        let bad = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RecruitbotError = InfraError::from(bad).into();
        assert!(matches!(err, RecruitbotError::Internal(_)));
    }
}
