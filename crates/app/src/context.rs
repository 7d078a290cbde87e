//! Application context - dependency wiring

use std::sync::Arc;

use chrono_tz::Tz;
use recruitbot_core::{AssistantService, CalendarPort, GenerationPort, KeywordClassifier};
use recruitbot_domain::{Config, RecruitbotError, Result};
use recruitbot_infra::{
    GeminiClient, GoogleCalendarClient, GoogleOAuthClient, KeyringTokenStore, TokenManager,
};
use tracing::info;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub assistant: Arc<AssistantService>,
    pub calendar: Arc<dyn CalendarPort>,
}

impl AppContext {
    /// Wires the production adapters: keyring-backed tokens, Google
    /// Calendar, and Gemini.
    pub async fn new(config: Config) -> Result<Self> {
        // Fail fast on a bad time zone before touching the keychain.
        parse_time_zone(&config.calendar.time_zone)?;

        let oauth = GoogleOAuthClient::new(
            config.calendar.client_id.clone(),
            config.calendar.client_secret.clone(),
        );
        let tokens = Arc::new(TokenManager::new(
            oauth,
            Arc::new(KeyringTokenStore),
            config.calendar.account_name.clone(),
        ));
        if !tokens.initialize().await? {
            info!("no stored Google tokens; calendar calls will fail until login");
        }

        let calendar: Arc<dyn CalendarPort> =
            Arc::new(GoogleCalendarClient::new(tokens, &config.calendar));
        let generator: Arc<dyn GenerationPort> = Arc::new(GeminiClient::new(&config.generation));
        Self::with_ports(config, calendar, generator)
    }

    /// Builds a context around externally supplied ports (used by tests).
    pub fn with_ports(
        config: Config,
        calendar: Arc<dyn CalendarPort>,
        generator: Arc<dyn GenerationPort>,
    ) -> Result<Self> {
        let tz = parse_time_zone(&config.calendar.time_zone)?;
        let assistant = Arc::new(AssistantService::new(
            Arc::new(KeywordClassifier::default()),
            calendar.clone(),
            generator,
            config.scheduling.clone(),
            tz,
        ));
        Ok(Self {
            config: Arc::new(config),
            assistant,
            calendar,
        })
    }
}

fn parse_time_zone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| RecruitbotError::Config(format!("invalid time zone: {name:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_time_zone() {
        let err = parse_time_zone("Mars/Olympus").unwrap_err();
        assert!(matches!(err, RecruitbotError::Config(_)));
    }

    #[test]
    fn parses_iana_time_zone() {
        assert_eq!(parse_time_zone("Europe/Moscow").unwrap(), Tz::Europe__Moscow);
    }
}
