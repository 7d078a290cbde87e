//! Application configuration structures
//!
//! Configuration is loaded once at startup (environment first, file
//! fallback) and passed into constructors explicitly. No component reads
//! ambient global state.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub calendar: CalendarConfig,
    pub generation: GenerationConfig,
    #[serde(default)]
    pub scheduling: SchedulingConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Google Calendar access configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarConfig {
    pub client_id: String,
    #[serde(default)]
    pub client_secret: Option<String>,
    /// Calendar to query and write ("primary" by default)
    #[serde(default = "default_calendar_id")]
    pub calendar_id: String,
    /// IANA time zone for event creation and slot presentation
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    /// Keyring account the OAuth tokens are stored under
    #[serde(default = "default_account_name")]
    pub account_name: String,
}

/// Text generation backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
}

/// Slot search parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingConfig {
    #[serde(default = "default_slot_duration")]
    pub slot_duration_minutes: i64,
    #[serde(default = "default_max_results")]
    pub max_slot_results: usize,
    #[serde(default = "default_search_days")]
    pub search_days: i64,
    #[serde(default = "default_workday_start")]
    pub workday_start_hour: u32,
    #[serde(default = "default_workday_end")]
    pub workday_end_hour: u32,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            slot_duration_minutes: constants::DEFAULT_SLOT_DURATION_MINUTES,
            max_slot_results: constants::DEFAULT_MAX_SLOT_RESULTS,
            search_days: constants::DEFAULT_SEARCH_DAYS,
            workday_start_hour: constants::DEFAULT_WORKDAY_START_HOUR,
            workday_end_hour: constants::DEFAULT_WORKDAY_END_HOUR,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: default_bind_addr() }
    }
}

fn default_calendar_id() -> String {
    "primary".to_string()
}

fn default_time_zone() -> String {
    constants::DEFAULT_TIME_ZONE.to_string()
}

fn default_account_name() -> String {
    "main".to_string()
}

fn default_model() -> String {
    constants::DEFAULT_GENERATION_MODEL.to_string()
}

fn default_slot_duration() -> i64 {
    constants::DEFAULT_SLOT_DURATION_MINUTES
}

fn default_max_results() -> usize {
    constants::DEFAULT_MAX_SLOT_RESULTS
}

fn default_search_days() -> i64 {
    constants::DEFAULT_SEARCH_DAYS
}

fn default_workday_start() -> u32 {
    constants::DEFAULT_WORKDAY_START_HOUR
}

fn default_workday_end() -> u32 {
    constants::DEFAULT_WORKDAY_END_HOUR
}

fn default_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_config_defaults_to_loopback() {
        assert_eq!(ServerConfig::default().bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn server_config_deserializes_with_defaulted_bind_addr() {
        let server: ServerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(server.bind_addr, "127.0.0.1:8080");
    }
}
