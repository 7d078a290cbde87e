//! Configuration loader: environment first, config file fallback
//!
//! The environment path needs `GEMINI_API_KEY` and `GOOGLE_CLIENT_ID`; all
//! other variables override defaults. When neither is set, the loader probes
//! for a `recruitbot.toml` / `recruitbot.json` next to the binary.

use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use recruitbot_domain::constants;
use recruitbot_domain::{
    CalendarConfig, Config, GenerationConfig, RecruitbotError, Result, SchedulingConfig,
    ServerConfig,
};
use tracing::{debug, info};

const CONFIG_FILE_CANDIDATES: &[&str] = &[
    "recruitbot.toml",
    "recruitbot.json",
    "config.toml",
    "config.json",
];

/// Loads configuration from the environment, falling back to a config file.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            info!("configuration loaded from environment");
            Ok(config)
        }
        Err(env_err) => match find_config_file() {
            Some(path) => {
                info!(path = %path.display(), "configuration loaded from file");
                load_from_file(&path)
            }
            None => Err(env_err),
        },
    }
}

fn load_from_env() -> Result<Config> {
    let api_key = require_env("GEMINI_API_KEY")?;
    let client_id = require_env("GOOGLE_CLIENT_ID")?;

    let mut scheduling = SchedulingConfig::default();
    if let Some(minutes) = optional_parsed("RECRUITBOT_SLOT_DURATION_MINUTES")? {
        scheduling.slot_duration_minutes = minutes;
    }
    if let Some(max) = optional_parsed("RECRUITBOT_MAX_SLOTS")? {
        scheduling.max_slot_results = max;
    }
    if let Some(days) = optional_parsed("RECRUITBOT_SEARCH_DAYS")? {
        scheduling.search_days = days;
    }
    if let Some(hour) = optional_parsed("RECRUITBOT_WORKDAY_START_HOUR")? {
        scheduling.workday_start_hour = hour;
    }
    if let Some(hour) = optional_parsed("RECRUITBOT_WORKDAY_END_HOUR")? {
        scheduling.workday_end_hour = hour;
    }

    let calendar = CalendarConfig {
        client_id,
        client_secret: optional_env("GOOGLE_CLIENT_SECRET"),
        calendar_id: optional_env("RECRUITBOT_CALENDAR_ID")
            .unwrap_or_else(|| "primary".to_string()),
        time_zone: optional_env("RECRUITBOT_TIME_ZONE")
            .unwrap_or_else(|| constants::DEFAULT_TIME_ZONE.to_string()),
        account_name: optional_env("RECRUITBOT_ACCOUNT").unwrap_or_else(|| "main".to_string()),
    };

    let generation = GenerationConfig {
        api_key,
        model: optional_env("GEMINI_MODEL")
            .unwrap_or_else(|| constants::DEFAULT_GENERATION_MODEL.to_string()),
    };

    let mut server = ServerConfig::default();
    if let Some(addr) = optional_env("RECRUITBOT_BIND_ADDR") {
        server.bind_addr = addr;
    }

    Ok(Config {
        calendar,
        generation,
        scheduling,
        server,
    })
}

/// Parses a config file, dispatching on its extension.
pub fn load_from_file(path: &Path) -> Result<Config> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        RecruitbotError::Config(format!("cannot read {}: {e}", path.display()))
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&raw)
            .map_err(|e| RecruitbotError::Config(format!("invalid TOML config: {e}"))),
        Some("json") => serde_json::from_str(&raw)
            .map_err(|e| RecruitbotError::Config(format!("invalid JSON config: {e}"))),
        _ => Err(RecruitbotError::Config(format!(
            "unsupported config format: {}",
            path.display()
        ))),
    }
}

fn find_config_file() -> Option<PathBuf> {
    let mut dirs = vec![PathBuf::from(".")];
    if let Ok(exe) = env::current_exe() {
        if let Some(dir) = exe.parent() {
            dirs.push(dir.to_path_buf());
        }
    }
    for dir in dirs {
        for name in CONFIG_FILE_CANDIDATES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                debug!(path = %candidate.display(), "found config file");
                return Some(candidate);
            }
        }
    }
    None
}

fn require_env(name: &str) -> Result<String> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| RecruitbotError::Config(format!("{name} is not set")))
}

fn optional_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn optional_parsed<T: FromStr>(name: &str) -> Result<Option<T>> {
    match optional_env(name) {
        None => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(|_| {
            RecruitbotError::Config(format!("{name} has an invalid value: {raw:?}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_config(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_toml_config_with_defaults() {
        let file = temp_config(
            ".toml",
            r#"
[calendar]
client_id = "client-id"

[generation]
api_key = "gemini-key"
"#,
        );

        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.calendar.client_id, "client-id");
        assert_eq!(config.calendar.calendar_id, "primary");
        assert_eq!(config.calendar.time_zone, "Europe/Moscow");
        assert_eq!(config.generation.model, "gemini-2.5-pro");
        assert_eq!(config.scheduling.slot_duration_minutes, 30);
        assert_eq!(config.server.bind_addr, "127.0.0.1:8080");
    }

    #[test]
    fn loads_json_config_with_overrides() {
        let file = temp_config(
            ".json",
            r#"{
                "calendar": {"client_id": "id", "time_zone": "Europe/Berlin"},
                "generation": {"api_key": "key", "model": "gemini-2.0-flash"},
                "scheduling": {"slot_duration_minutes": 45},
                "server": {"bind_addr": "0.0.0.0:9000"}
            }"#,
        );

        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.calendar.time_zone, "Europe/Berlin");
        assert_eq!(config.generation.model, "gemini-2.0-flash");
        assert_eq!(config.scheduling.slot_duration_minutes, 45);
        assert_eq!(config.server.bind_addr, "0.0.0.0:9000");
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = temp_config(".yaml", "calendar:\n");
        let err = load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, RecruitbotError::Config(_)));
    }

    #[test]
    fn rejects_missing_required_fields() {
        let file = temp_config(".toml", "[generation]\napi_key = \"key\"\n");
        let err = load_from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("invalid TOML"));
    }
}
