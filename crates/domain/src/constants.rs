//! Domain constants and defaults

/// Default interview slot length
pub const DEFAULT_SLOT_DURATION_MINUTES: i64 = 30;

/// Default number of free slots offered to the recruiter
pub const DEFAULT_MAX_SLOT_RESULTS: usize = 3;

/// Default search horizon when looking for free slots
pub const DEFAULT_SEARCH_DAYS: i64 = 7;

/// Working hours used to anchor the slot search
pub const DEFAULT_WORKDAY_START_HOUR: u32 = 10;
pub const DEFAULT_WORKDAY_END_HOUR: u32 = 18;

/// Calendar event reminder overrides (Google wire contract)
pub const REMINDER_EMAIL_MINUTES: u32 = 24 * 60;
pub const REMINDER_POPUP_MINUTES: u32 = 30;

/// Default IANA time zone for event creation and slot presentation
pub const DEFAULT_TIME_ZONE: &str = "Europe/Moscow";

/// Default generation model handle
pub const DEFAULT_GENERATION_MODEL: &str = "gemini-2.5-pro";
