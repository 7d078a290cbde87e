//! Extraction of explicit meeting times from message text
//!
//! Recruiters often name a concrete time ("удобно в 15:00?", "давайте в 14
//! часов"). When we can parse one, the assistant checks that exact window
//! before proposing alternatives.

use chrono::NaiveTime;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches "в 15:00", "в 15-30" and "14 часов" forms
    static ref TIME_RE: Regex =
        Regex::new(r"в (\d{1,2}[:\-]\d{2})|(\d{1,2}) часов").unwrap();
}

/// Extract a proposed time of day from the message, if present.
///
/// Invalid clock values (e.g. "25:70") yield `None` rather than an error;
/// the caller falls back to the normal slot search.
pub fn parse_message_time(message: &str) -> Option<NaiveTime> {
    let caps = TIME_RE.captures(message)?;

    if let Some(clock) = caps.get(1) {
        let cleaned = clock.as_str().replace('-', ":");
        return NaiveTime::parse_from_str(&cleaned, "%H:%M").ok();
    }

    let hour: u32 = caps.get(2)?.as_str().parse().ok()?;
    NaiveTime::from_hms_opt(hour, 0, 0)
}
