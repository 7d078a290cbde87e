//! Wire types for the Google Calendar v3 events API

use recruitbot_domain::constants::{REMINDER_EMAIL_MINUTES, REMINDER_POPUP_MINUTES};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct EventsListResponse {
    #[serde(default)]
    pub items: Vec<CalendarEvent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CalendarEvent {
    pub start: EventDateTime,
    pub end: EventDateTime,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Either a timed event (`dateTime`) or an all-day event (`date`).
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct EventDateTime {
    #[serde(rename = "dateTime", skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "timeZone", skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl EventDateTime {
    pub fn timed(date_time: String, time_zone: String) -> Self {
        Self {
            date_time: Some(date_time),
            date: None,
            time_zone: Some(time_zone),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct EventResource {
    pub summary: String,
    pub description: String,
    pub start: EventDateTime,
    pub end: EventDateTime,
    pub attendees: Vec<EventAttendee>,
    pub reminders: EventReminders,
}

#[derive(Debug, Serialize)]
pub(crate) struct EventAttendee {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct EventReminders {
    #[serde(rename = "useDefault")]
    pub use_default: bool,
    pub overrides: Vec<ReminderOverride>,
}

impl EventReminders {
    /// Email a day ahead, popup half an hour ahead.
    pub fn interview_defaults() -> Self {
        Self {
            use_default: false,
            overrides: vec![
                ReminderOverride {
                    method: "email",
                    minutes: REMINDER_EMAIL_MINUTES,
                },
                ReminderOverride {
                    method: "popup",
                    minutes: REMINDER_POPUP_MINUTES,
                },
            ],
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReminderOverride {
    pub method: &'static str,
    pub minutes: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedEvent {
    pub id: String,
}
