//! Google Calendar v3 client implementing the core calendar port

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use recruitbot_core::CalendarPort;
use recruitbot_domain::{BusyInterval, CalendarConfig, RecruitbotError, Result, TimeWindow};
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, info, warn};

use crate::auth::AccessTokenProvider;
use crate::errors::InfraError;

use super::types::{
    CalendarEvent, CreatedEvent, EventAttendee, EventDateTime, EventReminders, EventResource,
    EventsListResponse,
};

const GOOGLE_CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Calendar adapter speaking to the Google Calendar events API.
pub struct GoogleCalendarClient {
    http: Client,
    tokens: Arc<dyn AccessTokenProvider>,
    calendar_id: String,
    time_zone: String,
    api_base: String,
}

impl GoogleCalendarClient {
    pub fn new(tokens: Arc<dyn AccessTokenProvider>, config: &CalendarConfig) -> Self {
        Self {
            http: Client::new(),
            tokens,
            calendar_id: config.calendar_id.clone(),
            time_zone: config.time_zone.clone(),
            api_base: GOOGLE_CALENDAR_API_BASE.to_string(),
        }
    }

    /// Overrides the API base URL (for tests).
    #[cfg(test)]
    pub(crate) fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    fn events_url(&self) -> String {
        format!("{}/calendars/{}/events", self.api_base, self.calendar_id)
    }

    async fn api_error(context: &str, response: Response) -> RecruitbotError {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                RecruitbotError::Auth(format!("{context} rejected ({status}): {body}"))
            }
            _ => RecruitbotError::Calendar(format!("{context} failed ({status}): {body}")),
        }
    }

    fn event_interval(event: &CalendarEvent) -> Result<Option<BusyInterval>> {
        let (Some(start), Some(end)) = (&event.start.date_time, &event.end.date_time) else {
            // All-day events carry `date` instead of `dateTime`; they do not
            // block interview slots.
            debug!(summary = ?event.summary, "skipping all-day event");
            return Ok(None);
        };
        Ok(Some(BusyInterval {
            start: parse_event_timestamp(start)?,
            end: parse_event_timestamp(end)?,
        }))
    }
}

/// Parses an RFC 3339 event timestamp into UTC.
///
/// Google emits both `Z` and numeric offsets; a trailing `Z` is normalized
/// to `+00:00` so the two forms compare equal after parsing.
fn parse_event_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let normalized = if let Some(stripped) = raw.strip_suffix('Z') {
        format!("{stripped}+00:00")
    } else {
        raw.to_string()
    };
    DateTime::parse_from_rfc3339(&normalized)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RecruitbotError::Calendar(format!("malformed event timestamp {raw:?}: {e}")))
}

#[async_trait]
impl CalendarPort for GoogleCalendarClient {
    async fn list_busy_intervals(&self, window: &TimeWindow) -> Result<Vec<BusyInterval>> {
        let token = self.tokens.access_token().await?;
        let response = self
            .http
            .get(self.events_url())
            .bearer_auth(&token)
            .query(&[
                ("timeMin", window.start.to_rfc3339()),
                ("timeMax", window.end.to_rfc3339()),
                ("singleEvents", "true".to_string()),
                ("orderBy", "startTime".to_string()),
            ])
            .send()
            .await
            .map_err(InfraError::from)?;

        if !response.status().is_success() {
            let err = Self::api_error("events list", response).await;
            warn!(calendar = %self.calendar_id, error = %err, "calendar lookup failed");
            return Err(err);
        }

        let payload: EventsListResponse = response
            .json()
            .await
            .map_err(|e| RecruitbotError::Calendar(format!("malformed events response: {e}")))?;

        let mut intervals = Vec::with_capacity(payload.items.len());
        for event in &payload.items {
            if let Some(interval) = Self::event_interval(event)? {
                intervals.push(interval);
            }
        }
        debug!(
            calendar = %self.calendar_id,
            events = payload.items.len(),
            busy = intervals.len(),
            "fetched calendar events"
        );
        Ok(intervals)
    }

    async fn create_event(
        &self,
        window: &TimeWindow,
        title: &str,
        description: &str,
        attendees: &[String],
    ) -> Result<String> {
        let token = self.tokens.access_token().await?;
        let body = EventResource {
            summary: title.to_string(),
            description: description.to_string(),
            start: EventDateTime::timed(window.start.to_rfc3339(), self.time_zone.clone()),
            end: EventDateTime::timed(window.end.to_rfc3339(), self.time_zone.clone()),
            attendees: attendees
                .iter()
                .map(|email| EventAttendee {
                    email: email.clone(),
                })
                .collect(),
            reminders: EventReminders::interview_defaults(),
        };

        let response = self
            .http
            .post(self.events_url())
            .bearer_auth(&token)
            .json(&body)
            .send()
            .await
            .map_err(InfraError::from)?;

        if !response.status().is_success() {
            let err = Self::api_error("event creation", response).await;
            warn!(calendar = %self.calendar_id, error = %err, "event creation failed");
            return Err(err);
        }

        let created: CreatedEvent = response
            .json()
            .await
            .map_err(|e| RecruitbotError::Calendar(format!("malformed created event: {e}")))?;
        info!(event_id = %created.id, "created calendar event");
        Ok(created.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recruitbot_domain::constants::DEFAULT_TIME_ZONE;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct StaticTokenProvider(&'static str);

    #[async_trait]
    impl AccessTokenProvider for StaticTokenProvider {
        async fn access_token(&self) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    fn client(server: &MockServer) -> GoogleCalendarClient {
        let config = CalendarConfig {
            client_id: "client-id".to_string(),
            client_secret: None,
            calendar_id: "primary".to_string(),
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            account_name: "main".to_string(),
        };
        GoogleCalendarClient::new(Arc::new(StaticTokenProvider("token-1")), &config)
            .with_api_base(server.uri())
    }

    fn window() -> TimeWindow {
        TimeWindow::new(
            "2026-09-01T07:00:00Z".parse().unwrap(),
            "2026-09-08T15:00:00Z".parse().unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn lists_busy_intervals_from_timed_events() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendars/primary/events"))
            .and(query_param("singleEvents", "true"))
            .and(query_param("orderBy", "startTime"))
            .and(header("authorization", "Bearer token-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {
                        "summary": "Standup",
                        "start": {"dateTime": "2026-09-01T07:00:00Z"},
                        "end": {"dateTime": "2026-09-01T07:30:00+00:00"}
                    },
                    {
                        "summary": "Vacation",
                        "start": {"date": "2026-09-02"},
                        "end": {"date": "2026-09-03"}
                    },
                    {
                        "summary": "1:1",
                        "start": {"dateTime": "2026-09-01T12:00:00+03:00"},
                        "end": {"dateTime": "2026-09-01T13:00:00+03:00"}
                    }
                ]
            })))
            .mount(&server)
            .await;

        let busy = client(&server).list_busy_intervals(&window()).await.unwrap();

        // The all-day event is skipped; offsets are normalized to UTC.
        assert_eq!(busy.len(), 2);
        assert_eq!(busy[0].start, "2026-09-01T07:00:00Z".parse::<DateTime<Utc>>().unwrap());
        assert_eq!(busy[0].end, "2026-09-01T07:30:00Z".parse::<DateTime<Utc>>().unwrap());
        assert_eq!(busy[1].start, "2026-09-01T09:00:00Z".parse::<DateTime<Utc>>().unwrap());
    }

    #[tokio::test]
    async fn unauthorized_list_maps_to_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendars/primary/events"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"error": "invalid token"})),
            )
            .mount(&server)
            .await;

        let err = client(&server).list_busy_intervals(&window()).await.unwrap_err();
        assert!(matches!(err, RecruitbotError::Auth(_)));
    }

    #[tokio::test]
    async fn server_failure_maps_to_calendar_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/calendars/primary/events"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client(&server).list_busy_intervals(&window()).await.unwrap_err();
        assert!(matches!(err, RecruitbotError::Calendar(_)));
    }

    #[tokio::test]
    async fn creates_event_with_reminder_overrides() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/calendars/primary/events"))
            .and(header("authorization", "Bearer token-1"))
            .and(body_partial_json(json!({
                "summary": "Собеседование",
                "start": {"timeZone": "Europe/Moscow"},
                "attendees": [{"email": "hr@example.com"}],
                "reminders": {
                    "useDefault": false,
                    "overrides": [
                        {"method": "email", "minutes": 1440},
                        {"method": "popup", "minutes": 30}
                    ]
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "evt-42"})))
            .mount(&server)
            .await;

        let slot = TimeWindow::new(
            "2026-09-02T07:00:00Z".parse().unwrap(),
            "2026-09-02T07:30:00Z".parse().unwrap(),
        )
        .unwrap();
        let id = client(&server)
            .create_event(
                &slot,
                "Собеседование",
                "Техническое интервью",
                &["hr@example.com".to_string()],
            )
            .await
            .unwrap();
        assert_eq!(id, "evt-42");
    }

    #[test]
    fn zulu_and_offset_timestamps_parse_to_the_same_instant() {
        let zulu = parse_event_timestamp("2026-09-01T10:00:00Z").unwrap();
        let offset = parse_event_timestamp("2026-09-01T13:00:00+03:00").unwrap();
        assert_eq!(zulu, offset);
    }

    #[test]
    fn malformed_timestamp_is_a_calendar_error() {
        let err = parse_event_timestamp("not-a-date").unwrap_err();
        assert!(matches!(err, RecruitbotError::Calendar(_)));
    }
}
