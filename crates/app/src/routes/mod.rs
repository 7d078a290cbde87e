//! HTTP routes

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{DateTime, Duration, Utc};
use recruitbot_core::is_window_free;
use recruitbot_domain::{RecruitbotError, TimeWindow};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::context::AppContext;
use crate::error::ApiError;

/// Reply for an empty or missing message body.
const EMPTY_MESSAGE_REPLY: &str = "Пожалуйста, введите сообщение.";

pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/process_message", post(process_message))
        .route("/schedule_meeting", post(schedule_meeting))
        .route("/health", get(health))
        .with_state(ctx)
}

#[derive(Debug, Deserialize)]
pub struct ProcessMessageRequest {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProcessMessageResponse {
    pub reply: String,
}

/// `POST /process_message` - drafts a reply to one recruiter message.
pub async fn process_message(
    State(ctx): State<AppContext>,
    Json(request): Json<ProcessMessageRequest>,
) -> Result<Response, ApiError> {
    let message = request.message.as_deref().map(str::trim).unwrap_or("");
    if message.is_empty() {
        let body = ProcessMessageResponse {
            reply: EMPTY_MESSAGE_REPLY.to_string(),
        };
        return Ok((StatusCode::BAD_REQUEST, Json(body)).into_response());
    }

    info!(chars = message.chars().count(), "processing recruiter message");
    let reply = ctx.assistant.handle_message(message).await?;
    Ok(Json(ProcessMessageResponse { reply }).into_response())
}

#[derive(Debug, Deserialize)]
pub struct ScheduleMeetingRequest {
    /// Meeting start, RFC 3339.
    pub start: DateTime<Utc>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attendees: Vec<String>,
    /// Defaults to the configured slot duration.
    #[serde(default)]
    pub duration_minutes: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleMeetingResponse {
    pub event_id: String,
}

/// `POST /schedule_meeting` - books a confirmed interview slot.
///
/// Re-checks the calendar before writing, so a slot taken since it was
/// proposed is rejected instead of double-booked.
pub async fn schedule_meeting(
    State(ctx): State<AppContext>,
    Json(request): Json<ScheduleMeetingRequest>,
) -> Result<Json<ScheduleMeetingResponse>, ApiError> {
    let minutes = request
        .duration_minutes
        .unwrap_or(ctx.config.scheduling.slot_duration_minutes);
    // try_minutes also rejects values that overflow chrono's range.
    let duration = Duration::try_minutes(minutes)
        .filter(|d| *d > Duration::zero())
        .ok_or_else(|| {
            RecruitbotError::InvalidInput(format!(
                "duration_minutes must be a positive meeting length, got {minutes}"
            ))
        })?;
    if request.title.trim().is_empty() {
        return Err(RecruitbotError::InvalidInput("title must not be empty".to_string()).into());
    }

    let end = request.start.checked_add_signed(duration).ok_or_else(|| {
        RecruitbotError::InvalidInput("meeting end time is out of range".to_string())
    })?;
    let window = TimeWindow::new(request.start, end)?;
    let busy = ctx.calendar.list_busy_intervals(&window).await?;
    if !is_window_free(&window, &busy) {
        return Err(RecruitbotError::InvalidInput(
            "requested time conflicts with an existing event".to_string(),
        )
        .into());
    }

    let event_id = ctx
        .calendar
        .create_event(&window, &request.title, &request.description, &request.attendees)
        .await?;
    info!(event_id = %event_id, "scheduled meeting");
    Ok(Json(ScheduleMeetingResponse { event_id }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /health` - liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
