//! Common data types used throughout the application

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{RecruitbotError, Result};

/// A half-open time range `[start, end)`
///
/// Timestamps stay structured (`DateTime<Utc>`) everywhere in the core;
/// human-readable formatting happens only at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Create a window, validating that `start < end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start >= end {
            return Err(RecruitbotError::InvalidInput(format!(
                "time window start ({start}) must precede end ({end})"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// A busy interval sourced from a calendar event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BusyInterval {
    /// Half-open overlap test: two intervals overlap iff
    /// `max(start_a, start_b) < min(end_a, end_b)`.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start.max(start) < self.end.min(end)
    }
}

/// A free candidate window of fixed duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub window: TimeWindow,
}

impl Slot {
    pub fn start(&self) -> DateTime<Utc> {
        self.window.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.window.end
    }
}

/// Classification of an inbound message
///
/// Variants are mutually exclusive; the classifier evaluates its rules in a
/// fixed order and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    SmallTalk,
    Farewell,
    SchedulingRequest,
    General,
}

/// Input to the response composer
#[derive(Debug, Clone)]
pub struct ReplyRequest {
    pub message: String,
    pub intent: Intent,
    /// Free slots in chronological order (possibly empty)
    pub slots: Vec<Slot>,
    /// A concrete time the recruiter proposed that turned out to be free
    pub proposed: Option<Slot>,
}

impl ReplyRequest {
    pub fn new(message: impl Into<String>, intent: Intent) -> Self {
        Self { message: message.into(), intent, slots: Vec::new(), proposed: None }
    }

    pub fn with_slots(mut self, slots: Vec<Slot>) -> Self {
        self.slots = slots;
        self
    }

    pub fn with_proposed(mut self, proposed: Option<Slot>) -> Self {
        self.proposed = proposed;
        self
    }
}

/// Prompt text sent to the generation backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationPrompt(String);

impl GenerationPrompt {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Output of the response composer
///
/// `Canned` replies bypass the generation backend entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyPlan {
    Canned(String),
    Generate(GenerationPrompt),
}
