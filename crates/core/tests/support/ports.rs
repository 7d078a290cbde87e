//! In-memory mock ports for the assistant service

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use recruitbot_core::{CalendarPort, GenerationPort};
use recruitbot_domain::{
    BusyInterval, GenerationPrompt, RecruitbotError, Result, TimeWindow,
};

/// Mock calendar returning a fixed busy list and counting invocations.
#[derive(Default)]
pub struct MockCalendarPort {
    busy: Vec<BusyInterval>,
    fail: bool,
    pub list_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
}

impl MockCalendarPort {
    pub fn with_busy(busy: Vec<BusyInterval>) -> Self {
        Self { busy, ..Self::default() }
    }

    /// A calendar where every instant for the next month is taken.
    pub fn fully_booked() -> Self {
        let now = Utc::now();
        Self::with_busy(vec![BusyInterval {
            start: now - Duration::days(1),
            end: now + Duration::days(30),
        }])
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }
}

#[async_trait]
impl CalendarPort for MockCalendarPort {
    async fn list_busy_intervals(&self, _window: &TimeWindow) -> Result<Vec<BusyInterval>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(RecruitbotError::Calendar("simulated outage".into()));
        }
        Ok(self.busy.clone())
    }

    async fn create_event(
        &self,
        _window: &TimeWindow,
        _title: &str,
        _description: &str,
        _attendees: &[String],
    ) -> Result<String> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(RecruitbotError::Calendar("simulated outage".into()));
        }
        Ok("event-1".to_string())
    }
}

/// Mock generator recording the last prompt it was given.
pub struct MockGenerationPort {
    reply: String,
    fail: bool,
    pub calls: AtomicUsize,
    pub last_prompt: Mutex<Option<String>>,
}

impl MockGenerationPort {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            fail: false,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: String::new(),
            fail: true,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }
}

#[async_trait]
impl GenerationPort for MockGenerationPort {
    async fn generate(&self, prompt: &GenerationPrompt) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.as_str().to_string());
        if self.fail {
            return Err(RecruitbotError::Generation("simulated quota error".into()));
        }
        Ok(self.reply.clone())
    }
}
