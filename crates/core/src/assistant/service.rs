//! Assistant service - end-to-end message handling
//!
//! Orchestrates classify → calendar lookup → slot search → compose →
//! generate. Remote failures are caught here: the user sees a generic
//! message while the distinguishable error kind is logged.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveTime, Utc};
use chrono_tz::Tz;
use recruitbot_domain::{
    BusyInterval, Intent, ReplyPlan, ReplyRequest, Result, SchedulingConfig, Slot, TimeWindow,
};
use tracing::{debug, warn};

use crate::calendar_ports::CalendarPort;
use crate::classify::IntentClassifier;
use crate::compose::ResponseComposer;
use crate::generation_ports::GenerationPort;
use crate::scheduling::{find_free_slots, is_window_free};
use crate::utils::time_parse::parse_message_time;

const CALENDAR_PROBLEM_REPLY: &str =
    "Произошла ошибка при доступе к календарю. Пожалуйста, проверьте настройки.";
const GENERATION_PROBLEM_REPLY: &str = "Произошла ошибка при обработке вашего запроса. \
     Пожалуйста, убедитесь, что ваш API ключ действителен и активен.";

/// Assistant service wiring the classifier, calendar and generation ports
///
/// Holds no mutable state; each message is handled independently, so
/// concurrent requests need no coordination.
pub struct AssistantService {
    classifier: Arc<dyn IntentClassifier>,
    calendar: Arc<dyn CalendarPort>,
    generator: Arc<dyn GenerationPort>,
    composer: ResponseComposer,
    scheduling: SchedulingConfig,
    tz: Tz,
}

impl AssistantService {
    /// Create a new assistant service
    pub fn new(
        classifier: Arc<dyn IntentClassifier>,
        calendar: Arc<dyn CalendarPort>,
        generator: Arc<dyn GenerationPort>,
        scheduling: SchedulingConfig,
        tz: Tz,
    ) -> Self {
        Self {
            classifier,
            calendar,
            generator,
            composer: ResponseComposer::new(tz),
            scheduling,
            tz,
        }
    }

    /// Handle one inbound message and produce the reply text.
    ///
    /// Canned intents return without any remote call. Scheduling intents
    /// consult the calendar first; the generation backend only runs when the
    /// composer actually produced a prompt.
    pub async fn handle_message(&self, message: &str) -> Result<String> {
        let intent = self.classifier.classify(message);
        debug!(?intent, "classified inbound message");

        let request = match intent {
            Intent::SchedulingRequest => match self.build_scheduling_request(message).await {
                Ok(request) => request,
                Err(err) => {
                    warn!(error = %err, "calendar lookup failed");
                    return Ok(CALENDAR_PROBLEM_REPLY.to_string());
                }
            },
            other => ReplyRequest::new(message, other),
        };

        match self.composer.compose(&request) {
            ReplyPlan::Canned(text) => Ok(text),
            ReplyPlan::Generate(prompt) => match self.generator.generate(&prompt).await {
                Ok(text) => Ok(text),
                Err(err) => {
                    warn!(error = %err, "generation request failed");
                    Ok(GENERATION_PROBLEM_REPLY.to_string())
                }
            },
        }
    }

    async fn build_scheduling_request(&self, message: &str) -> Result<ReplyRequest> {
        let window = search_window(self.tz, &self.scheduling, Utc::now())?;
        let busy = self.calendar.list_busy_intervals(&window).await?;

        let slots = find_free_slots(
            &window,
            &busy,
            self.scheduling.slot_duration_minutes,
            self.scheduling.max_slot_results,
        );
        debug!(free = slots.len(), busy = busy.len(), "slot search complete");

        let proposed = parse_message_time(message)
            .and_then(|time| proposed_slot(self.tz, &self.scheduling, time, &window, &busy));

        Ok(ReplyRequest::new(message, Intent::SchedulingRequest)
            .with_slots(slots)
            .with_proposed(proposed))
    }
}

/// Compute the slot search window: from the workday start today (clamped to
/// now, so past slots are never proposed) over the configured horizon.
fn search_window(tz: Tz, scheduling: &SchedulingConfig, now: DateTime<Utc>) -> Result<TimeWindow> {
    let local_now = now.with_timezone(&tz);
    let anchor = local_now
        .date_naive()
        .and_hms_opt(scheduling.workday_start_hour, 0, 0)
        .and_then(|naive| naive.and_local_timezone(tz).single())
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or(now);

    let start = anchor.max(now);
    TimeWindow::new(start, start + Duration::days(scheduling.search_days))
}

/// Resolve a parsed time of day to the earliest free slot at that time
/// within the window, if any.
fn proposed_slot(
    tz: Tz,
    scheduling: &SchedulingConfig,
    time: NaiveTime,
    window: &TimeWindow,
    busy: &[BusyInterval],
) -> Option<Slot> {
    let duration = Duration::minutes(scheduling.slot_duration_minutes);
    let first_day = window.start.with_timezone(&tz).date_naive();

    for offset in 0..=scheduling.search_days {
        let date = first_day + Duration::days(offset);
        let start = date
            .and_time(time)
            .and_local_timezone(tz)
            .single()?
            .with_timezone(&Utc);
        let end = start + duration;

        if start < window.start || end > window.end {
            continue;
        }
        let candidate = TimeWindow { start, end };
        if is_window_free(&candidate, busy) {
            return Some(Slot { window: candidate });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn scheduling() -> SchedulingConfig {
        SchedulingConfig::default()
    }

    #[test]
    fn search_window_starts_at_workday_start_before_hours() {
        // 05:00 UTC = 08:00 Moscow, before the 10:00 workday start
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 5, 0, 0).single().unwrap();
        let window = search_window(Tz::Europe__Moscow, &scheduling(), now).unwrap();

        // Workday start: 10:00 Moscow = 07:00 UTC
        assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 9, 1, 7, 0, 0).single().unwrap());
        assert_eq!(window.duration(), Duration::days(7));
    }

    #[test]
    fn search_window_clamps_to_now_during_the_day() {
        // 12:00 UTC = 15:00 Moscow, after the workday start
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).single().unwrap();
        let window = search_window(Tz::Europe__Moscow, &scheduling(), now).unwrap();

        assert_eq!(window.start, now);
    }

    #[test]
    fn proposed_slot_skips_busy_days() {
        let tz = Tz::Europe__Moscow;
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 5, 0, 0).single().unwrap();
        let window = search_window(tz, &scheduling(), now).unwrap();

        // 15:00 Moscow = 12:00 UTC; day one is busy then, day two is free
        let busy = vec![BusyInterval {
            start: Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).single().unwrap(),
            end: Utc.with_ymd_and_hms(2026, 9, 1, 13, 0, 0).single().unwrap(),
        }];
        let time = NaiveTime::from_hms_opt(15, 0, 0).unwrap();

        let slot = proposed_slot(tz, &scheduling(), time, &window, &busy).unwrap();
        assert_eq!(
            slot.start(),
            Utc.with_ymd_and_hms(2026, 9, 2, 12, 0, 0).single().unwrap()
        );
    }

    #[test]
    fn proposed_slot_before_window_start_is_skipped_to_next_day() {
        let tz = Tz::Europe__Moscow;
        // 12:00 UTC = 15:00 Moscow; a 11:00 Moscow proposal today is in the past
        let now = Utc.with_ymd_and_hms(2026, 9, 1, 12, 0, 0).single().unwrap();
        let window = search_window(tz, &scheduling(), now).unwrap();
        let time = NaiveTime::from_hms_opt(11, 0, 0).unwrap();

        let slot = proposed_slot(tz, &scheduling(), time, &window, &[]).unwrap();
        assert_eq!(
            slot.start(),
            Utc.with_ymd_and_hms(2026, 9, 2, 8, 0, 0).single().unwrap()
        );
    }
}
