//! Calendar integration port interfaces

use async_trait::async_trait;
use recruitbot_domain::{BusyInterval, Result, TimeWindow};

/// Trait for calendar provider operations
///
/// Implementations must propagate distinguishable errors (auth vs network vs
/// malformed data); the orchestration boundary decides what the user sees.
#[async_trait]
pub trait CalendarPort: Send + Sync {
    /// List busy intervals within a time window
    async fn list_busy_intervals(&self, window: &TimeWindow) -> Result<Vec<BusyInterval>>;

    /// Create a calendar event, returning the provider event id
    async fn create_event(
        &self,
        window: &TimeWindow,
        title: &str,
        description: &str,
        attendees: &[String],
    ) -> Result<String>;
}
