//! Free slot search
//!
//! Steps through a search window in fixed-duration increments and keeps the
//! candidates that overlap no busy interval. No merging, no gap-filling, no
//! randomization: the first `max_results` free candidates win, in
//! chronological order.

use chrono::Duration;
use recruitbot_domain::{BusyInterval, Slot, TimeWindow};

/// Find up to `max_results` free slots of `duration_minutes` inside `window`.
///
/// A candidate `[t, t + d)` is free iff for every busy interval
/// `max(slot_start, busy_start) < min(slot_end, busy_end)` does not hold.
/// If the window is shorter than the duration the result is empty.
pub fn find_free_slots(
    window: &TimeWindow,
    busy: &[BusyInterval],
    duration_minutes: i64,
    max_results: usize,
) -> Vec<Slot> {
    let mut free = Vec::new();
    if duration_minutes <= 0 || max_results == 0 {
        return free;
    }

    let duration = Duration::minutes(duration_minutes);
    let mut cursor = window.start;

    while cursor + duration <= window.end {
        let slot_end = cursor + duration;

        if busy.iter().all(|interval| !interval.overlaps(cursor, slot_end)) {
            free.push(Slot { window: TimeWindow { start: cursor, end: slot_end } });
            if free.len() >= max_results {
                break;
            }
        }

        cursor = slot_end;
    }

    free
}

/// Check a single window against the busy intervals using the same overlap
/// rule as [`find_free_slots`].
pub fn is_window_free(window: &TimeWindow, busy: &[BusyInterval]) -> bool {
    busy.iter().all(|interval| !interval.overlaps(window.start, window.end))
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    fn ts(day: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, day, h, m, 0).single().unwrap()
    }

    fn window(start: DateTime<Utc>, end: DateTime<Utc>) -> TimeWindow {
        TimeWindow::new(start, end).unwrap()
    }

    #[test]
    fn skips_busy_slot_and_returns_the_free_one() {
        let w = window(ts(1, 10, 0), ts(1, 11, 0));
        let busy = vec![BusyInterval { start: ts(1, 10, 0), end: ts(1, 10, 30) }];

        let slots = find_free_slots(&w, &busy, 30, 3);

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].start(), ts(1, 10, 30));
        assert_eq!(slots[0].end(), ts(1, 11, 0));
    }

    #[test]
    fn empty_busy_list_returns_all_candidates_up_to_max() {
        let w = window(ts(1, 10, 0), ts(1, 11, 0));

        let slots = find_free_slots(&w, &[], 30, 3);

        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].start(), ts(1, 10, 0));
        assert_eq!(slots[1].start(), ts(1, 10, 30));
    }

    #[test]
    fn window_shorter_than_duration_is_empty() {
        let w = window(ts(1, 10, 0), ts(1, 10, 20));
        assert!(find_free_slots(&w, &[], 30, 3).is_empty());
    }

    #[test]
    fn stops_at_max_results() {
        let w = window(ts(1, 10, 0), ts(2, 10, 0));
        let slots = find_free_slots(&w, &[], 30, 3);
        assert_eq!(slots.len(), 3);
    }

    #[test]
    fn returned_slots_never_overlap_busy_intervals() {
        let w = window(ts(1, 9, 0), ts(1, 18, 0));
        let busy = vec![
            BusyInterval { start: ts(1, 9, 15), end: ts(1, 10, 0) },
            BusyInterval { start: ts(1, 11, 0), end: ts(1, 12, 45) },
            BusyInterval { start: ts(1, 16, 30), end: ts(1, 17, 30) },
        ];

        let slots = find_free_slots(&w, &busy, 30, 100);

        assert!(!slots.is_empty());
        for slot in &slots {
            for interval in &busy {
                assert!(
                    !interval.overlaps(slot.start(), slot.end()),
                    "slot {:?} overlaps busy interval {:?}",
                    slot,
                    interval
                );
            }
        }
    }

    #[test]
    fn slots_are_chronological_without_duplicates() {
        let w = window(ts(1, 9, 0), ts(1, 18, 0));
        let busy = vec![BusyInterval { start: ts(1, 10, 0), end: ts(1, 14, 0) }];

        let slots = find_free_slots(&w, &busy, 30, 100);

        for pair in slots.windows(2) {
            assert!(pair[0].start() < pair[1].start());
        }
    }

    #[test]
    fn back_to_back_busy_interval_does_not_block_adjacent_slot() {
        // Half-open semantics: an event ending exactly at the slot start is
        // not an overlap.
        let w = window(ts(1, 10, 0), ts(1, 11, 0));
        let busy = vec![BusyInterval { start: ts(1, 9, 0), end: ts(1, 10, 0) }];

        let slots = find_free_slots(&w, &busy, 30, 3);
        assert_eq!(slots.len(), 2);
    }

    #[test]
    fn is_window_free_matches_overlap_rule() {
        let busy = vec![BusyInterval { start: ts(1, 10, 0), end: ts(1, 10, 30) }];

        assert!(is_window_free(&window(ts(1, 10, 30), ts(1, 11, 0)), &busy));
        assert!(!is_window_free(&window(ts(1, 10, 15), ts(1, 10, 45)), &busy));
    }
}
