//! Slot search over busy calendar intervals

mod slot_finder;

pub use slot_finder::{find_free_slots, is_window_free};
