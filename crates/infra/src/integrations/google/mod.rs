//! Google Calendar adapter

mod client;
mod types;

pub use client::GoogleCalendarClient;
