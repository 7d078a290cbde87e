//! Core utilities

pub mod time_parse;
