//! External service adapters

pub mod gemini;
pub mod google;
