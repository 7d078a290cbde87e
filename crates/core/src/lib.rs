//! # Recruitbot Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Slot search over busy calendar intervals
//! - Rule-based intent classification
//! - Response composition (canned replies and generation prompts)
//! - The assistant orchestration service
//! - Port/adapter interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `recruitbot-domain`
//! - No HTTP, credential, or platform code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod assistant;
pub mod classify;
pub mod compose;
pub mod scheduling;
pub mod utils;

// Infrastructure ports
pub mod calendar_ports;
pub mod generation_ports;

// Re-export specific items to avoid ambiguity
pub use assistant::AssistantService;
pub use calendar_ports::CalendarPort;
pub use classify::{IntentClassifier, KeywordClassifier, RuleSet};
pub use compose::ResponseComposer;
pub use generation_ports::GenerationPort;
pub use scheduling::{find_free_slots, is_window_free};
pub use utils::time_parse::parse_message_time;
