//! Assistant orchestration

mod service;

pub use service::AssistantService;
