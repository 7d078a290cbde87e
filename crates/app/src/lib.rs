//! # Recruitbot Application
//!
//! HTTP boundary and wiring: builds the assistant service from
//! configuration and exposes it over a small axum API.

pub mod context;
pub mod error;
pub mod logging;
pub mod routes;

pub use context::AppContext;
pub use error::ApiError;
pub use routes::router;
