//! Shared test doubles for core integration tests

pub mod ports;
