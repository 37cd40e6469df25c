//! Finora library: application wiring for the dashboard binary.

pub mod app;
pub mod config;
pub mod errors;
