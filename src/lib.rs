//! src/lib.rs
pub mod authentication;
pub mod configuration;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod navigation;
pub mod report;
pub mod routes;
pub mod session_state;
pub mod startup;
pub mod stats;
pub mod store;
pub mod telemetry;
pub mod utils;
