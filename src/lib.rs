//! src/lib.rs
pub mod configuration;
pub mod error;
pub mod executors;
pub mod functions;
pub mod mappers;
pub mod record;
pub mod reducers;
pub mod telemetry;
