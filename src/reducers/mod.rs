//! src/reducers/mod.rs
mod aggregator;
pub use aggregator::{AggregateError, Aggregator};
