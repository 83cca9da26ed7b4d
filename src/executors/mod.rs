//! src/executors/mod.rs
pub trait Executor {
    fn run(self) -> Result<Stats, anyhow::Error>;
}

/// What a stage saw and produced over one run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub lines_read: u64,
    pub records_emitted: u64,
}

mod map;
pub use map::MapExecutor;

mod reduce;
pub use reduce::ReduceExecutor;
