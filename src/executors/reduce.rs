//! src/executors/reduce.rs
use crate::executors::{Executor, Stats};
use crate::functions::{Emitter, Reducer};
use crate::record::Record;
use anyhow::Context;
use std::io::BufRead;

/// Parses every input line as a [`Record`] and folds it into a [`Reducer`].
///
/// The first malformed line stops the run; records emitted before it have
/// already been written.
pub struct ReduceExecutor<R: BufRead, D: Reducer> {
    input: R,
    reducer: D,
}

impl<R: BufRead, D: Reducer> ReduceExecutor<R, D> {
    pub fn new(input: R, reducer: D) -> Self {
        Self { input, reducer }
    }
}

impl<R: BufRead, D: Reducer> Executor for ReduceExecutor<R, D> {
    #[tracing::instrument(name = "Run reduce stage", skip_all)]
    fn run(self) -> Result<Stats, anyhow::Error> {
        let Self { input, mut reducer } = self;
        let mut stats = Stats::default();

        for (i, line) in input.lines().enumerate() {
            let line_number = i as u64 + 1;
            let line =
                line.with_context(|| format!("Failed to read input line {line_number}"))?;
            let record = Record::parse(&line)
                .with_context(|| format!("Malformed record on line {line_number}"))?;
            tracing::trace!(line_number, word = record.word(), count = record.count());
            reducer
                .reduce(record)
                .with_context(|| format!("Failed to reduce input line {line_number}"))?;
            stats.lines_read = line_number;
        }

        let mut emitter = reducer.finish()?;
        emitter.flush()?;
        stats.records_emitted = emitter.emitted();

        tracing::info!(
            lines_read = stats.lines_read,
            records_emitted = stats.records_emitted,
            "Reduce stage finished"
        );
        Ok(stats)
    }
}
