//! src/executors/map.rs
use crate::executors::{Executor, Stats};
use crate::functions::{Emitter, Mapper};
use anyhow::Context;
use std::io::BufRead;

/// Feeds every input line to a [`Mapper`], keyed by its 1-based line number.
pub struct MapExecutor<R: BufRead, M: Mapper> {
    input: R,
    mapper: M,
}

impl<R: BufRead, M: Mapper> MapExecutor<R, M> {
    pub fn new(input: R, mapper: M) -> Self {
        Self { input, mapper }
    }
}

impl<R: BufRead, M: Mapper> Executor for MapExecutor<R, M> {
    #[tracing::instrument(name = "Run map stage", skip_all)]
    fn run(self) -> Result<Stats, anyhow::Error> {
        let Self { input, mut mapper } = self;
        let mut stats = Stats::default();

        for (i, line) in input.lines().enumerate() {
            let line_number = i as u64 + 1;
            let line =
                line.with_context(|| format!("Failed to read input line {line_number}"))?;
            mapper
                .map(line_number, &line)
                .with_context(|| format!("Failed to map input line {line_number}"))?;
            stats.lines_read = line_number;
        }

        let mut emitter = mapper.into_emitter();
        emitter.flush()?;
        stats.records_emitted = emitter.emitted();

        tracing::info!(
            lines_read = stats.lines_read,
            records_emitted = stats.records_emitted,
            "Map stage finished"
        );
        Ok(stats)
    }
}
