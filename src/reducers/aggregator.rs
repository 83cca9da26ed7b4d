//! src/reducers/aggregator.rs
use crate::error::error_chain_fmt;
use crate::functions::{Emitter, Reducer};
use crate::record::{Count, Record, Word};

/// The word currently being summed and its running total.
#[derive(Debug, PartialEq, Eq)]
struct Run {
    word: Word,
    total: Count,
}

impl Run {
    fn absorb(&mut self, count: Count) -> Result<(), AggregateError> {
        self.total = self
            .total
            .checked_add(count)
            .ok_or_else(|| AggregateError::CountOverflow {
                word: self.word.clone(),
            })?;
        Ok(())
    }

    fn into_record(self) -> Record {
        Record::new(self.word, self.total)
    }
}

/// Sums the counts of consecutive records that share a word.
///
/// Input must already be grouped by word (normally by sorting it between
/// the map and reduce stages). Nothing is regrouped here: a word that shows
/// up in two separate runs is emitted twice.
pub struct Aggregator<E: Emitter> {
    emitter: E,
    current: Option<Run>,
}

impl<E: Emitter> Reducer for Aggregator<E> {
    type Emitter = E;

    fn build(emitter: E) -> Self {
        Self {
            emitter,
            current: None,
        }
    }

    fn reduce(&mut self, record: Record) -> Result<(), anyhow::Error> {
        let (word, count) = record.into_parts();
        if let Some(run) = self.current.as_mut().filter(|run| run.word == word) {
            run.absorb(count)?;
            return Ok(());
        }
        if let Some(done) = self.current.replace(Run { word, total: count }) {
            self.emitter.emit(done.into_record())?;
        }
        Ok(())
    }

    fn finish(mut self) -> Result<E, anyhow::Error> {
        if let Some(run) = self.current.take() {
            self.emitter.emit(run.into_record())?;
        }
        Ok(self.emitter)
    }
}

#[derive(thiserror::Error)]
pub enum AggregateError {
    #[error("Total count for `{word}` overflowed")]
    CountOverflow { word: Word },
}

impl std::fmt::Debug for AggregateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}
