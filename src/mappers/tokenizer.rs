//! src/mappers/tokenizer.rs
use crate::functions::{Emitter, Mapper};
use crate::record::{Record, is_separator};

/// Splits each line on [`is_separator`] characters and emits `(word, 1)` for
/// every token.
///
/// Words are emitted exactly as they appear: no case folding and no
/// punctuation stripping. Token order follows the input.
pub struct Tokenizer<E: Emitter> {
    emitter: E,
}

impl<E: Emitter> Mapper for Tokenizer<E> {
    type Emitter = E;

    fn build(emitter: E) -> Self {
        Self { emitter }
    }

    fn map(&mut self, _key: u64, value: &str) -> Result<(), anyhow::Error> {
        for word in value.split(is_separator).filter(|w| !w.is_empty()) {
            self.emitter.emit(Record::unit(word))?;
        }
        Ok(())
    }

    fn into_emitter(self) -> E {
        self.emitter
    }
}
