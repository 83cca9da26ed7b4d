//! src/record.rs
use crate::error::error_chain_fmt;
use std::fmt;
use std::num::ParseIntError;

pub type Word = String;
pub type Count = i64;

pub const SEPARATOR: char = '\t';

/// Characters that separate words and pad records.
///
/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F,
/// which text producers also treat as field breaks.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

/// A `(word, count)` pair, written on the wire as `<word>\t<count>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Record {
    word: Word,
    count: Count,
}

impl Record {
    pub fn new(word: impl Into<Word>, count: Count) -> Self {
        Record {
            word: word.into(),
            count,
        }
    }

    /// A record carrying a single occurrence of `word`.
    pub fn unit(word: impl Into<Word>) -> Self {
        Self::new(word, 1)
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn count(&self) -> Count {
        self.count
    }

    pub fn into_parts(self) -> (Word, Count) {
        (self.word, self.count)
    }

    /// Parses one `<word>\t<count>` line.
    ///
    /// Surrounding separators are trimmed from the line first, so a trailing
    /// `\r` or blank padding never ends up in the word or the count. The line
    /// must then hold exactly one tab.
    pub fn parse(line: &str) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.trim_matches(is_separator).split(SEPARATOR).collect();
        let [word, count] = fields.as_slice() else {
            return Err(RecordError::FieldCount {
                found: fields.len(),
            });
        };
        let count = count
            .trim_matches(is_separator)
            .parse::<Count>()
            .map_err(|source| RecordError::InvalidCount {
                value: count.to_string(),
                source,
            })?;
        Ok(Record::new(*word, count))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.word, SEPARATOR, self.count)
    }
}

impl std::str::FromStr for Record {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Record::parse(s)
    }
}

#[derive(thiserror::Error)]
pub enum RecordError {
    #[error("Expected exactly 2 tab-separated fields, found {found}")]
    FieldCount { found: usize },
    #[error("Invalid count `{value}`")]
    InvalidCount {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl fmt::Debug for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        error_chain_fmt(f, self)
    }
}
