//! src/functions.rs
use crate::record::Record;
use anyhow::Context;
use std::io::{BufWriter, Write};

/// Default output buffer size, 8KB.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8192;

/// Sink for the records a stage produces.
pub trait Emitter {
    fn emit(&mut self, record: Record) -> Result<(), anyhow::Error>;

    fn flush(&mut self) -> Result<(), anyhow::Error> {
        Ok(())
    }

    /// Number of records emitted so far.
    fn emitted(&self) -> u64;
}

/// Turns one input line into zero or more records.
pub trait Mapper {
    type Emitter: Emitter;
    fn build(emitter: Self::Emitter) -> Self;
    fn map(&mut self, key: u64, value: &str) -> Result<(), anyhow::Error>;
    fn into_emitter(self) -> Self::Emitter;
}

/// Folds a stream of records, emitting as it goes and once more on `finish`.
pub trait Reducer {
    type Emitter: Emitter;
    fn build(emitter: Self::Emitter) -> Self;
    fn reduce(&mut self, record: Record) -> Result<(), anyhow::Error>;
    fn finish(self) -> Result<Self::Emitter, anyhow::Error>;
}

/// Writes records as `<word>\t<count>` lines.
pub struct LineEmitter<W: Write> {
    writer: BufWriter<W>,
    emitted: u64,
}

impl<W: Write> LineEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY, writer)
    }

    pub fn with_capacity(capacity: usize, writer: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, writer),
            emitted: 0,
        }
    }

    /// Flushes and hands back the underlying writer.
    pub fn into_inner(self) -> Result<W, anyhow::Error> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!(e.into_error()))
            .context("Failed to flush output")
    }
}

impl<W: Write> Emitter for LineEmitter<W> {
    fn emit(&mut self, record: Record) -> Result<(), anyhow::Error> {
        writeln!(self.writer, "{record}").context("Failed to write record")?;
        self.emitted += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), anyhow::Error> {
        self.writer.flush().context("Failed to flush output")
    }

    fn emitted(&self) -> u64 {
        self.emitted
    }
}

/// Keeps every record in memory.
#[derive(Debug, Default)]
pub struct VecEmitter {
    records: Vec<Record>,
}

impl VecEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl Emitter for VecEmitter {
    fn emit(&mut self, record: Record) -> Result<(), anyhow::Error> {
        self.records.push(record);
        Ok(())
    }

    fn emitted(&self) -> u64 {
        self.records.len() as u64
    }
}
