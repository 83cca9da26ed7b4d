//! src/bin/mapper.rs
use anyhow::Context;
use std::io;
use wordcount::configuration::get_configuration;
use wordcount::executors::{Executor, MapExecutor};
use wordcount::functions::{LineEmitter, Mapper};
use wordcount::mappers::Tokenizer;
use wordcount::telemetry::init_tracing;

fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration.")?;
    init_tracing("mapper", &configuration.telemetry).context("Failed to setup tracing.")?;

    let emitter = LineEmitter::with_capacity(
        configuration.output.buffer_capacity,
        io::stdout().lock(),
    );
    MapExecutor::new(io::stdin().lock(), Tokenizer::build(emitter)).run()?;
    Ok(())
}
