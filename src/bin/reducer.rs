//! src/bin/reducer.rs
use anyhow::Context;
use std::io;
use wordcount::configuration::get_configuration;
use wordcount::executors::{Executor, ReduceExecutor};
use wordcount::functions::{LineEmitter, Reducer};
use wordcount::reducers::Aggregator;
use wordcount::telemetry::init_tracing;

// Input must arrive grouped by word, e.g. `mapper < text | LC_ALL=C sort | reducer`.
fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration.")?;
    init_tracing("reducer", &configuration.telemetry).context("Failed to setup tracing.")?;

    let emitter = LineEmitter::with_capacity(
        configuration.output.buffer_capacity,
        io::stdout().lock(),
    );
    ReduceExecutor::new(io::stdin().lock(), Aggregator::build(emitter)).run()?;
    Ok(())
}
