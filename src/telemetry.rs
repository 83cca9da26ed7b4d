//! src/telemetry.rs
use crate::configuration::TelemetrySettings;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Installs a stderr subscriber; stdout is reserved for records.
///
/// `RUST_LOG` wins over the configured filter when it is set.
pub fn init_tracing(
    service_name: &'static str,
    settings: &TelemetrySettings,
) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr)
                .with_ansi(settings.ansi)
                .with_file(true)
                .with_line_number(true)
                .with_target(false),
        )
        .try_init()?;

    tracing::debug!(service_name, "Tracing initialised");
    Ok(())
}
