//! src/configuration.rs
use crate::functions::DEFAULT_BUFFER_CAPACITY;
use serde_aux::field_attributes::{
    deserialize_bool_from_anything, deserialize_number_from_string,
};
use std::path::Path;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub telemetry: TelemetrySettings,
    pub output: OutputSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct TelemetrySettings {
    /// `EnvFilter` directives, used when `RUST_LOG` is unset.
    pub filter: String,
    #[serde(deserialize_with = "deserialize_bool_from_anything")]
    pub ansi: bool,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct OutputSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub buffer_capacity: usize,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    load_configuration(&base_path.join("configuration"))
}

/// Defaults, then `<config_dir>/wordcount.yaml` if present, then
/// `WORDCOUNT_`-prefixed environment variables.
pub fn load_configuration(config_dir: &Path) -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("telemetry.filter", "warn")?
        .set_default("telemetry.ansi", false)?
        .set_default("output.buffer_capacity", DEFAULT_BUFFER_CAPACITY as u64)?
        .add_source(config::File::from(config_dir.join("wordcount.yaml")).required(false))
        .add_source(
            config::Environment::with_prefix("WORDCOUNT")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;
    let settings = settings.try_deserialize::<Settings>()?;
    if settings.output.buffer_capacity == 0 {
        return Err(config::ConfigError::Message(
            "output.buffer_capacity must be greater than zero".into(),
        ));
    }
    Ok(settings)
}
