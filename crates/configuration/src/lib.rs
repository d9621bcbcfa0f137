use crate::error::ConfigError;
use chrono::format::{Item, StrftimeItems};
use std::path::Path;
use tracing_subscriber::EnvFilter;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{ColumnMapping, Config, InputSchema, Logging, OutputFormat};

/// Prefix of environment variables that override configuration keys,
/// e.g. `AGP__INPUT__SHEET=Sheet1`.
pub const ENV_PREFIX: &str = "AGP";

/// Loads and validates the application configuration.
///
/// Sources are layered, later ones winning: built-in defaults, an optional
/// `agp.toml` in the working directory, the explicit `path` (which must
/// exist when given), then `AGP__*` environment variables.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let mut builder = config::Config::builder()
        .add_source(config::File::with_name("agp").required(false));

    if let Some(path) = path {
        builder = builder.add_source(config::File::from(path).required(true));
    }

    let settings = builder
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = settings.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

/// Checks the invariants the loader and logger rely on.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let columns = &config.input.columns;
    let timestamp = columns.timestamp.trim();
    let glucose = columns.glucose.trim();

    if timestamp.is_empty() || glucose.is_empty() {
        return Err(ConfigError::ValidationError(
            "column headers for timestamp and glucose must not be empty".to_string(),
        ));
    }
    if timestamp == glucose {
        return Err(ConfigError::ValidationError(format!(
            "timestamp and glucose columns both map to header '{timestamp}'"
        )));
    }

    if config.input.timestamp_formats.is_empty() {
        return Err(ConfigError::ValidationError(
            "at least one timestamp format is required".to_string(),
        ));
    }
    for format in &config.input.timestamp_formats {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::ValidationError(format!(
                "invalid timestamp format '{format}'"
            )));
        }
    }

    EnvFilter::try_new(&config.logging.level).map_err(|e| {
        ConfigError::ValidationError(format!(
            "invalid log level '{}': {e}",
            config.logging.level
        ))
    })?;

    Ok(())
}
