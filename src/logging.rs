use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable holding the log filter (`EnvFilter` syntax).
pub const LOG_ENV: &str = "SHAPEQ_LOG";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid SHAPEQ_LOG filter: {0}")]
    Filter(String),

    #[error("failed to install log subscriber: {0}")]
    Install(String),
}

/// Installs JSON logging on stderr; logging stays off unless `SHAPEQ_LOG` is set.
pub fn init_logging() -> Result<(), LoggingError> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) => EnvFilter::try_new(directives)
            .map_err(|err| LoggingError::Filter(err.to_string()))?,
        Err(_) => EnvFilter::new("off"),
    };

    let layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|err| LoggingError::Install(err.to_string()))
}
