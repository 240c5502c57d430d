use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::config::LoggingConfig;
use crate::error::{AppError, AppResult};

/// Installs the global subscriber. The terminal UI owns stdout and stderr, so events go to
/// a file or nowhere. `RUST_LOG` takes precedence over the configured filter.
pub fn init_logging(config: &LoggingConfig, file_override: Option<&Path>) -> AppResult<()> {
    let Some(path) = file_override.or(config.file.as_deref()) else {
        return Ok(());
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| {
            AppError::io_with_context(source, format!("failed to create {}", parent.display()))
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| {
            AppError::io_with_context(source, format!("failed to open log file {}", path.display()))
        })?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|err| AppError::invalid_argument(format!("invalid log filter: {err}")))?;
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|err| AppError::unsupported(format!("logging already initialised: {err}")))?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::init_logging;
    use crate::config::LoggingConfig;

    #[test]
    fn no_file_means_no_subscriber() {
        let config = LoggingConfig::default();
        init_logging(&config, None).expect("logging without a file should be a no-op");
    }
}
