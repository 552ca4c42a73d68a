use thiserror::Error;

use crate::config::ConfigError;

/// Failures that end the process.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Shutdown failed: {0}")]
    Shutdown(String),
}
