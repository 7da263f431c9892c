//! Process-level error types

use thiserror::Error;

/// Failures raised while bringing the process up: configuration loading
/// and pool construction. Request-path failures use the domain taxonomy
/// instead of this type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    InternalError(String),
}
