//! Errors raised while resolving engine configuration.

use super::error_code::{self, StrideErrorCode};

/// Failures of a config layer or of the resolved engine settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A config file exists but could not be read.
    #[error("Cannot read {path}: {message}")]
    Unreadable { path: String, message: String },

    /// A config file (or TOML string) is not valid TOML for `StrideConfig`.
    #[error("Malformed config in {path}: {message}")]
    Malformed { path: String, message: String },

    /// A `STRIDE_ENGINE_*` variable is set but does not parse.
    #[error("{key}={value:?} is not valid: {message}")]
    BadEnvVar {
        key: String,
        value: String,
        message: String,
    },

    /// A resolved setting is outside what the engine can run with.
    #[error("{field} {message}")]
    OutOfRange { field: String, message: String },

    #[error("Cannot serialize config: {message}")]
    Serialize { message: String },

    #[error("Cannot start simulation worker pool: {message}")]
    WorkerPool { message: String },
}

impl StrideErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
