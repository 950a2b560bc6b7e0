//! Errors raised while reading or writing `config.yml`.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `save` was called before `load` chose a location.
    #[error("No config.yml location chosen yet")]
    FilePathNotSet,

    #[error("Cannot locate the home directory for the default config location")]
    HomeDirectoryNotFound,

    #[error("Cannot read {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    #[error("Cannot write {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot create config directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot encode settings as YAML: {0}")]
    SerializationFailed(String),

    #[error("config.yml is not valid: {0}")]
    DeserializationFailed(String),

    /// `log_level` is not one of off, error, warn, info, debug or trace.
    #[error("Unknown log_level '{0}'")]
    InvalidLogLevel(String),
}
