// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures of the manual count-override entry point. Never fatal; a failed
/// override leaves every record untouched.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OverrideError {
    #[error("Index {index} is out of range for {len} skills")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Override must look like INDEX=COUNT, got '{0}'")]
    MalformedSpec(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Override failed: {0}")]
    Override(#[from] OverrideError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
