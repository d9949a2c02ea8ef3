use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the application
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Environment error: {0}")]
    #[diagnostic(code(roster_izin::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(roster_izin::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(roster_izin::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(roster_izin::serialization))]
    Serialization(String),

    #[error("Jadwal tidak valid atau tidak ditemukan.")]
    #[diagnostic(
        code(roster_izin::no_schedule),
        help("Check that the roster photo shows day headers such as `29 Tue` and flight lines")
    )]
    NoSchedule,

    #[error("Other error: {0}")]
    #[diagnostic(code(roster_izin::other))]
    Other(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type RosterResult<T> = Result<T, Error>;

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Invalid environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}
