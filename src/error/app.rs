use std::process::ExitCode;

use thiserror::Error;

use super::{ConfigError, HttpError, ValidationError};

/// Exit status for runtime failures (transport errors, unexpected bodies).
const EXIT_RUNTIME_FAILURE: u8 = 1;
/// Exit status for usage problems detected before any request is sent.
const EXIT_USAGE: u8 = 2;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("CLI error: {source}")]
    Clap {
        #[from]
        source: clap::Error,
    },
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation<E>(error: E) -> Self
    where
        E: Into<ValidationError>,
    {
        error.into().into()
    }

    pub fn config<E>(error: E) -> Self
    where
        E: Into<ConfigError>,
    {
        error.into().into()
    }

    pub fn http<E>(error: E) -> Self
    where
        E: Into<HttpError>,
    {
        error.into().into()
    }

    /// Process exit status for this failure. Clap keeps its own status so
    /// `--help` and `--version` still exit with success.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Clap { source } => u8::try_from(source.exit_code()).unwrap_or(EXIT_USAGE),
            Self::Validation(_) | Self::Config(_) => EXIT_USAGE,
            Self::Io { .. } | Self::Http(_) => EXIT_RUNTIME_FAILURE,
        }
    }
}

impl From<&AppError> for ExitCode {
    fn from(error: &AppError) -> Self {
        Self::from(error.exit_code())
    }
}
