use astra::Response;
use std::path::PathBuf;
use thiserror::Error;

/// Errors originating from the request handling layer
/// (routing, missing resources, unavailable data).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Service Unavailable: {0}")]
    Unavailable(String),
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::MethodNotAllowed => 405,
            ServerError::Unavailable(_) => 503,
            ServerError::InternalError => 500,
        }
    }
}

/// Failure to read or parse the listings resource.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("invalid listings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key}: invalid socket address {value:?}")]
    InvalidAddr { key: &'static str, value: String },
    #[error("{key}: expected a positive number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key}: invalid duration {value:?}: {source}")]
    InvalidDuration {
        key: &'static str,
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("{key}: unknown log level {value:?}")]
    InvalidLogLevel { key: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to create log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to install logger: {0}")]
    Install(#[from] log::SetLoggerError),
}
