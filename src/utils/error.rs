use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP-Code: {status}\nMessage: {message}\nBody: {body}")]
    UnexpectedStatus {
        status: StatusCode,
        message: String,
        body: String,
        headers: HeaderMap,
    },

    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Api,
    Data,
    Configuration,
    System,
}

impl ApiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ApiError::Transport(_) => ErrorCategory::Network,
            ApiError::UnexpectedStatus { .. } => ErrorCategory::Api,
            ApiError::Serialization(_) => ErrorCategory::Data,
            ApiError::InvalidHeader { .. }
            | ApiError::InvalidUrl { .. }
            | ApiError::ConfigError { .. }
            | ApiError::InvalidConfigValueError { .. }
            | ApiError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ApiError::IoError(_) => ErrorCategory::System,
        }
    }

    /// Status code of an unexpected API response, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| s.is_client_error())
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ApiError::Transport(e) if e.is_timeout() => {
                "The server did not answer in time".to_string()
            }
            ApiError::Transport(e) if e.is_connect() => {
                "Could not connect to the API server".to_string()
            }
            ApiError::Transport(_) => "The request could not be completed".to_string(),
            ApiError::UnexpectedStatus { status, .. } => {
                format!("The API answered with an unexpected status ({})", status)
            }
            ApiError::Serialization(_) => {
                "The payload is not valid JSON for this operation".to_string()
            }
            ApiError::InvalidHeader { name, .. } => format!("Header '{}' is not valid", name),
            ApiError::InvalidUrl { url, .. } => format!("'{}' is not a usable URL", url),
            ApiError::ConfigError { message } => format!("Configuration problem: {}", message),
            ApiError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            ApiError::MissingConfigError { field } => {
                format!("Setting '{}' is required", field)
            }
            ApiError::IoError(e) => format!("File system error: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
