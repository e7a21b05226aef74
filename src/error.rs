use thiserror::Error;
use tokio::task::JoinError;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("HTTP request failed: {0}")]
    Reqwest(String),
    #[error("HTTP status {status} fetching {url}")]
    HttpStatus { status: u16, url: String },
    #[error("Filesystem I/O error: {0}")]
    Io(String),
    #[error("JSON serialization error: {0}")]
    SerdeSerialize(String),
    #[error("JSON parsing error: {0}")]
    SerdeParse(String),
    #[error("Timeout during operation: {0}")]
    Timeout(String),
    #[error("Invalid argument provided: {0}")]
    Argument(String),
    #[error("Tokio task join error: {0}")]
    JoinError(String),
    #[error("Unexpected internal error: {0}")]
    Unexpected(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Reqwest(e.to_string())
    }
}
impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}
impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() || e.is_eof() || e.is_syntax() {
            AppError::SerdeParse(e.to_string())
        } else {
            AppError::SerdeSerialize(e.to_string())
        }
    }
}
impl From<JoinError> for AppError {
    fn from(e: JoinError) -> Self {
        AppError::JoinError(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
