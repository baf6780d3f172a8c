use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    /// Input was missing, not an integer, or does not fit in an `i32`.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CheckError>;
