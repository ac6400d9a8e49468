//! Error types for lm75-dissect.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors opening or reading a capture
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV export
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON config or output errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
