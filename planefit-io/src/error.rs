//! Error types for I/O operations

use thiserror::Error;

/// Errors that can occur while reading input or writing results
#[derive(Error, Debug)]
pub enum IoError {
    #[error("Input file not found: {path}")]
    FileNotFound { path: String },

    #[error("Parse error: {message}")]
    Parse { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for I/O operations
pub type IoResult<T> = std::result::Result<T, IoError>;
