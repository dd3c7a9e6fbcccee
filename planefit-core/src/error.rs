//! Error types for planefit

use thiserror::Error;

/// Main error type for planefit operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Insufficient points: need at least {required}, found {found}")]
    InsufficientPoints { required: usize, found: usize },

    #[error("Algorithm error: {0}")]
    Algorithm(String),
}

/// Result type alias for planefit operations
pub type Result<T> = std::result::Result<T, Error>;
