//! Error types for the chronospan front ends.
//!
//! The age engine itself never fails: invalid dates produce an absent
//! result (see [`crate::age::InvalidInput`]).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
