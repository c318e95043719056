//! Crate error type.
//!
//! Only settings persistence and frame export can fail. Pointer tracking and
//! painting degrade to centered pupils and default colors instead.

use thiserror::Error;

/// Errors that can occur while persisting settings or exporting a frame
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Render error: {0}")]
    Render(String),
}

/// Result type for fallible crate operations
pub type Result<T> = std::result::Result<T, Error>;
