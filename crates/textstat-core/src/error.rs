//! Error types for textstat-core.
//!
//! Analysis itself is total and has no error type; only rendering a
//! statistics record can fail.

use thiserror::Error;

/// Errors that can occur while rendering statistics.
#[derive(Error, Debug)]
pub enum RenderError {
    /// JSON serialization of the record failed.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing into the output buffer failed.
    #[error("formatting failed: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Result type alias using [`RenderError`].
pub type RenderResult<T> = Result<T, RenderError>;
