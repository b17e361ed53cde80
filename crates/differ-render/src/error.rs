//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while rendering a diff.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The requested format identifier is not `terminal`, `html`, or `json`.
    #[error("unsupported diff format: {0}")]
    UnsupportedFormat(String),
}

/// Convenience alias for render results.
pub type RenderResult<T> = Result<T, RenderError>;
