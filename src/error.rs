// src/error.rs
use crate::container::ContainerError;
use crate::scene::DecodeError;
use inkpress_render_core::CanvasError;
use thiserror::Error;

/// Boxed cause reported by a substitutable backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A comprehensive error type for the notebook export pipeline.
///
/// Every variant keeps its originating cause reachable through
/// `std::error::Error::source`.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Input unavailable: {0}")]
    InputUnavailable(#[from] ContainerError),

    #[error("Page record truncated: expected at least {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    #[error("Malformed scene: {0}")]
    MalformedScene(#[from] DecodeError),

    #[error("Canvas rejected a draw command: {0}")]
    CanvasWriteFailed(#[from] CanvasError),

    #[error("Full-document renderer failed: {0}")]
    RenderBackendFailed(#[source] BoxError),

    #[error("Output I/O failed while trying to {action}: {source}")]
    OutputIOFailed {
        action: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration is invalid: {0}")]
    Config(String),
}

impl ExportError {
    pub(crate) fn output(action: &'static str) -> impl FnOnce(std::io::Error) -> ExportError {
        move |source| ExportError::OutputIOFailed { action, source }
    }
}
