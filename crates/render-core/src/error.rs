use thiserror::Error;

#[derive(Error, Debug)]
pub enum CanvasError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Draw command rejected: {0}")]
    Rejected(String),
    #[error("Canvas is full: limit of {limit} draw commands reached")]
    CapacityExceeded { limit: usize },
}

impl From<lopdf::Error> for CanvasError {
    fn from(err: lopdf::Error) -> Self {
        CanvasError::Pdf(err.to_string())
    }
}
