use thiserror::Error;

/// Failure while producing the invoice document.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("pdf backend error: {0}")]
    Pdf(#[from] printpdf::Error),

    #[error("image could not be embedded: {0}")]
    Image(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    pub fn image(err: impl std::fmt::Display) -> Self {
        Self::Image(err.to_string())
    }
}
