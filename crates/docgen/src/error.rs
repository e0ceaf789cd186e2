//! Typed error type for the docgen crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocGenError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("pdf error: {0}")]
    Pdf(#[from] printpdf::Error),
}
