//! Failure types for PDF text extraction.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ExtractError>;

/// Coarse category of an [`ExtractError`], for callers that only need to branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputNotFound,
    Io,
    Decode,
    UnsupportedFeature,
    PageExtraction,
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode PDF: {0}")]
    Decode(String),

    /// The document uses something the backend cannot handle (e.g. encryption).
    #[error("unsupported PDF feature: {0}")]
    UnsupportedFeature(String),

    #[error("could not extract text from page {page}: {reason}")]
    PageExtraction { page: u32, reason: String },
}

impl ExtractError {
    /// Classify an I/O failure on the input path.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ExtractError::InputNotFound { path }
        } else {
            ExtractError::Io { path, source }
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ExtractError::InputNotFound { .. } => ErrorKind::InputNotFound,
            ExtractError::Io { .. } => ErrorKind::Io,
            ExtractError::Decode(_) => ErrorKind::Decode,
            ExtractError::UnsupportedFeature(_) => ErrorKind::UnsupportedFeature,
            ExtractError::PageExtraction { .. } => ErrorKind::PageExtraction,
        }
    }
}
