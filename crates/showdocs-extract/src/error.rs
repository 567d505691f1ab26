//! Extraction error type.

use std::path::PathBuf;

/// Error returned when a page cannot be read or understood.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The page could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// Page path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The page has no recognizable declaration.
    #[error("no declaration found in {}", .0.display())]
    NoDeclaration(PathBuf),
    /// No canned content for the page (mock reader).
    #[error("page not found: {}", .0.display())]
    NotFound(PathBuf),
}

impl ExtractError {
    /// Create an I/O error with path context.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
