//! This module contains all custom errors used in this library.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    /// The input source could not be opened at all.
    #[error("Error opening file: {}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Import: IoError")]
    IoError(#[from] std::io::Error),
    #[error("Import: Input is malformed.")]
    InputMalformedError,
    #[error("Import: Integer is malformed.")]
    BadIntError(#[from] std::num::ParseIntError),
}

#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// The subset mask only has room for this many vertices.
    #[error("Too many vertices for exhaustive search: {0} (at most {max})", max = crate::subsets::MAX_VERTICES)]
    TooManyVertices(usize),
}
