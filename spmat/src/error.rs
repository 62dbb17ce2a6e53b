//! Error type for the loader, printer and CLI

use std::path::PathBuf;

use spmat_core::MatrixError;
use thiserror::Error;

/// Errors surfaced by the I/O layer around the core
#[derive(Debug, Error)]
pub enum SpmatError {
    /// A matrix file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed input in a matrix file
    #[error("{}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: MatrixError,
    },

    /// Construction or arithmetic failure
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// Writing results failed
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// JSON serialization failed
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl SpmatError {
    /// The core error behind this failure, if any
    pub fn matrix_error(&self) -> Option<&MatrixError> {
        match self {
            SpmatError::Load { source, .. } => Some(source),
            SpmatError::Matrix(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpmatError>;
