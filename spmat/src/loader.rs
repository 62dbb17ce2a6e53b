//! Reading matrix files
//!
//! A thin layer over [`spmat_core::format::parse_document`] that adds the
//! file path to every failure.

use std::fs;
use std::path::Path;

use spmat_core::{format, SparseAccess, SparseMatrix};
use tracing::{debug, warn};

use crate::config::RunConfig;
use crate::error::{Result, SpmatError};
use crate::Value;

/// Load a single matrix file
pub fn load_matrix<T: Value, P: AsRef<Path>>(
    path: P,
    config: &RunConfig,
) -> Result<SparseMatrix<T>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "cannot read matrix file");
        SpmatError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let matrix = format::parse_document::<T>(&text, config.duplicate_policy).map_err(|source| {
        warn!(path = %path.display(), error = %source, "rejected matrix file");
        SpmatError::Load {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let (rows, cols) = matrix.dimensions();
    debug!(path = %path.display(), rows, cols, nnz = matrix.nnz(), "loaded matrix");
    Ok(matrix)
}

/// Load the two operands of a binary operation
pub fn load_pair<T: Value, P: AsRef<Path>, Q: AsRef<Path>>(
    first: P,
    second: Q,
    config: &RunConfig,
) -> Result<(SparseMatrix<T>, SparseMatrix<T>)> {
    Ok((load_matrix(first, config)?, load_matrix(second, config)?))
}
