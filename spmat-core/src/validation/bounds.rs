//! Coordinate and shape validation
//!
//! Pure precondition checks run before any matrix is built or combined.

use alloc::format;

use crate::ops::Operation;
use crate::MatrixError;

/// Validate that a coordinate lies inside a `rows x cols` matrix
///
/// Raised as a format error: an out-of-range coordinate can only come
/// from malformed input. The caller attaches the line number.
pub fn validate_index(row: usize, col: usize, rows: usize, cols: usize) -> Result<(), MatrixError> {
    if row >= rows || col >= cols {
        return Err(MatrixError::Format {
            line: None,
            content: format!("({row},{col})"),
            reason: if row >= rows {
                "row index outside declared rows"
            } else {
                "column index outside declared cols"
            },
        });
    }
    Ok(())
}

/// Validate that two shapes are identical (addition and subtraction)
pub fn validate_same_shape(
    operation: Operation,
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), MatrixError> {
    if left != right {
        return Err(MatrixError::DimensionMismatch {
            operation,
            left,
            right,
        });
    }
    Ok(())
}

/// Validate that `left.cols == right.rows` (multiplication)
pub fn validate_inner_dims(left: (usize, usize), right: (usize, usize)) -> Result<(), MatrixError> {
    if left.1 != right.0 {
        return Err(MatrixError::DimensionMismatch {
            operation: Operation::Multiplication,
            left,
            right,
        });
    }
    Ok(())
}
