//! Error types for sparse matrix operations

use alloc::string::String;

use crate::ops::Operation;

/// Broad classification of a [`MatrixError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed input or out-of-range coordinates
    Format,
    /// Operand shapes incompatible with the requested operation
    Dimension,
    /// Result not representable in the element type
    Arithmetic,
}

/// Errors that can occur while building or combining sparse matrices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Malformed header, triple or out-of-bounds coordinate
    Format {
        /// 1-based line number, when the input came from text
        line: Option<usize>,
        /// The offending line or triple
        content: String,
        /// What was wrong with it
        reason: &'static str,
    },
    /// Operand shapes do not fit the operation
    DimensionMismatch {
        operation: Operation,
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Direct element access outside the matrix
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// An intermediate or final value overflowed the element type
    ArithmeticOverflow {
        operation: Operation,
        row: usize,
        col: usize,
    },
}

impl MatrixError {
    /// Build a format error tied to a line of text input
    pub fn format_at(line: usize, content: &str, reason: &'static str) -> Self {
        MatrixError::Format {
            line: Some(line),
            content: content.into(),
            reason,
        }
    }

    /// Attach a line number to a format error that was raised without one
    pub fn at_line(self, line_no: usize) -> Self {
        match self {
            MatrixError::Format {
                line: None,
                content,
                reason,
            } => MatrixError::Format {
                line: Some(line_no),
                content,
                reason,
            },
            other => other,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            MatrixError::Format { .. } | MatrixError::IndexOutOfBounds { .. } => {
                ErrorCategory::Format
            }
            MatrixError::DimensionMismatch { .. } => ErrorCategory::Dimension,
            MatrixError::ArithmeticOverflow { .. } => ErrorCategory::Arithmetic,
        }
    }
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::Format {
                line: Some(line),
                content,
                reason,
            } => write!(f, "format error on line {line} `{content}`: {reason}"),
            MatrixError::Format {
                line: None,
                content,
                reason,
            } => write!(f, "format error in `{content}`: {reason}"),
            MatrixError::DimensionMismatch {
                operation,
                left,
                right,
            } => write!(
                f,
                "dimension mismatch for {}: left is {}x{}, right is {}x{}",
                operation.name(),
                left.0,
                left.1,
                right.0,
                right.1
            ),
            MatrixError::IndexOutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(f, "index ({row},{col}) out of bounds for {rows}x{cols} matrix"),
            MatrixError::ArithmeticOverflow {
                operation,
                row,
                col,
            } => write!(
                f,
                "{} overflowed the element type at ({row},{col})",
                operation.name()
            ),
        }
    }
}

impl core::error::Error for MatrixError {}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
