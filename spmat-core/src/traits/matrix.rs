//! Read-only access traits for sparse matrices
//!
//! These traits let callers (the query command, printers, tests) inspect a
//! matrix without depending on how its entries are stored.

use alloc::vec::Vec;

use super::element::MatrixElement;

/// Core sparse matrix trait for storage-agnostic access
pub trait SparseAccess {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the element is zero (not stored) or if the
    /// position is out of bounds.
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;
}

/// Extension trait for row/column slicing
pub trait MatrixOperations: SparseAccess {
    /// Get all non-zero elements in a row as `(col, value)` pairs
    ///
    /// Elements are returned in column order.
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// Get all non-zero elements in a column as `(row, value)` pairs
    ///
    /// Elements are returned in row order.
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;
}
