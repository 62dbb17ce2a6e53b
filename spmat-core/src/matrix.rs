//! Dictionary-of-keys sparse matrix
//!
//! Entries live in a hash map keyed by `(row, col)`. Absent keys are
//! implicit zeros and a stored value is never zero.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::traits::{MatrixElement, MatrixOperations, SparseAccess};
use crate::validation::validate_index;
use crate::{MatrixError, Result};

/// One `(row, col, value)` entry
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triple<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T> Triple<T> {
    pub const fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }
}

impl<T> From<(usize, usize, T)> for Triple<T> {
    fn from((row, col, value): (usize, usize, T)) -> Self {
        Self { row, col, value }
    }
}

/// How repeated coordinates in one input are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The last occurrence replaces earlier ones
    #[default]
    LastWins,
    /// Occurrences are summed
    Accumulate,
}

/// Sparse matrix holding only nonzero entries
///
/// Dimensions are fixed at construction. Arithmetic always produces a new
/// matrix; operands are only ever borrowed.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseMatrix<T> {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), T>,
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// Create an empty `rows x cols` matrix
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Build a matrix from triples, validating every coordinate
    ///
    /// Zero values are dropped. Repeated coordinates follow `policy`.
    pub fn from_triples<I>(
        rows: usize,
        cols: usize,
        triples: I,
        policy: DuplicatePolicy,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new(rows, cols);
        for triple in triples {
            matrix.insert(triple.into(), policy)?;
        }
        Ok(matrix)
    }

    /// Insert one parsed triple while building a matrix
    ///
    /// Out-of-range coordinates are format errors without a line number;
    /// text parsers attach one with [`MatrixError::at_line`].
    pub fn insert(&mut self, triple: Triple<T>, policy: DuplicatePolicy) -> Result<()> {
        let Triple { row, col, value } = triple;
        validate_index(row, col, self.rows, self.cols)?;

        let value = match (policy, self.entries.get(&(row, col))) {
            (DuplicatePolicy::Accumulate, Some(&existing)) => {
                existing.checked_add(value).ok_or_else(|| MatrixError::Format {
                    line: None,
                    content: alloc::format!("({row},{col},{value})"),
                    reason: "accumulated duplicate overflows the value type",
                })?
            }
            _ => value,
        };
        self.put(row, col, value);
        Ok(())
    }

    /// Set a single element, removing the entry when `value` is zero
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.put(row, col, value);
        Ok(())
    }

    /// Store or clear an in-bounds cell
    pub(crate) fn put(&mut self, row: usize, col: usize, value: T) {
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Value at `(row, col)`, zero when not stored
    pub fn get(&self, row: usize, col: usize) -> T {
        self.entries.get(&(row, col)).copied().unwrap_or_else(T::zero)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All stored entries, ascending by row then column
    pub fn entries(&self) -> Vec<Triple<T>> {
        let mut triples: Vec<Triple<T>> = self
            .entries
            .iter()
            .map(|(&(row, col), &value)| Triple { row, col, value })
            .collect();
        triples.sort_unstable_by_key(|t| (t.row, t.col));
        triples
    }

    /// Stored entries in arbitrary order
    pub(crate) fn iter_unordered(&self) -> impl Iterator<Item = ((usize, usize), T)> + '_ {
        self.entries.iter().map(|(&key, &value)| (key, value))
    }

    pub(crate) fn contains(&self, row: usize, col: usize) -> bool {
        self.entries.contains_key(&(row, col))
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
            entries: self
                .entries
                .iter()
                .map(|(&(row, col), &value)| ((col, row), value))
                .collect(),
        }
    }
}

impl<T: MatrixElement> SparseAccess for SparseMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.entries.get(&(row, col)).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        self.shape()
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }
}

impl<T: MatrixElement> MatrixOperations for SparseMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        let mut row: Vec<(usize, T)> = self
            .entries
            .iter()
            .filter(|&(&(r, _), _)| r == row_index)
            .map(|(&(_, c), &v)| (c, v))
            .collect();
        row.sort_unstable_by_key(|&(c, _)| c);
        row
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        let mut col: Vec<(usize, T)> = self
            .entries
            .iter()
            .filter(|&(&(_, c), _)| c == col_index)
            .map(|(&(r, _), &v)| (r, v))
            .collect();
        col.sort_unstable_by_key(|&(r, _)| r);
        col
    }
}
