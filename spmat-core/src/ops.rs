//! Sparse arithmetic
//!
//! All three operations work on stored entries only and never densify.
//! Operands are borrowed; each call returns a fresh matrix or an error,
//! never a partial result.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::traits::MatrixElement;
use crate::validation::{validate_inner_dims, validate_same_shape};
use crate::{MatrixError, Result, SparseMatrix};

/// The arithmetic operations a caller can select
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
}

impl Operation {
    pub const ALL: [Operation; 3] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
    ];

    /// Lowercase name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
        }
    }

    /// Run this operation on two operands
    pub fn apply<T: MatrixElement>(
        self,
        a: &SparseMatrix<T>,
        b: &SparseMatrix<T>,
    ) -> Result<SparseMatrix<T>> {
        match self {
            Operation::Addition => add(a, b),
            Operation::Subtraction => subtract(a, b),
            Operation::Multiplication => multiply(a, b),
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let title = match self {
            Operation::Addition => "Addition",
            Operation::Subtraction => "Subtraction",
            Operation::Multiplication => "Multiplication",
        };
        f.write_str(title)
    }
}

/// Elementwise sum of two equally shaped matrices
pub fn add<T: MatrixElement>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    merge(Operation::Addition, a, b, T::checked_add)
}

/// Elementwise difference `a - b` of two equally shaped matrices
pub fn subtract<T: MatrixElement>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    merge(Operation::Subtraction, a, b, T::checked_sub)
}

/// Union walk over both key sets, shared by addition and subtraction
///
/// Keys only in `b` are combined against an implicit zero on the left, so
/// subtraction negates them.
fn merge<T: MatrixElement>(
    operation: Operation,
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
    combine: fn(T, T) -> Option<T>,
) -> Result<SparseMatrix<T>> {
    validate_same_shape(operation, a.shape(), b.shape())?;

    let mut result = SparseMatrix::new(a.rows(), a.cols());
    let overflow = |(row, col): (usize, usize)| MatrixError::ArithmeticOverflow {
        operation,
        row,
        col,
    };

    for (key, left) in a.iter_unordered() {
        let value = combine(left, b.get(key.0, key.1)).ok_or_else(|| overflow(key))?;
        result.put(key.0, key.1, value);
    }
    for (key, right) in b.iter_unordered() {
        if a.contains(key.0, key.1) {
            continue;
        }
        let value = combine(T::zero(), right).ok_or_else(|| overflow(key))?;
        result.put(key.0, key.1, value);
    }

    Ok(result)
}

/// Matrix product `a * b`
///
/// `b` is grouped by row first so each stored `a[i,k]` only visits the
/// stored entries of row `k` in `b`. Contributions are summed in
/// ascending (row, col) order so floating point results and overflow
/// detection do not depend on hash iteration order.
pub fn multiply<T: MatrixElement>(
    a: &SparseMatrix<T>,
    b: &SparseMatrix<T>,
) -> Result<SparseMatrix<T>> {
    validate_inner_dims(a.shape(), b.shape())?;

    let mut b_rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
    for triple in b.entries() {
        b_rows
            .entry(triple.row)
            .or_default()
            .push((triple.col, triple.value));
    }

    let overflow = |row, col| MatrixError::ArithmeticOverflow {
        operation: Operation::Multiplication,
        row,
        col,
    };

    let mut accumulator: HashMap<(usize, usize), T> = HashMap::new();
    for left in a.entries() {
        let Some(b_row) = b_rows.get(&left.col) else {
            continue;
        };
        for &(col, right) in b_row {
            let product = left
                .value
                .checked_mul(right)
                .ok_or_else(|| overflow(left.row, col))?;
            let cell = accumulator.entry((left.row, col)).or_insert_with(T::zero);
            *cell = cell
                .checked_add(product)
                .ok_or_else(|| overflow(left.row, col))?;
        }
    }

    let mut result = SparseMatrix::new(a.rows(), b.cols());
    for ((row, col), value) in accumulator {
        result.put(row, col, value);
    }
    Ok(result)
}

impl<T: MatrixElement> SparseMatrix<T> {
    /// See [`add`]
    pub fn add(&self, other: &Self) -> Result<Self> {
        add(self, other)
    }

    /// See [`subtract`]
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        subtract(self, other)
    }

    /// See [`multiply`]
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        multiply(self, other)
    }
}
