#![no_std]

//! spmat core - Sparse matrix type, text format and arithmetic
//!
//! This crate holds everything that does not touch I/O: the
//! dictionary-of-keys [`SparseMatrix`], the line-oriented text format, the
//! validation helpers and the addition, subtraction and multiplication
//! algorithms. All of them operate on stored entries only.
//!
//! ```
//! use spmat_core::{format, DuplicatePolicy, SparseMatrix};
//!
//! let a: SparseMatrix<i64> = format::parse_document(
//!     "rows=2\ncols=2\n(0,0,2)\n(1,1,4)\n",
//!     DuplicatePolicy::LastWins,
//! )?;
//! let b = SparseMatrix::from_triples(2, 2, [(0, 0, 3), (1, 0, 1)], DuplicatePolicy::LastWins)?;
//!
//! let sum = a.add(&b)?;
//! assert_eq!(
//!     format::render_result(&sum),
//!     "Sparse Matrix Result:\n(0,0,5)\n(1,0,1)\n(1,1,4)\n"
//! );
//! # Ok::<(), spmat_core::MatrixError>(())
//! ```

extern crate alloc;

pub mod error;
pub mod format;
pub mod matrix;
pub mod ops;
pub mod traits;
pub mod validation;

pub use error::{ErrorCategory, MatrixError, Result};
pub use matrix::{DuplicatePolicy, SparseMatrix, Triple};
pub use ops::{add, multiply, subtract, Operation};
pub use traits::{MatrixElement, MatrixOperations, SparseAccess};
pub use validation::parse_range;
