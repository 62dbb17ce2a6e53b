//! Abstract interfaces for sparse matrices
//!
//! Element constraints and storage-agnostic access traits.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::{MatrixOperations, SparseAccess};
