//! spmat - Sparse matrix calculator
//!
//! Loads two matrices in the sparse text format, adds, subtracts or
//! multiplies them, and prints the sparse result.
//!
//! ## Architecture
//!
//! - **spmat-core**: the matrix type, text grammar, validation and
//!   arithmetic (`no_std`, no I/O)
//! - **spmat**: file loading, result printing, the interactive menu and
//!   the command-line front end
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spmat::{load_pair, print_result, Operation, RunConfig};
//!
//! fn example() -> spmat::Result<()> {
//!     let config = RunConfig::default();
//!     let (a, b) = load_pair::<i64, _, _>("matrix1.txt", "matrix2.txt", &config)?;
//!     let product = Operation::Multiplication.apply(&a, &b)?;
//!     print_result(&mut std::io::stdout(), &product, config.output_format)?;
//!     Ok(())
//! }
//! ```

pub use spmat_core::{
    // Matrix and arithmetic
    add, multiply, subtract, DuplicatePolicy, Operation, SparseMatrix, Triple,
    // Access traits
    MatrixElement, MatrixOperations, SparseAccess,
    // Error handling
    ErrorCategory, MatrixError,
    // Text format and argument parsing
    format, parse_range,
};

pub mod config;
pub mod error;
pub mod inspect;
pub mod loader;
pub mod printer;
pub mod session;

pub use config::{log_filter_directive, OutputFormat, RunConfig, ValueType};
pub use error::{Result, SpmatError};
pub use inspect::{print_info, print_query, run_query, select_query, MatrixInfo, Query};
pub use loader::{load_matrix, load_pair};
pub use printer::print_result;
pub use session::{run_session, MenuChoice};

/// Element types the calculator can load, compute with and print
pub trait Value: MatrixElement + serde::Serialize {}

impl<T: MatrixElement + serde::Serialize> Value for T {}
