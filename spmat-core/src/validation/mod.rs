//! Input and precondition validation
//!
//! Pure functions with no I/O: coordinate and shape checks, and the
//! numeric field parsers shared by the text format and the CLI.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_index, validate_inner_dims, validate_same_shape};
pub use parsing::{parse_range, parse_usize};
