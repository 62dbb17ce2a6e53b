//! Line-oriented text format for sparse matrices
//!
//! ```text
//! rows=<n>
//! cols=<n>
//! (<row>,<col>,<value>)
//! ...
//! ```

pub mod constants;
pub mod text;

pub use constants::RESULT_BANNER;
pub use text::{
    parse_document, parse_header, parse_triple, render_result, write_document, write_entries,
    write_result,
};
