//! Writing results
//!
//! Text output is the banner plus sorted `(row,col,value)` lines produced by
//! [`spmat_core::format`]. JSON output carries the same entries in the same
//! order together with the dimensions.

use std::io::Write;

use serde::Serialize;
use spmat_core::{format, SparseMatrix, Triple};

use crate::config::OutputFormat;
use crate::error::Result;
use crate::Value;

#[derive(Serialize)]
struct JsonMatrix<T> {
    rows: usize,
    cols: usize,
    entries: Vec<Triple<T>>,
}

/// Print a matrix in the requested format
pub fn print_result<W: Write, T: Value>(
    out: &mut W,
    matrix: &SparseMatrix<T>,
    output: OutputFormat,
) -> Result<()> {
    match output {
        OutputFormat::Text => {
            out.write_all(format::render_result(matrix).as_bytes())?;
        }
        OutputFormat::Json => {
            let doc = JsonMatrix {
                rows: matrix.rows(),
                cols: matrix.cols(),
                entries: matrix.entries(),
            };
            serde_json::to_writer_pretty(&mut *out, &doc)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
