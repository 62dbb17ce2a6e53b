//! Read-only queries over a loaded matrix

use std::io::Write;
use std::ops::Range;

use serde::Serialize;
use spmat_core::{parse_range, MatrixOperations, SparseAccess, SparseMatrix, Triple};

use crate::config::OutputFormat;
use crate::error::Result;
use crate::Value;

/// Summary of a matrix's shape and fill
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatrixInfo {
    pub rows: usize,
    pub cols: usize,
    pub nnz: usize,
    /// Fraction of cells that are stored, 0 for an empty shape
    pub density: f64,
}

impl MatrixInfo {
    pub fn of<M: SparseAccess>(matrix: &M) -> Self {
        let (rows, cols) = matrix.dimensions();
        let nnz = matrix.nnz();
        let cells = rows as f64 * cols as f64;
        Self {
            rows,
            cols,
            nnz,
            density: if cells > 0.0 { nnz as f64 / cells } else { 0.0 },
        }
    }
}

/// What part of a matrix to fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Element { row: usize, col: usize },
    Row(usize),
    Col(usize),
    Rows(Range<usize>),
}

/// Build a query from the optional row, column and `start:end` range arguments
///
/// A range takes precedence. With nothing given, every row of the declared
/// shape is selected.
pub fn select_query(
    row: Option<usize>,
    col: Option<usize>,
    row_range: Option<&str>,
    rows: usize,
) -> Result<Query> {
    Ok(match (row, col, row_range) {
        (_, _, Some(range)) => Query::Rows(parse_range(range)?),
        (Some(row), Some(col), None) => Query::Element { row, col },
        (Some(row), None, None) => Query::Row(row),
        (None, Some(col), None) => Query::Col(col),
        (None, None, None) => Query::Rows(0..rows),
    })
}

/// Stored entries selected by `query`, ascending by row then column
///
/// An element query that hits an implicit zero returns nothing.
pub fn run_query<T: Value>(matrix: &SparseMatrix<T>, query: &Query) -> Vec<Triple<T>> {
    match *query {
        Query::Element { row, col } => matrix
            .get_element(row, col)
            .map(|value| Triple::new(row, col, value))
            .into_iter()
            .collect(),
        Query::Row(row) => matrix
            .get_row(row)
            .into_iter()
            .map(|(col, value)| Triple::new(row, col, value))
            .collect(),
        Query::Col(col) => matrix
            .get_col(col)
            .into_iter()
            .map(|(row, value)| Triple::new(row, col, value))
            .collect(),
        // Walks stored entries, so the cost does not depend on the declared shape
        Query::Rows(ref range) => matrix
            .entries()
            .into_iter()
            .filter(|triple| range.contains(&triple.row))
            .collect(),
    }
}

/// Print the entries a query selected
///
/// Text output lists one `(row,col,value)` line per hit, or a notice when
/// nothing is stored there. JSON output is always the array of hits.
pub fn print_query<W: Write, T: Value>(
    out: &mut W,
    query: &Query,
    hits: &[Triple<T>],
    output: OutputFormat,
) -> Result<()> {
    match output {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, hits)?;
            writeln!(out)?;
        }
        OutputFormat::Text if hits.is_empty() => {
            writeln!(out, "No stored entries for {query:?}")?;
        }
        OutputFormat::Text => {
            for hit in hits {
                writeln!(out, "({},{},{})", hit.row, hit.col, hit.value)?;
            }
        }
    }
    Ok(())
}

/// Print a matrix summary under `label`
pub fn print_info<W: Write>(
    out: &mut W,
    label: &str,
    info: &MatrixInfo,
    output: OutputFormat,
) -> Result<()> {
    match output {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, info)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "{label}")?;
            writeln!(out, "  rows:    {}", info.rows)?;
            writeln!(out, "  cols:    {}", info.cols)?;
            writeln!(out, "  nnz:     {}", info.nnz)?;
            writeln!(out, "  density: {:.6}", info.density)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spmat_core::DuplicatePolicy;

    fn sample() -> SparseMatrix<i64> {
        SparseMatrix::from_triples(
            4,
            3,
            [(0, 0, 1), (0, 2, 2), (2, 0, 3), (3, 1, 4)],
            DuplicatePolicy::LastWins,
        )
        .unwrap()
    }

    #[test]
    fn test_info() {
        let info = MatrixInfo::of(&sample());
        assert_eq!((info.rows, info.cols, info.nnz), (4, 3, 4));
        assert!((info.density - 4.0 / 12.0).abs() < 1e-12);
        assert_eq!(MatrixInfo::of(&SparseMatrix::<i64>::new(0, 5)).density, 0.0);
    }

    #[test]
    fn test_element_query() {
        let m = sample();
        assert_eq!(
            run_query(&m, &Query::Element { row: 0, col: 2 }),
            vec![Triple::new(0, 2, 2)]
        );
        assert!(run_query(&m, &Query::Element { row: 1, col: 1 }).is_empty());
    }

    #[test]
    fn test_row_and_col_queries() {
        let m = sample();
        assert_eq!(
            run_query(&m, &Query::Row(0)),
            vec![Triple::new(0, 0, 1), Triple::new(0, 2, 2)]
        );
        assert_eq!(
            run_query(&m, &Query::Col(0)),
            vec![Triple::new(0, 0, 1), Triple::new(2, 0, 3)]
        );
    }

    #[test]
    fn test_row_range_query() {
        let m = sample();
        assert_eq!(
            run_query(&m, &Query::Rows(1..4)),
            vec![Triple::new(2, 0, 3), Triple::new(3, 1, 4)]
        );
        assert!(run_query(&m, &Query::Rows(10..usize::MAX)).is_empty());
    }

    #[test]
    fn test_row_range_ignores_declared_shape() {
        // One stored entry in a huge declared shape
        let m = SparseMatrix::from_triples(usize::MAX, 1, [(5, 0, 1i64)], DuplicatePolicy::LastWins)
            .unwrap();
        assert_eq!(run_query(&m, &Query::Rows(0..m.rows())), vec![Triple::new(5, 0, 1)]);
        assert!(run_query(&m, &Query::Rows(6..usize::MAX)).is_empty());
    }

    #[test]
    fn test_select_query() {
        assert_eq!(
            select_query(Some(1), Some(2), None, 4).unwrap(),
            Query::Element { row: 1, col: 2 }
        );
        assert_eq!(select_query(Some(3), None, None, 4).unwrap(), Query::Row(3));
        assert_eq!(select_query(None, Some(0), None, 4).unwrap(), Query::Col(0));
        assert_eq!(select_query(None, None, Some("1:3"), 4).unwrap(), Query::Rows(1..3));
        assert_eq!(select_query(None, None, None, 4).unwrap(), Query::Rows(0..4));
        assert!(select_query(None, None, Some("3"), 4).is_err());
    }
}
