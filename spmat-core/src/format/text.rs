//! Parsing and rendering of the text format
//!
//! Parsing is strict about structure and lenient about whitespace: each
//! line is trimmed, blank lines are skipped, and whitespace around header
//! values and triple fields is ignored. Anything else that deviates from
//! the grammar is a format error naming the 1-based line.

use core::fmt::Write;

use alloc::string::String;

use super::constants::{
    COLS_KEY, FIELD_SEPARATOR, HEADER_SEPARATOR, RESULT_BANNER, ROWS_KEY, TRIPLE_CLOSE, TRIPLE_OPEN,
};
use crate::matrix::{DuplicatePolicy, SparseMatrix, Triple};
use crate::traits::MatrixElement;
use crate::validation::parse_usize;
use crate::{MatrixError, Result};

fn malformed(line: &str, reason: &'static str) -> MatrixError {
    MatrixError::Format {
        line: None,
        content: line.into(),
        reason,
    }
}

/// Replace the content of a field-level error with the whole line
fn whole_line(err: MatrixError, line: &str) -> MatrixError {
    match err {
        MatrixError::Format { line: at, reason, .. } => MatrixError::Format {
            line: at,
            content: line.into(),
            reason,
        },
        other => other,
    }
}

/// Parse a `key=<non-negative integer>` header line
pub fn parse_header(line: &str, key: &str) -> Result<usize> {
    let trimmed = line.trim();
    let (name, value) = trimmed
        .split_once(HEADER_SEPARATOR)
        .ok_or_else(|| malformed(trimmed, "expected a `key=value` header"))?;

    if name.trim() != key {
        return Err(malformed(
            trimmed,
            if key == ROWS_KEY {
                "expected the `rows=` header"
            } else {
                "expected the `cols=` header"
            },
        ));
    }

    parse_usize(value.trim()).map_err(|err| whole_line(err, trimmed))
}

/// Parse one `(<row>,<col>,<value>)` entry line
pub fn parse_triple<T: MatrixElement>(line: &str) -> Result<Triple<T>> {
    let trimmed = line.trim();
    let inner = trimmed
        .strip_prefix(TRIPLE_OPEN)
        .and_then(|rest| rest.strip_suffix(TRIPLE_CLOSE))
        .ok_or_else(|| malformed(trimmed, "entry must be wrapped in parentheses"))?;

    let mut fields = inner.split(FIELD_SEPARATOR).map(str::trim);
    let (Some(row), Some(col), Some(value), None) =
        (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(malformed(trimmed, "expected exactly three fields: row, col, value"));
    };

    let row = parse_usize(row).map_err(|err| whole_line(err, trimmed))?;
    let col = parse_usize(col).map_err(|err| whole_line(err, trimmed))?;
    let value = T::parse_value(value).ok_or_else(|| malformed(trimmed, "value is not a number"))?;

    Ok(Triple::new(row, col, value))
}

/// Parse a complete document into a matrix
///
/// The first two non-blank lines are the `rows=` and `cols=` headers; every
/// following non-blank line is an entry.
pub fn parse_document<T: MatrixElement>(
    text: &str,
    policy: DuplicatePolicy,
) -> Result<SparseMatrix<T>> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());
    let end_line = text.lines().count() + 1;

    let mut header = |key: &str| -> Result<usize> {
        match lines.next() {
            Some((line_no, line)) => parse_header(line, key).map_err(|err| err.at_line(line_no)),
            None => Err(MatrixError::format_at(
                end_line,
                "",
                if key == ROWS_KEY {
                    "missing `rows=` header"
                } else {
                    "missing `cols=` header"
                },
            )),
        }
    };
    let rows = header(ROWS_KEY)?;
    let cols = header(COLS_KEY)?;

    let mut matrix = SparseMatrix::new(rows, cols);
    for (line_no, line) in lines {
        let triple = parse_triple::<T>(line).map_err(|err| err.at_line(line_no))?;
        matrix
            .insert(triple, policy)
            .map_err(|err| whole_line(err, line.trim()).at_line(line_no))?;
    }
    Ok(matrix)
}

/// Write entries as `(<row>,<col>,<value>)` lines, ascending by row then column
pub fn write_entries<W: Write, T: MatrixElement>(
    out: &mut W,
    matrix: &SparseMatrix<T>,
) -> core::fmt::Result {
    for Triple { row, col, value } in matrix.entries() {
        writeln!(
            out,
            "{TRIPLE_OPEN}{row}{FIELD_SEPARATOR}{col}{FIELD_SEPARATOR}{value}{TRIPLE_CLOSE}"
        )?;
    }
    Ok(())
}

/// Write the result banner followed by the entries
pub fn write_result<W: Write, T: MatrixElement>(
    out: &mut W,
    matrix: &SparseMatrix<T>,
) -> core::fmt::Result {
    writeln!(out, "{RESULT_BANNER}")?;
    write_entries(out, matrix)
}

/// Write a full document that [`parse_document`] reads back
pub fn write_document<W: Write, T: MatrixElement>(
    out: &mut W,
    matrix: &SparseMatrix<T>,
) -> core::fmt::Result {
    writeln!(out, "{ROWS_KEY}{HEADER_SEPARATOR}{}", matrix.rows())?;
    writeln!(out, "{COLS_KEY}{HEADER_SEPARATOR}{}", matrix.cols())?;
    write_entries(out, matrix)
}

/// Render the result form into a fresh string
pub fn render_result<T: MatrixElement>(matrix: &SparseMatrix<T>) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_result(&mut out, matrix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SparseAccess;

    fn reason_and_line(err: MatrixError) -> (&'static str, Option<usize>) {
        match err {
            MatrixError::Format { reason, line, .. } => (reason, line),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_parse_header() {
        assert_eq!(parse_header("rows=3", ROWS_KEY), Ok(3));
        assert_eq!(parse_header("  cols = 12 ", COLS_KEY), Ok(12));
        assert!(parse_header("rows:3", ROWS_KEY).is_err());
        assert!(parse_header("cols=3", ROWS_KEY).is_err());
        assert!(parse_header("rows=-1", ROWS_KEY).is_err());
        assert!(parse_header("rows=x", ROWS_KEY).is_err());
    }

    #[test]
    fn test_parse_triple() {
        assert_eq!(parse_triple::<i64>("(0,1,5)"), Ok(Triple::new(0, 1, 5)));
        assert_eq!(parse_triple::<i64>("  (2, 3, -7)  "), Ok(Triple::new(2, 3, -7)));
        assert_eq!(parse_triple::<f64>("(1,1,2.5)"), Ok(Triple::new(1, 1, 2.5)));
    }

    #[test]
    fn test_parse_triple_rejections() {
        let cases = [
            ("(1,2)", "expected exactly three fields: row, col, value"),
            ("(1,2,3,4)", "expected exactly three fields: row, col, value"),
            ("(a,b,c)", "expected a non-negative integer"),
            ("(1,2,c)", "value is not a number"),
            ("1,2,3", "entry must be wrapped in parentheses"),
            ("(1,2,3", "entry must be wrapped in parentheses"),
            ("(-1,2,3)", "negative values are not allowed"),
            ("(1.5,2,3)", "expected a non-negative integer"),
            ("(1,2,3.5)", "value is not a number"),
        ];
        for (line, expected) in cases {
            let err = parse_triple::<i64>(line).unwrap_err();
            assert_eq!(reason_and_line(err), (expected, None), "line {line}");
        }
    }

    #[test]
    fn test_parse_document() {
        let text = "rows=3\ncols=4\n(0,0,2)\n\n  (2,3,-1)\n(1,2,0)\n";
        let m = parse_document::<i64>(text, DuplicatePolicy::LastWins).unwrap();
        assert_eq!(m.dimensions(), (3, 4));
        assert_eq!(m.nnz(), 2);
        assert_eq!(m.get_element(2, 3), Some(-1));
    }

    #[test]
    fn test_parse_document_reports_line_numbers() {
        let err = parse_document::<i64>(
            "rows=2\ncols=2\n(0,0,1)\n\n(1,2)\n",
            DuplicatePolicy::LastWins,
        )
        .unwrap_err();
        assert_eq!(
            reason_and_line(err),
            ("expected exactly three fields: row, col, value", Some(5))
        );

        // Out of range coordinates carry the full line
        let err = parse_document::<i64>("rows=2\ncols=2\n(2,0,1)\n", DuplicatePolicy::LastWins)
            .unwrap_err();
        assert_eq!(
            err,
            MatrixError::Format {
                line: Some(3),
                content: "(2,0,1)".into(),
                reason: "row index outside declared rows",
            }
        );

        let err = parse_document::<i64>("rows=2\n", DuplicatePolicy::LastWins).unwrap_err();
        assert_eq!(reason_and_line(err), ("missing `cols=` header", Some(2)));

        let err = parse_document::<i64>("cols=2\nrows=2\n", DuplicatePolicy::LastWins).unwrap_err();
        assert_eq!(reason_and_line(err), ("expected the `rows=` header", Some(1)));
    }

    #[test]
    fn test_duplicate_policy_in_documents() {
        let text = "rows=1\ncols=1\n(0,0,2)\n(0,0,3)\n";
        let last = parse_document::<i64>(text, DuplicatePolicy::LastWins).unwrap();
        assert_eq!(last.get(0, 0), 3);
        let sum = parse_document::<i64>(text, DuplicatePolicy::Accumulate).unwrap();
        assert_eq!(sum.get(0, 0), 5);
    }

    #[test]
    fn test_write_result_is_sorted() {
        let m = SparseMatrix::from_triples(
            3,
            3,
            [(2, 2, 13i64), (0, 0, 5), (1, 1, 9)],
            DuplicatePolicy::LastWins,
        )
        .unwrap();
        assert_eq!(
            render_result(&m),
            "Sparse Matrix Result:\n(0,0,5)\n(1,1,9)\n(2,2,13)\n"
        );
        assert_eq!(render_result(&SparseMatrix::<i64>::new(2, 2)), "Sparse Matrix Result:\n");
    }

    #[test]
    fn test_write_document_reads_back() {
        let m = SparseMatrix::from_triples(
            2,
            5,
            [(1, 4, -3i64), (0, 2, 8)],
            DuplicatePolicy::LastWins,
        )
        .unwrap();
        let mut text = String::new();
        write_document(&mut text, &m).unwrap();
        assert_eq!(text, "rows=2\ncols=5\n(0,2,8)\n(1,4,-3)\n");
        assert_eq!(parse_document::<i64>(&text, DuplicatePolicy::LastWins), Ok(m));
    }
}
