use std::path::PathBuf;

use spmat::{
    load_matrix, print_info, print_query, run_query, select_query, MatrixError, MatrixInfo,
    OutputFormat, Query, RunConfig, SparseMatrix, SpmatError,
};

fn rect() -> SparseMatrix<i64> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../demos/rect_3x4.txt");
    load_matrix::<i64, _>(path, &RunConfig::default()).unwrap()
}

fn query_output(
    matrix: &SparseMatrix<i64>,
    row: Option<usize>,
    col: Option<usize>,
    row_range: Option<&str>,
    output: OutputFormat,
) -> String {
    let query = select_query(row, col, row_range, matrix.rows()).unwrap();
    let hits = run_query(matrix, &query);
    let mut out = Vec::new();
    print_query(&mut out, &query, &hits, output).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_query_text_output() {
    let m = rect();

    assert_eq!(
        query_output(&m, None, None, None, OutputFormat::Text),
        "(0,0,1)\n(0,2,2)\n(1,1,3)\n(2,0,4)\n(2,3,5)\n"
    );
    assert_eq!(
        query_output(&m, None, None, Some("1:3"), OutputFormat::Text),
        "(1,1,3)\n(2,0,4)\n(2,3,5)\n"
    );
    assert_eq!(
        query_output(&m, None, Some(0), None, OutputFormat::Text),
        "(0,0,1)\n(2,0,4)\n"
    );
    assert_eq!(
        query_output(&m, Some(1), Some(0), None, OutputFormat::Text),
        "No stored entries for Element { row: 1, col: 0 }\n"
    );
}

#[test]
fn test_query_json_output() {
    let m = rect();

    let text = query_output(&m, Some(2), None, None, OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"row": 2, "col": 0, "value": 4},
            {"row": 2, "col": 3, "value": 5}
        ])
    );

    // Misses are an empty array rather than a notice
    let text = query_output(&m, None, None, Some("3:9"), OutputFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value, serde_json::json!([]));
}

#[test]
fn test_malformed_row_range() {
    for range in ["", "5", "4:2", "a:b"] {
        let err = select_query(None, None, Some(range), 3).unwrap_err();
        assert!(
            matches!(err, SpmatError::Matrix(MatrixError::Format { .. })),
            "{range:?}: {err}"
        );
    }
}

#[test]
fn test_row_range_over_sparse_shape() {
    let m = SparseMatrix::from_triples(
        usize::MAX,
        usize::MAX,
        [(7, 3, 2i64), (usize::MAX - 1, 0, 9)],
        spmat::DuplicatePolicy::LastWins,
    )
    .unwrap();

    let query = select_query(None, None, None, m.rows()).unwrap();
    assert_eq!(query, Query::Rows(0..usize::MAX));
    let mut out = Vec::new();
    print_query(&mut out, &query, &run_query(&m, &query), OutputFormat::Text).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        format!("(7,3,2)\n({},0,9)\n", usize::MAX - 1)
    );
}

#[test]
fn test_info_output() {
    let info = MatrixInfo::of(&rect());

    let mut out = Vec::new();
    print_info(&mut out, "rect_3x4.txt", &info, OutputFormat::Text).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "rect_3x4.txt\n  rows:    3\n  cols:    4\n  nnz:     5\n  density: 0.416667\n"
    );

    let mut out = Vec::new();
    print_info(&mut out, "rect_3x4.txt", &info, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"rows": 3, "cols": 4, "nnz": 5, "density": 5.0 / 12.0})
    );
}
