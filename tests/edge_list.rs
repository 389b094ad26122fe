//! Tests for loading edge-list files and rendering matrices as text.

use densegraph::{DenseMatrix, MatError};
use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `contents` to a fresh temporary file.
fn edge_file(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

/// The directed triangle 1→2→3→1 lands on the expected entries.
#[test]
fn loads_directed_triangle() {
    let f = edge_file("3\n3\n3\n1 2\n2 3\n3 1\n");
    let m = DenseMatrix::<i32>::from_edge_list_file(f.path()).unwrap();
    assert_eq!(m.shape(), (3, 3));
    for i in 0..3 {
        for j in 0..3 {
            let expected = matches!((i, j), (0, 1) | (1, 2) | (2, 0)) as i32;
            assert_eq!(m.get(i, j).unwrap(), expected, "entry ({i}, {j})");
        }
    }
    assert!(!m.is_symmetric());
    assert_eq!(m.neighbors(0).unwrap(), vec![2]);
    assert_eq!(m.row_sums(), vec![1, 1, 1]);
}

/// Repeated edges and trailing whitespace do not change the result.
#[test]
fn duplicate_edges_are_idempotent() {
    let f = edge_file("2 2\n2\n1 2\n1 2\n2 1\n\n   \n");
    let m = DenseMatrix::<f64>::from_edge_list_file(f.path()).unwrap();
    assert_eq!(m.as_slice(), &[0.0, 1.0, 1.0, 0.0]);
    assert!(m.is_symmetric());
}

/// Vertex ids beyond the declared dimensions are rejected.
#[test]
fn out_of_range_vertex_in_file() {
    let f = edge_file("2 2 1\n3 1\n");
    let err = DenseMatrix::<i32>::from_edge_list_file(f.path()).unwrap_err();
    assert!(matches!(err, MatError::IndexOutOfRange { row: 2, col: 0, .. }));
}

/// A path that cannot be opened reports `FileNotFound` with that path.
#[test]
fn missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    match DenseMatrix::<i32>::from_edge_list_file(&path) {
        Err(MatError::FileNotFound(p)) => assert_eq!(p, path),
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

/// Text rendering follows the logical row layout.
#[test]
fn display_of_loaded_matrix() {
    let m = DenseMatrix::<i32>::from_edge_list_str("2 3 1\n1 3\n").unwrap();
    let text = m.to_string();
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("Size: 2*3"));
    assert_eq!(lines.next(), Some("0 0 1 "));
    assert_eq!(lines.next(), Some("0 0 0 "));
    assert!(text.ends_with("\n\n\n\n"));
}
