pub(crate) use super::*;
use crate::primitives::SparseMatrix;

#[test]
fn test_from_vec() {
    let m = DenseMatrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.shape(), (2, 3));
    assert!((m.get(0, 0) - 1.0).abs() < 1e-12);
    assert!((m.get(1, 2) - 6.0).abs() < 1e-12);
}

#[test]
fn test_from_vec_error() {
    let result = DenseMatrix::from_vec(2, 3, vec![1.0, 2.0, 3.0]);
    assert!(matches!(result, Err(MatriksError::ShapeError { .. })));
}

#[test]
fn test_from_rows() {
    let m = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]])
        .expect("rows are rectangular");
    assert_eq!(m.shape(), (3, 2));
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_from_rows_ragged() {
    let result = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
    match result {
        Err(MatriksError::ShapeError { reason }) => assert!(reason.contains("row 1")),
        other => panic!("expected ShapeError, got {other:?}"),
    }
}

#[test]
fn test_from_rows_empty() {
    let m = DenseMatrix::from_rows(&[]).expect("empty input is a 0x0 matrix");
    assert_eq!(m.shape(), (0, 0));
}

#[test]
fn test_zeros() {
    let m = DenseMatrix::zeros(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
    assert_eq!(m.nnz(), 0);
}

#[test]
fn test_identity() {
    let m = DenseMatrix::identity(3);
    assert_eq!(m.get(0, 0), 1.0);
    assert_eq!(m.get(1, 1), 1.0);
    assert_eq!(m.get(2, 2), 1.0);
    assert_eq!(m.get(0, 1), 0.0);
    assert_eq!(m.nnz(), 3);
}

#[test]
fn test_column_vector() {
    let v = DenseMatrix::column_vector(&[1.0, 2.0, 3.0]);
    assert_eq!(v.shape(), (3, 1));
    assert_eq!(v.column(0), vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_row_and_column() {
    let m = DenseMatrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
        .expect("test data has correct dimensions: 2*3=6 elements");
    assert_eq!(m.row(1), vec![4.0, 5.0, 6.0]);
    assert_eq!(m.column(1), vec![2.0, 5.0]);
    assert_eq!(m.row_slice(0), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_row_nonzeros_skips_zeros() {
    let m = DenseMatrix::from_rows(&[vec![0.0, 2.0, 0.0, 4.0]]).expect("single row");
    let nz: Vec<_> = m.row_nonzeros(0).collect();
    assert_eq!(nz, vec![(1, 2.0), (3, 4.0)]);
}

#[test]
fn test_nonzeros_row_major() {
    let m = DenseMatrix::from_rows(&[vec![1.0, 0.0], vec![0.0, 2.0]]).expect("2x2");
    let nz: Vec<_> = m.nonzeros().collect();
    assert_eq!(nz, vec![(0, 0, 1.0), (1, 1, 2.0)]);
}

#[test]
fn test_try_get_out_of_bounds() {
    let m = DenseMatrix::zeros(2, 2);
    assert_eq!(m.try_get(1, 1), Ok(0.0));
    assert_eq!(
        m.try_get(2, 0),
        Err(MatriksError::IndexOutOfBounds {
            row: 2,
            col: 0,
            shape: (2, 2)
        })
    );
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_get_column_out_of_bounds_panics() {
    // Column overflow must not alias into the next row.
    let m = DenseMatrix::zeros(2, 2);
    let _ = m.get(0, 2);
}

#[test]
fn test_from_matrix_like_sparse() {
    let sparse = SparseMatrix::from_triplets(2, 3, [(0, 2, 7.0), (1, 0, -1.0)])
        .expect("coordinates are in range");
    let dense = DenseMatrix::from_matrix_like(&sparse);
    assert_eq!(dense.to_rows(), vec![vec![0.0, 0.0, 7.0], vec![-1.0, 0.0, 0.0]]);
}

#[test]
fn test_map() {
    let m = DenseMatrix::from_vec(1, 3, vec![1.0, 2.0, 3.0]).expect("1x3");
    let doubled = m.map(|x| x * 2.0);
    assert_eq!(doubled.as_slice(), &[2.0, 4.0, 6.0]);
    // The source matrix is untouched.
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_display() {
    let m = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.5]]).expect("2x2");
    assert_eq!(m.to_string(), "[1.0, 2.0]\n[3.0, 4.5]");
}

#[test]
fn test_serde_roundtrip() {
    let m = DenseMatrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).expect("2x2");
    let json = serde_json::to_string(&m).expect("serializable");
    let back: DenseMatrix = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, m);
}

#[test]
fn test_deserialize_rejects_wrong_data_length() {
    let result = serde_json::from_str::<DenseMatrix>(r#"{"data":[1.0],"rows":2,"cols":2}"#);
    let err = result.expect_err("1 value cannot fill a 2x2 matrix");
    assert!(err.to_string().contains("data length 1"), "{err}");
}
