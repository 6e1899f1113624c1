// =========================================================================
// MatrixLike contract: every representation must agree on shape, element
// access and non-zero iteration for the same logical content.
// =========================================================================

use super::*;
use crate::ops;
use crate::validators::{is_identity, is_symmetric};

const CONTENT: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 5.0, 0.0], [7.0, 0.0, 9.0]];

fn rows() -> Vec<Vec<f64>> {
    CONTENT.iter().map(|r| r.to_vec()).collect()
}

fn representations() -> Vec<Box<dyn MatrixLike>> {
    let dense = DenseMatrix::from_rows(&rows()).expect("valid");
    let sparse = SparseMatrix::from_rows(&rows()).expect("valid");
    vec![
        Box::new(dense.clone()),
        Box::new(sparse.clone()),
        Box::new(Matrix::from(dense)),
        Box::new(Matrix::from(sparse)),
    ]
}

/// A scaled identity that only implements the three required methods.
#[derive(Debug)]
struct ScaledIdentity {
    n: usize,
    scale: f64,
}

impl MatrixLike for ScaledIdentity {
    fn rows(&self) -> usize {
        self.n
    }

    fn cols(&self) -> usize {
        self.n
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.n && col < self.n, "out of bounds");
        if row == col {
            self.scale
        } else {
            0.0
        }
    }
}

#[test]
fn contract_shape_and_get_agree() {
    for m in representations() {
        assert_eq!(m.shape(), (3, 3));
        for (i, row) in CONTENT.iter().enumerate() {
            for (j, &expected) in row.iter().enumerate() {
                assert_eq!(m.get(i, j), expected, "cell ({i},{j}) of {:?}", m.storage());
            }
        }
    }
}

#[test]
fn contract_nonzero_iteration_agrees() {
    let expected = vec![(0, 0, 1.0), (1, 1, 5.0), (2, 0, 7.0), (2, 2, 9.0)];
    for m in representations() {
        assert_eq!(m.nonzeros().collect::<Vec<_>>(), expected);
        assert_eq!(m.nnz(), 4);
        assert_eq!(m.row_nonzeros(2).collect::<Vec<_>>(), vec![(0, 7.0), (2, 9.0)]);
    }
}

#[test]
fn contract_row_and_column_copies_agree() {
    for m in representations() {
        assert_eq!(m.row(2), vec![7.0, 0.0, 9.0]);
        assert_eq!(m.column(0), vec![1.0, 0.0, 7.0]);
    }
}

#[test]
fn contract_storage_tag() {
    let reps = representations();
    let tags: Vec<Storage> = reps.iter().map(|m| m.storage()).collect();
    assert_eq!(
        tags,
        vec![Storage::Dense, Storage::Sparse, Storage::Dense, Storage::Sparse]
    );
}

#[test]
fn contract_defaults_cover_new_representation() {
    let m = ScaledIdentity { n: 4, scale: 2.0 };
    assert_eq!(m.storage(), Storage::Dense);
    assert_eq!(m.nnz(), 4);
    assert_eq!(m.row_nonzeros(3).collect::<Vec<_>>(), vec![(3, 2.0)]);
    assert!(m.try_get(4, 0).is_err());
}

#[test]
fn contract_operations_accept_new_representation_unmodified() {
    let custom = ScaledIdentity { n: 3, scale: 1.0 };
    let dense = DenseMatrix::from_rows(&rows()).expect("valid");

    let product = ops::multiply(&dense, &custom).expect("3x3 * 3x3");
    assert!(approx_eq(&product, &dense, 0.0));

    let sum = ops::add(&custom, &SparseMatrix::identity(3)).expect("same shape");
    assert_eq!(sum.get(1, 1), 2.0);

    assert!(is_identity(&custom));
    assert!(is_symmetric(&ScaledIdentity { n: 5, scale: 3.0 }));
    assert_eq!(ops::determinant(&ScaledIdentity { n: 4, scale: 2.0 }), Ok(16.0));
}

#[test]
fn contract_approx_eq_rejects_shape_difference() {
    assert!(!approx_eq(&DenseMatrix::zeros(2, 3), &SparseMatrix::zeros(3, 2), 1.0));
}

#[test]
fn contract_matrix_enum_accessors() {
    let m = Matrix::from(SparseMatrix::identity(2));
    assert!(m.is_sparse());
    assert!(m.as_sparse().is_some());
    assert!(m.as_dense().is_none());
    assert_eq!(m.clone().into_dense(), DenseMatrix::identity(2));
    assert_eq!(m.to_string(), "[1.0, 0.0]\n[0.0, 1.0]");
}
