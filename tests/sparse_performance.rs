//! Sparse multiplication must cost time proportional to the non-zeros.
//!
//! Work is measured by counting every cell read and every non-zero yielded
//! through the `MatrixLike` contract, so the budget check is deterministic.
//! A loose wall-clock comparison against the dense path backs it up.

use matriks::ops::{self, Promotion};
use matriks::prelude::*;
use matriks::primitives::{approx_eq, Storage};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Delegates to a sparse matrix and counts the work done through it.
struct Counting {
    inner: SparseMatrix,
    reads: AtomicUsize,
}

impl Counting {
    fn new(inner: SparseMatrix) -> Self {
        Self {
            inner,
            reads: AtomicUsize::new(0),
        }
    }

    fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }
}

impl MatrixLike for Counting {
    fn rows(&self) -> usize {
        self.inner.rows()
    }

    fn cols(&self) -> usize {
        self.inner.cols()
    }

    fn get(&self, row: usize, col: usize) -> f64 {
        self.reads.fetch_add(1, Ordering::Relaxed);
        self.inner.get(row, col)
    }

    fn storage(&self) -> Storage {
        Storage::Sparse
    }

    fn row_nonzeros(&self, row: usize) -> Box<dyn Iterator<Item = (usize, f64)> + '_> {
        Box::new(self.inner.row_nonzeros(row).inspect(|_| {
            self.reads.fetch_add(1, Ordering::Relaxed);
        }))
    }

    fn nonzeros(&self) -> Box<dyn Iterator<Item = (usize, usize, f64)> + '_> {
        Box::new(self.inner.nonzeros().inspect(|_| {
            self.reads.fetch_add(1, Ordering::Relaxed);
        }))
    }

    fn nnz(&self) -> usize {
        self.inner.nnz()
    }
}

fn two_entry(n: usize) -> SparseMatrix {
    SparseMatrix::from_triplets(n, n, [(0, 0, 1.0), (n - 1, n - 1, 1.0)]).expect("in range")
}

#[test]
fn sparse_multiply_reads_only_nonzeros() {
    let a = Counting::new(two_entry(1000));
    let b = Counting::new(two_entry(1000));

    let product = ops::multiply(&a, &b).expect("1000x1000 * 1000x1000");

    assert!(product.is_sparse());
    assert_eq!(product.shape(), (1000, 1000));
    assert_eq!(product.nnz(), 2);
    assert_eq!(product.get(0, 0), 1.0);
    assert_eq!(product.get(999, 999), 1.0);

    // One pass over A's non-zeros and one matching row of B each.
    assert!(a.reads() <= a.nnz(), "A was read {} times", a.reads());
    assert!(b.reads() <= 2 * b.nnz(), "B was read {} times", b.reads());
}

#[test]
fn sparse_add_reads_only_nonzeros() {
    let a = Counting::new(two_entry(1000));
    let b = Counting::new(SparseMatrix::identity(1000));

    let sum = ops::add(&a, &b).expect("same shape");

    assert!(sum.is_sparse());
    assert_eq!(sum.nnz(), 1000);
    assert_eq!(sum.get(0, 0), 2.0);
    // Non-zero iteration plus one cell read per stored coordinate on each side.
    assert!(a.reads() <= a.nnz() + 1000);
    assert!(b.reads() <= b.nnz() + 1000);
}

#[test]
fn sparse_multiply_beats_dense_path() {
    let a = two_entry(1000);
    let b = two_entry(1000);
    let dense_a = DenseMatrix::from_matrix_like(&a);
    let dense_b = DenseMatrix::from_matrix_like(&b);

    let start = Instant::now();
    let sparse_product = ops::multiply(&a, &b).expect("conformable");
    let sparse_elapsed = start.elapsed();

    let start = Instant::now();
    let dense_product = ops::multiply_with(&dense_a, &dense_b, Promotion::AlwaysDense).expect("conformable");
    let dense_elapsed = start.elapsed();

    assert!(approx_eq(&sparse_product, &dense_product, 0.0));
    assert!(
        sparse_elapsed < dense_elapsed,
        "sparse {sparse_elapsed:?} vs dense {dense_elapsed:?}"
    );
    assert!(sparse_elapsed.as_secs_f64() < 1.0);
}
