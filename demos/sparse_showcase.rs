//! Sparse showcase: the same operations run on dense and sparse matrices.
//!
//! Run with `RUST_LOG=debug cargo run --example sparse_showcase` to see the
//! library's own tracing output.

use matriks::ops;
use matriks::prelude::*;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// An `n x n` matrix with ones in the two corners of the diagonal.
fn corner_ones(n: usize) -> matriks::Result<SparseMatrix> {
    SparseMatrix::from_triplets(n, n, [(0, 0, 1.0), (n - 1, n - 1, 1.0)])
}

fn main() -> matriks::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("--- Multiplying two 1000x1000 sparse matrices ---");
    let a = corner_ones(1000)?;
    let b = corner_ones(1000)?;

    let start = Instant::now();
    let product = ops::multiply(&a, &b)?;
    let elapsed = start.elapsed();

    info!(nnz = product.nnz(), ?elapsed, "sparse multiply finished");
    println!(
        "Multiplication took {:.6} seconds ({} non-zeros in a {}x{} result)",
        elapsed.as_secs_f64(),
        product.nnz(),
        product.rows(),
        product.cols()
    );

    println!();
    println!("--- Adding a dense matrix to a sparse one ---");
    let dense = DenseMatrix::from_rows(&[
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])?;
    let sparse = SparseMatrix::from_rows(&[
        vec![1.0, 0.0, 0.0],
        vec![0.0, 5.0, 0.0],
        vec![7.0, 0.0, 9.0],
    ])?;

    let sum = ops::add(&dense, &sparse)?;
    println!("Sum of the dense and sparse matrices:");
    println!("{sum}");

    println!();
    println!("det(sparse) = {}", ops::determinant(&sparse)?);
    println!(
        "square: {}, identity: {}, symmetric: {}",
        is_square(&sum),
        is_identity(&sum),
        is_symmetric(&sum)
    );

    Ok(())
}
