use criterion::{black_box, criterion_group, criterion_main, Criterion};
use densegraph::{DenseMatrix, EigenOptions, FaerEigenSolver, PowerIteration};

fn bench_graph_kernels(c: &mut Criterion) {
    let n = 24;
    // ring lattice: every vertex linked to its two nearest neighbours on each side
    let ring = DenseMatrix::from_fn(n, n, |i, j| {
        let d = (i + n - j) % n;
        if d == 1 || d == 2 || d == n - 1 || d == n - 2 { 1.0 } else { 0.0 }
    })
    .unwrap();
    let small = DenseMatrix::from_fn(8, 8, |i, j| ((i * 8 + j) as f64).sin()).unwrap();

    c.bench_function("kron 24x24 (x) 8x8", |ben| {
        ben.iter(|| black_box(&ring).kron(black_box(&small)).unwrap())
    });

    let big = ring.kron(&small).unwrap();
    c.bench_function("row_sums 192x192", |ben| ben.iter(|| black_box(&big).row_sums()));

    let sym = ring.add(&DenseMatrix::identity(n).unwrap()).unwrap();
    let opts = EigenOptions::default();
    c.bench_function("top eigenvector faer", |ben| {
        ben.iter(|| sym.top_eigenvector_with(&FaerEigenSolver, black_box(&opts)).unwrap())
    });
    c.bench_function("top eigenvector power iteration", |ben| {
        ben.iter(|| sym.top_eigenvector_with(&PowerIteration, black_box(&opts)).unwrap())
    });
}

criterion_group!(benches, bench_graph_kernels);
criterion_main!(benches);
