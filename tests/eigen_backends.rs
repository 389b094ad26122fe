//! Tests for the dominant-eigenvector backends.
//!
//! The power iteration is compared against the faer decomposition on random
//! symmetric positive matrices, in the same way an iterative solver is checked
//! against a direct one. Graph fixtures check the spectral meaning of the result.

use approx::assert_abs_diff_eq;
use densegraph::{
    DenseMatrix, EigenOptions, EigenSolver, EigenTarget, FaerEigenSolver, MatError, PowerIteration,
};
use rand::Rng;
use std::sync::Arc;

/// Random symmetric matrix with strictly positive entries, so the dominant
/// eigenvalue is simple (Perron–Frobenius) and the power iteration converges.
fn random_positive_symmetric(n: usize) -> DenseMatrix<f64> {
    let mut rng = rand::thread_rng();
    let m = DenseMatrix::from_fn(n, n, |_, _| rng.gen_range(0.1..1.0)).unwrap();
    m.add(&m.transpose()).unwrap()
}

fn residual(m: &DenseMatrix<f64>, v: &[f64]) -> f64 {
    let x = DenseMatrix::from_row_major(v.len(), 1, v.to_vec()).unwrap();
    let av = m.matmul(&x).unwrap();
    let lambda: f64 = v.iter().zip(av.as_slice()).map(|(a, b)| a * b).sum();
    av.as_slice()
        .iter()
        .zip(v)
        .map(|(a, b)| (a - lambda * b).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Power iteration agrees with the dense decomposition on a random positive matrix.
#[test]
fn power_iteration_vs_faer_on_positive_matrix() {
    let n = 12;
    let m = random_positive_symmetric(n);
    let opts = EigenOptions::default().with_tol(1e-12);
    let v_faer = m.top_eigenvector_with(&FaerEigenSolver, &opts).unwrap();
    let v_power = m.top_eigenvector_with(&PowerIteration, &opts).unwrap();
    for i in 0..n {
        assert_abs_diff_eq!(v_faer[i], v_power[i], epsilon = 1e-6);
    }
    assert!(residual(&m, &v_faer) < 1e-8);
    // Perron vector of a positive matrix is positive
    assert!(v_faer.iter().all(|&x| x > 0.0));
}

/// The complete graph K_n has the uniform vector as its dominant eigenvector.
#[test]
fn complete_graph_uniform_vector() {
    let n = 5;
    let k = DenseMatrix::from_fn(n, n, |i, j| if i == j { 0.0 } else { 1.0 })
        .unwrap()
        .with_eigen_solver(Arc::new(FaerEigenSolver));
    let v = k.top_eigenvector().unwrap();
    let u = 1.0 / (n as f64).sqrt();
    for x in v {
        assert_abs_diff_eq!(x, u, epsilon = 1e-10);
    }
}

/// The largest-algebraic target picks a different vector than largest-magnitude
/// when the most negative eigenvalue dominates.
#[test]
fn targets_differ_on_negative_spectrum() {
    // eigenvalues of [[-4,1],[1,-4]] are -3 and -5
    let m = DenseMatrix::<f64>::from_row_major(2, 2, vec![-4.0, 1.0, 1.0, -4.0]).unwrap();
    let lm = m.top_eigenvector_with(&FaerEigenSolver, &EigenOptions::default()).unwrap();
    let la = m
        .top_eigenvector_with(
            &FaerEigenSolver,
            &EigenOptions::default().with_target(EigenTarget::LargestAlgebraic),
        )
        .unwrap();
    let h = 1.0 / 2.0f64.sqrt();
    // λ = -5: (1, -1)/√2, sign-normalised so the first max-magnitude entry is positive
    assert_abs_diff_eq!(lm[0].abs(), h, epsilon = 1e-10);
    assert_abs_diff_eq!(lm[0] + lm[1], 0.0, epsilon = 1e-10);
    // λ = -3: (1, 1)/√2
    assert_abs_diff_eq!(la[0], h, epsilon = 1e-10);
    assert_abs_diff_eq!(la[1], h, epsilon = 1e-10);
}

/// Without an attached backend the operation fails explicitly.
#[test]
fn no_backend_is_unsupported() {
    let m = random_positive_symmetric(3);
    assert!(matches!(m.top_eigenvector(), Err(MatError::Unsupported(_))));
}

/// Non-symmetric and non-square inputs are rejected before any backend runs.
#[test]
fn asymmetric_input_rejected() {
    let rect = DenseMatrix::<f64>::new(2, 3).unwrap();
    assert!(matches!(
        rect.top_eigenvector_with(&FaerEigenSolver, &EigenOptions::default()),
        Err(MatError::NotSymmetric)
    ));
    let mut m = random_positive_symmetric(3);
    m.set(0, 2, 42.0).unwrap();
    assert!(matches!(
        m.top_eigenvector_with(&PowerIteration, &EigenOptions::default()),
        Err(MatError::NotSymmetric)
    ));
}

/// A user-supplied backend receives the packed upper triangle.
#[test]
fn custom_backend_sees_packed_triangle() {
    struct Recorder;
    impl EigenSolver<i32> for Recorder {
        fn dominant_eigenvector(
            &self,
            n: usize,
            packed_upper: &[i32],
            _opts: &EigenOptions,
        ) -> Result<Vec<i32>, MatError> {
            assert_eq!(packed_upper, &[1, 2, 3, 4, 5, 6]);
            Ok(vec![7; n])
        }
    }
    let m = DenseMatrix::from_row_major(3, 3, vec![1, 2, 3, 2, 4, 5, 3, 5, 6])
        .unwrap()
        .with_eigen_solver(Arc::new(Recorder));
    assert_eq!(m.top_eigenvector().unwrap(), vec![7, 7, 7]);
    // clones share the backend
    assert_eq!(m.clone().top_eigenvector().unwrap(), vec![7, 7, 7]);
}

/// A minor eigenvector aligned with a smooth start vector does not fool the
/// power iteration: both backends return the λ = 10 direction.
#[test]
fn power_iteration_matches_faer_when_minor_vector_is_smooth() {
    // 10·uuᵀ + wwᵀ with u = (5,-4)/√41, w = (4,5)/√41
    let m = DenseMatrix::<f64>::from_row_major(
        2,
        2,
        vec![266.0 / 41.0, -180.0 / 41.0, -180.0 / 41.0, 185.0 / 41.0],
    )
    .unwrap();
    let opts = EigenOptions::default();
    let v_faer = m.top_eigenvector_with(&FaerEigenSolver, &opts).unwrap();
    let v_power = m.top_eigenvector_with(&PowerIteration, &opts).unwrap();
    let s = 41.0f64.sqrt();
    assert_abs_diff_eq!(v_faer[0], 5.0 / s, epsilon = 1e-10);
    assert_abs_diff_eq!(v_faer[1], -4.0 / s, epsilon = 1e-10);
    assert_abs_diff_eq!(v_power[0], v_faer[0], epsilon = 1e-8);
    assert_abs_diff_eq!(v_power[1], v_faer[1], epsilon = 1e-8);
}

/// The path P3 is bipartite (eigenvalues ±√2 and 0): the power iteration
/// gives up within a few steps, the faer backend returns (1, √2, 1) / 2.
#[test]
fn bipartite_path_fails_fast_under_power_iteration() {
    let p3 = DenseMatrix::<f64>::from_edge_list_str("3 3\n4\n1 2\n2 1\n2 3\n3 2\n").unwrap();
    let opts = EigenOptions::default();

    let (_, stats) = PowerIteration.run(3, p3.as_slice(), &opts).unwrap();
    assert!(!stats.converged);
    assert!(stats.iterations < 20, "ran {} iterations", stats.iterations);
    assert!(matches!(
        p3.top_eigenvector_with(&PowerIteration, &opts),
        Err(MatError::EigenSolve(_))
    ));

    let v = p3.top_eigenvector_with(&FaerEigenSolver, &opts).unwrap();
    assert_abs_diff_eq!(v[0], 0.5, epsilon = 1e-10);
    assert_abs_diff_eq!(v[1], 2.0f64.sqrt() / 2.0, epsilon = 1e-10);
    assert_abs_diff_eq!(v[2], 0.5, epsilon = 1e-10);
}
