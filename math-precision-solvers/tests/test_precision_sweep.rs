//! Accuracy across sizes and precisions
//!
//! Mirrors how the solvers are driven in practice: build a structured
//! matrix, pick a ±1 true solution, form `b = A x`, solve, and score the
//! maximum absolute error.

use math_precision_solvers::metrics::max_abs_error;
use math_precision_solvers::systems::{
    DEFAULT_SEED, bordered_reciprocal, random_sign_vector, symmetric_ratio, tridiagonal_mk,
    tridiagonal_mk_banded,
};
use math_precision_solvers::{
    DenseMatrix, LinearOperator, Precision, condition_number_l1, invert, solve_dense,
    thomas_solve,
};

const M: f64 = 4.0;
const K: f64 = 5.0;

fn dense_error(a: &DenseMatrix, precision: Precision, seed: u64) -> f64 {
    let x_true = random_sign_vector(a.rows(), seed);
    let b = a.apply(&x_true, precision).unwrap();
    let x = solve_dense(a, &b, precision).unwrap();
    max_abs_error(&x, &x_true, precision)
}

#[test]
fn test_dense_recovers_solution_within_condition_bound() {
    for p in Precision::ALL {
        for n in [2, 5, 10, 25, 50] {
            let a = tridiagonal_mk(n, M, K, p);
            let cond = condition_number_l1(&a, p).unwrap();
            assert!(cond.is_finite());

            let err = dense_error(&a, p, DEFAULT_SEED + n as u64);
            let bound = 10.0 * n as f64 * p.epsilon() * cond;
            assert!(err <= bound, "n = {n}, {p}: error {err:e} above bound {bound:e}");
        }
    }
}

#[test]
fn test_symmetric_ratio_solves() {
    for n in [3, 8, 16] {
        let a = symmetric_ratio(n, Precision::Double);
        let cond = condition_number_l1(&a, Precision::Double).unwrap();
        let err = dense_error(&a, Precision::Double, DEFAULT_SEED);
        assert!(err <= 10.0 * n as f64 * f64::EPSILON * cond, "n = {n}: {err:e}");
    }
}

#[test]
fn test_single_precision_is_never_more_accurate() {
    for n in 4..=8 {
        let single = dense_error(&bordered_reciprocal(n, Precision::Single), Precision::Single, 1);
        let double = dense_error(&bordered_reciprocal(n, Precision::Double), Precision::Double, 1);
        assert!(
            single >= double,
            "n = {n}: single {single:e} < double {double:e}"
        );
    }
}

#[test]
fn test_ill_conditioning_grows_with_size() {
    let small = condition_number_l1(&bordered_reciprocal(3, Precision::Double), Precision::Double)
        .unwrap();
    let large = condition_number_l1(&bordered_reciprocal(8, Precision::Double), Precision::Double)
        .unwrap();
    assert!(large > 1e3 * small, "cond(3) = {small:e}, cond(8) = {large:e}");
}

#[test]
fn test_inverse_times_matrix_near_identity() {
    for p in Precision::ALL {
        let n = 12;
        let a = tridiagonal_mk(n, M, K, p);
        let inv = invert(&a, p).unwrap();
        let cond = condition_number_l1(&a, p).unwrap();
        let product = inv.matmul(&a).unwrap();
        let tol = 10.0 * n as f64 * p.epsilon() * cond;

        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { 1.0 } else { 0.0 };
                let diff = (product.get(i, j) - expected).abs();
                assert!(diff <= tol, "{p} ({i}, {j}): {diff:e} > {tol:e}");
            }
        }
    }
}

#[test]
fn test_thomas_agrees_with_dense() {
    for p in Precision::ALL {
        for n in [2, 3, 17, 100] {
            let banded = tridiagonal_mk_banded(n, M, K, p);
            let x_true = random_sign_vector(n, DEFAULT_SEED);
            let b = banded.apply(&x_true, p).unwrap();

            let thomas = thomas_solve(&banded, &b, p).unwrap();
            assert!(thomas.ok, "n = {n}, {p}");
            let dense = solve_dense(&banded.to_dense(), &b, p).unwrap();

            let tol = 100.0 * p.epsilon();
            assert!(max_abs_error(&thomas.x, &x_true, p) <= tol);
            assert!(max_abs_error(&dense, &x_true, p) <= tol);
        }
    }
}

#[test]
fn test_independent_calls_from_threads() {
    let systems: Vec<DenseMatrix> = (2..8)
        .map(|n| tridiagonal_mk(n, M, K, Precision::Double))
        .collect();
    let sequential: Vec<f64> = systems
        .iter()
        .map(|a| dense_error(a, Precision::Double, DEFAULT_SEED))
        .collect();

    let threaded: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = systems
            .iter()
            .map(|a| scope.spawn(move || dense_error(a, Precision::Double, DEFAULT_SEED)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(sequential, threaded);
}
