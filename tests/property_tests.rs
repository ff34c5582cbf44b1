//! Property-based tests using proptest.
//!
//! These tests verify the algebraic properties of the matrix operations.

use mtools::prelude::*;
use proptest::prelude::*;

// Strategy for generating small matrices
fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
    proptest::collection::vec(-100.0f32..100.0, rows * cols).prop_map(move |data| {
        Matrix::from_vec(rows, cols, data).expect("Test data should be valid")
    })
}

// Strategy for a pair of same-shaped matrices with a random shape
fn same_shape_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
    (1..=6usize, 1..=6usize)
        .prop_flat_map(|(rows, cols)| (matrix_strategy(rows, cols), matrix_strategy(rows, cols)))
}

// Strategy for a multiplication-compatible pair (m x k, k x n)
fn dot_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
    (1..=5usize, 1..=5usize, 1..=5usize)
        .prop_flat_map(|(m, k, n)| (matrix_strategy(m, k), matrix_strategy(k, n)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn create_is_zero_filled(rows in 0..32usize, cols in 0..32usize) {
        let m = create_matrix(rows, cols).expect("small shapes allocate");
        prop_assert_eq!(m.len(), rows * cols);
        prop_assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn add_then_sub_restores((a, b) in same_shape_pair()) {
        let back = (&a + &b).and_then(|s| &s - &b).expect("same shape");
        for (x, y) in back.as_slice().iter().zip(a.as_slice()) {
            prop_assert!((x - y).abs() < 1e-3);
        }
    }

    #[test]
    fn add_is_commutative((a, b) in same_shape_pair()) {
        let ab = add(&a, &b).expect("same shape");
        let ba = add(&b, &a).expect("same shape");
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn hadamard_is_commutative((a, b) in same_shape_pair()) {
        let ab = mul(&a, &b).expect("same shape");
        let ba = mul(&b, &a).expect("same shape");
        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn dot_shape_and_first_element((a, b) in dot_pair()) {
        let c = dot(&a, &b).expect("compatible");
        prop_assert_eq!(c.shape(), (a.n_rows(), b.n_cols()));

        // c[0,0] as an in-order sum over the shared dimension
        let mut expected = 0.0f32;
        for k in 0..a.n_cols() {
            expected += a.get(0, k) * b.get(k, 0);
        }
        prop_assert_eq!(c.get(0, 0), expected);
    }

    #[test]
    fn dot_with_identity_is_noop(m in (1..=6usize, 1..=6usize).prop_flat_map(|(r, c)| matrix_strategy(r, c))) {
        let eye = Matrix::eye(m.n_rows()).expect("valid");
        prop_assert_eq!(dot(&eye, &m).expect("compatible"), m);
    }

    #[test]
    fn mismatched_shapes_are_rejected(rows in 1..6usize, cols in 1..6usize) {
        let a = create_matrix(rows, cols).expect("valid");
        let b = create_matrix(rows + 1, cols).expect("valid");
        prop_assert!(add(&a, &b).is_err());
        prop_assert!(div(&a, &b).is_err());
        // a.cols != (rows + 1) unless they happen to be equal
        if cols != rows + 1 {
            prop_assert!(dot(&a, &b).is_err());
        }
    }
}
