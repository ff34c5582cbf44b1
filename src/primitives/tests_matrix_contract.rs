// =========================================================================
// FALSIFY-MX: Matrix value type contract
//
// References:
//   - Golub & Van Loan (2013) "Matrix Computations"
//   - IEEE 754-2008, division by zero
// =========================================================================

use super::*;

/// FALSIFY-MX-001: create yields rows*cols zeros
#[test]
fn falsify_mx_001_create_zero_filled() {
    for (rows, cols) in [(0, 0), (1, 1), (3, 5), (7, 2)] {
        let m = Matrix::new(rows, cols).expect("small shapes always allocate");
        assert_eq!(
            m.len(),
            rows * cols,
            "FALSIFIED MX-001: {rows}x{cols} buffer len={}",
            m.len()
        );
        assert!(
            m.as_slice().iter().all(|&x| x == 0.0),
            "FALSIFIED MX-001: {rows}x{cols} not zero-filled"
        );
    }
}

/// FALSIFY-MX-002: add on 2x3 and 3x2 is a dimension error
#[test]
fn falsify_mx_002_add_shape_mismatch() {
    let a = Matrix::new(2, 3).expect("valid");
    let b = Matrix::new(3, 2).expect("valid");
    let result = a.add(&b);

    assert!(
        matches!(result, Err(MtoolsError::DimensionMismatch { op: "add", .. })),
        "FALSIFIED MX-002: add(2x3, 3x2) = {result:?}"
    );
}

/// FALSIFY-MX-003: dot shape: (m×k) * (k×n) = (m×n)
#[test]
fn falsify_mx_003_dot_shape() {
    let a = Matrix::from_vec(2, 3, vec![1.0; 6]).expect("valid");
    let b = Matrix::from_vec(3, 4, vec![1.0; 12]).expect("valid");
    let c = a.dot(&b).expect("compatible dims");

    assert_eq!(
        c.shape(),
        (2, 4),
        "FALSIFIED MX-003: (2x3)*(3x4) shape={:?}, expected (2,4)",
        c.shape()
    );
}

/// FALSIFY-MX-004: dot on 2x3 and 4x2 is a dimension error
#[test]
fn falsify_mx_004_dot_inner_mismatch() {
    let a = Matrix::new(2, 3).expect("valid");
    let b = Matrix::new(4, 2).expect("valid");

    assert!(
        matches!(a.dot(&b), Err(MtoolsError::DimensionMismatch { op: "dot", .. })),
        "FALSIFIED MX-004: dot(2x3, 4x2) succeeded"
    );
}

/// FALSIFY-MX-005: Identity dot: I * A = A
#[test]
fn falsify_mx_005_identity_dot() {
    let a = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("valid");
    let eye = Matrix::eye(3).expect("valid");
    let result = eye.dot(&a).expect("compatible dims");

    assert_eq!(result, a, "FALSIFIED MX-005: I*A != A");
}

/// FALSIFY-MX-006: 2x2 scenario, Hadamard and dot of [1,2,3,4] with itself
#[test]
fn falsify_mx_006_square_scenario() {
    let mut m = Matrix::new(2, 2).expect("valid");
    m.set_data(&[1.0, 2.0, 3.0, 4.0]).expect("numeric input");

    let hadamard = m.mul(&m).expect("same shape");
    assert_eq!(
        hadamard.as_slice(),
        &[1.0, 4.0, 9.0, 16.0],
        "FALSIFIED MX-006: hadamard"
    );

    let product = m.dot(&m).expect("square");
    assert_eq!(
        product.as_slice(),
        &[7.0, 10.0, 15.0, 22.0],
        "FALSIFIED MX-006: dot"
    );
}

/// FALSIFY-MX-007: set_data rejects finite values beyond f32 range, buffer untouched
#[test]
fn falsify_mx_007_set_data_out_of_range() {
    let mut m = Matrix::from_vec(1, 2, vec![5.0, 6.0]).expect("valid");
    let result = m.set_data(&[1e300_f64, 2.0]);

    assert!(
        matches!(result, Err(MtoolsError::InvalidElement { index: 0, .. })),
        "FALSIFIED MX-007: set_data([1e300, 2]) = {result:?}"
    );
    assert_eq!(m.as_slice(), &[5.0, 6.0], "FALSIFIED MX-007: buffer modified");
}

mod matrix_proptest_falsify {
    use super::*;
    use proptest::prelude::*;

    fn fill(rows: usize, cols: usize, seed: u32) -> Matrix {
        let data: Vec<f32> = (0..rows * cols)
            .map(|i| ((i as f32 + seed as f32) * 0.37).sin() * 10.0)
            .collect();
        Matrix::from_vec(rows, cols, data).expect("valid")
    }

    /// FALSIFY-MX-008-prop: (a + b) - b ≈ a
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_008_prop_add_sub_roundtrip(
            rows in 1..=8usize,
            cols in 1..=8usize,
            seed_a in 0..500u32,
            seed_b in 0..500u32,
        ) {
            let a = fill(rows, cols, seed_a);
            let b = fill(rows, cols, seed_b);
            let back = a.add(&b).and_then(|s| s.sub(&b)).expect("same shape");

            prop_assert_eq!(back.shape(), a.shape());
            for (i, (x, y)) in back.as_slice().iter().zip(a.as_slice()).enumerate() {
                prop_assert!(
                    (x - y).abs() < 1e-4,
                    "FALSIFIED MX-008-prop: element {} {} != {}",
                    i, x, y
                );
            }
        }
    }

    /// FALSIFY-MX-009-prop: I(n) * M = M for any M with n rows
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20))]

        #[test]
        fn falsify_mx_009_prop_identity_dot(
            n in 1..=6usize,
            cols in 1..=6usize,
            seed in 0..500u32,
        ) {
            let m = fill(n, cols, seed);
            let eye = Matrix::eye(n).expect("valid");
            let result = eye.dot(&m).expect("compatible");

            prop_assert_eq!(result, m, "FALSIFIED MX-009-prop: I*M != M");
        }
    }

    /// FALSIFY-MX-010-prop: set_data writes min(len, rows*cols) and keeps the tail
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(30))]

        #[test]
        fn falsify_mx_010_prop_set_data_prefix(
            rows in 0..=5usize,
            cols in 0..=5usize,
            input in proptest::collection::vec(-100.0f32..100.0, 0..40),
        ) {
            let mut m = fill(rows, cols, 7);
            let before = m.clone();
            let written = m.set_data(&input).expect("f32 input");
            let n = input.len().min(rows * cols);

            prop_assert_eq!(written, n);
            prop_assert_eq!(&m.as_slice()[..n], &input[..n]);
            prop_assert_eq!(&m.as_slice()[n..], &before.as_slice()[n..]);
        }
    }
}
