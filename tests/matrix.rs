use accel_math::matrix::{self, Axis};
use accel_math::{AccelError, Matrix};
use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix<f64> {
    Matrix::from_fn(rows, cols, |_, _| StandardNormal.sample(&mut *rng)).unwrap()
}

/// Diagonally dominant, so always invertible.
fn random_invertible(rng: &mut StdRng, n: usize) -> Matrix<f64> {
    let mut m = random_matrix(rng, n, n);
    for i in 0..n {
        m[(i, i)] += n as f64 * 2.0;
    }
    m
}

fn assert_matrix_eq(a: &Matrix<f64>, b: &Matrix<f64>, eps: f64) {
    assert_eq!(a.shape(), b.shape());
    for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
        assert_abs_diff_eq!(*x, *y, epsilon = eps);
    }
}

#[test]
fn test_identity_inverse_is_identity() {
    init_logger();
    let id = Matrix::<f64>::identity(2).unwrap();
    assert_eq!(id.inv().unwrap(), id);
}

#[test]
fn test_product_with_inverse_is_identity() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(2024);
    for n in [1, 2, 5, 17, 40] {
        let m = random_invertible(&mut rng, n);
        let inv = matrix::inv(&m).unwrap();
        let id = Matrix::identity(n).unwrap();
        assert_matrix_eq(&matrix::dot(&m, &inv).unwrap(), &id, 1e-10);
        assert_matrix_eq(&(&inv * &m), &id, 1e-10);
    }
}

#[test]
fn test_det_of_product() {
    let mut rng = StdRng::seed_from_u64(5);
    let a = random_invertible(&mut rng, 6);
    let b = random_invertible(&mut rng, 6);
    let ab = a.dot(&b).unwrap();
    let expected = a.det().unwrap() * b.det().unwrap();
    assert_abs_diff_eq!(ab.det().unwrap(), expected, epsilon = expected.abs() * 1e-10);
}

#[test]
fn test_transpose_twice_is_identity() {
    let mut rng = StdRng::seed_from_u64(8);
    for (r, c) in [(1, 1), (3, 5), (16, 16), (33, 47)] {
        let m = random_matrix(&mut rng, r, c);
        let t = m.transpose();
        assert_eq!(t.shape(), (c, r));
        assert_eq!(t.transpose(), m);
        assert_eq!(m.view().t().to_matrix(), t);
    }
}

#[test]
fn test_reshape_roundtrip() {
    let m = Matrix::from_fn(4, 6, |r, c| (r * 6 + c) as f64).unwrap();
    for (r, c) in [(1, 24), (2, 12), (3, 8), (24, 1)] {
        let back = m.clone().reshape(r, c).unwrap().reshape(4, 6).unwrap();
        assert_eq!(back, m);
        let view = m.reshaped(r, c).unwrap();
        assert_eq!(view.to_matrix().as_slice(), m.as_slice());
    }
    assert!(m.clone().reshape(5, 5).is_err());
}

#[test]
fn test_row_times_column() {
    let row = Matrix::from_rows(&[[1.0, 2.0, 3.0]]).unwrap();
    let col = Matrix::from_rows(&[[1.0], [1.0], [1.0]]).unwrap();
    let out = &row * &col;
    assert_eq!(out, Matrix::from_rows(&[[6.0]]).unwrap());

    let outer = col.dot(&row).unwrap();
    assert_eq!(outer.shape(), (3, 3));
    assert_eq!(outer.row(2).unwrap(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_shape_mismatch_errors() {
    let a = Matrix::new(2, 3, 1.0).unwrap();
    let b = Matrix::new(3, 2, 1.0).unwrap();
    let expected = AccelError::ShapeMismatch((2, 3), (3, 2));
    assert_eq!(matrix::add(&a, &b).unwrap_err(), expected);
    assert_eq!(matrix::sub(&a, &b).unwrap_err(), expected);
    assert_eq!(matrix::elmul(&a, &b).unwrap_err(), expected);
    assert_eq!(matrix::eldiv(&a, &b).unwrap_err(), expected);
    assert_eq!(matrix::div(&a, &b).unwrap_err(), expected);
    assert!(matrix::dot(&a, &a).is_err());
    assert!(matrix::dot(&a, &b).is_ok());
}

#[test]
fn test_matrix_vector_agrees_with_matrix_product() {
    let mut rng = StdRng::seed_from_u64(13);
    let m = random_matrix(&mut rng, 7, 4);
    let v: Vec<f64> = (0..4).map(|_| StandardNormal.sample(&mut rng)).collect();
    let w: Vec<f64> = (0..7).map(|_| StandardNormal.sample(&mut rng)).collect();

    let mv = m.dot_vector(&v).unwrap();
    let as_matrix = m.dot(&Matrix::column_vector(&v).unwrap()).unwrap();
    for (a, b) in mv.iter().zip(as_matrix.as_slice()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
    }

    let wm = matrix::vector_dot(&w, &m).unwrap();
    let as_matrix = Matrix::row_vector(&w).unwrap().dot(&m).unwrap();
    for (a, b) in wm.iter().zip(as_matrix.as_slice()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
    }
}

#[test]
fn test_axis_sums_agree_with_total() {
    let mut rng = StdRng::seed_from_u64(21);
    let m = random_matrix(&mut rng, 9, 5);
    let total = m.sum();
    let by_row = m.sum_axis(Axis::Row);
    let by_col = m.sum_axis(Axis::Column);
    assert_eq!(by_row.shape(), (9, 1));
    assert_eq!(by_col.shape(), (1, 5));
    assert_abs_diff_eq!(by_row.sum(), total, epsilon = 1e-12);
    assert_abs_diff_eq!(by_col.sum(), total, epsilon = 1e-12);
    assert_abs_diff_eq!(m.asum_axis(Axis::Row).sum(), m.asum(), epsilon = 1e-12);
}

#[test]
fn test_inverse_errors() {
    init_logger();
    let rect = Matrix::new(2, 3, 1.0).unwrap();
    assert_eq!(
        rect.inv().unwrap_err(),
        AccelError::NonSquare { rows: 2, cols: 3 }
    );
    let zeros = Matrix::<f64>::zeros(3, 3).unwrap();
    assert!(matches!(zeros.inv(), Err(AccelError::Singular { .. })));
    assert_eq!(zeros.det().unwrap(), 0.0);
}

#[test]
fn test_views_do_not_copy_and_owned_copy_is_independent() {
    let mut m = Matrix::from_fn(3, 2, |r, c| (r * 2 + c) as f64).unwrap();
    let snapshot = m.view().t().to_matrix();
    m.set(0, 0, 100.0).unwrap();
    assert_eq!(snapshot[(0, 0)], 0.0);
    assert_eq!(m.view().t()[(0, 0)], 100.0);
    assert_eq!(m.column(0).unwrap().to_vec(), vec![100.0, 2.0, 4.0]);
}

#[test]
fn test_operators_follow_named_functions() {
    let mut rng = StdRng::seed_from_u64(77);
    let a = random_matrix(&mut rng, 4, 4);
    let b = random_invertible(&mut rng, 4);

    assert_eq!(&a + &b, matrix::add(&a, &b).unwrap());
    assert_eq!(&a - &b, matrix::sub(&a, &b).unwrap());
    assert_eq!(&a * &b, matrix::dot(&a, &b).unwrap());
    assert_eq!(&a * 3.0, matrix::scale(&a, 3.0));
    assert_matrix_eq(&(&a / &b), &matrix::div(&a, &b).unwrap(), 1e-12);
    assert_matrix_eq(&(&(&a / &b) * &b), &a, 1e-10);
}

#[test]
fn test_elementwise_pow_and_exp() {
    let m = Matrix::from_rows(&[[0.0, 1.0], [2.0, 3.0]]).unwrap();
    assert_eq!(matrix::pow(&m, 2.0).as_slice(), &[0.0, 1.0, 4.0, 9.0]);
    let e = matrix::exp(&m);
    assert_abs_diff_eq!(e[(0, 0)], 1.0);
    assert_abs_diff_eq!(e[(1, 1)], 3.0f64.exp(), epsilon = 1e-12);
}

#[test]
fn test_f32_matrix() {
    let m = Matrix::from_rows(&[[2.0f32, 0.0], [0.0, 4.0]]).unwrap();
    let inv = m.inv().unwrap();
    assert_eq!(inv.as_slice(), &[0.5, 0.0, 0.0, 0.25]);
    assert_eq!(&m * &inv, Matrix::identity(2).unwrap());
}
