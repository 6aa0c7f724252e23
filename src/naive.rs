//! Portable fallbacks for the BLAS and LAPACK routines.
//!
//! All matrices are contiguous row-major with leading dimension equal to the
//! column count. Callers validate lengths; these functions only
//! `debug_assert!` them.

#![cfg_attr(feature = "blas", allow(dead_code))]

use crate::blas::Trans;
use accel_traits::Real;

/// `y = alpha * x + y`
pub(crate) fn axpy<T: Real>(alpha: T, x: &[T], y: &mut [T]) {
    debug_assert_eq!(x.len(), y.len());
    for (yi, &xi) in y.iter_mut().zip(x) {
        *yi = alpha * xi + *yi;
    }
}

/// `x = alpha * x`
pub(crate) fn scal<T: Real>(alpha: T, x: &mut [T]) {
    for xi in x.iter_mut() {
        *xi = alpha * *xi;
    }
}

pub(crate) fn dot<T: Real>(x: &[T], y: &[T]) -> T {
    debug_assert_eq!(x.len(), y.len());
    x.iter()
        .zip(y)
        .fold(T::zero(), |acc, (&xi, &yi)| acc + xi * yi)
}

pub(crate) fn asum<T: Real>(x: &[T]) -> T {
    x.iter().fold(T::zero(), |acc, &xi| acc + xi.abs())
}

/// `beta == 0` overwrites the output, so stale NaNs in it do not propagate.
fn scale_or_clear<T: Real>(beta: T, y: &mut [T]) {
    if beta == T::zero() {
        y.fill(T::zero());
    } else if beta != T::one() {
        scal(beta, y);
    }
}

/// `y = alpha * op(A) * x + beta * y` with `A` stored as `m x n`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn gemv<T: Real>(
    trans: Trans,
    m: usize,
    n: usize,
    alpha: T,
    a: &[T],
    x: &[T],
    beta: T,
    y: &mut [T],
) {
    debug_assert_eq!(a.len(), m * n);
    match trans {
        Trans::No => {
            debug_assert_eq!(x.len(), n);
            debug_assert_eq!(y.len(), m);
            scale_or_clear(beta, y);
            for (i, yi) in y.iter_mut().enumerate() {
                let row = &a[i * n..(i + 1) * n];
                *yi = alpha * dot(row, x) + *yi;
            }
        }
        Trans::Yes => {
            debug_assert_eq!(x.len(), m);
            debug_assert_eq!(y.len(), n);
            scale_or_clear(beta, y);
            for (i, &xi) in x.iter().enumerate() {
                let row = &a[i * n..(i + 1) * n];
                axpy(alpha * xi, row, y);
            }
        }
    }
}

/// `C = alpha * A * B + beta * C` with `A: m x k`, `B: k x n`, `C: m x n`.
///
/// Loop order is i-p-j so the innermost loop walks rows of `B` and `C`
/// contiguously.
#[allow(clippy::too_many_arguments)]
pub(crate) fn gemm<T: Real>(
    m: usize,
    n: usize,
    k: usize,
    alpha: T,
    a: &[T],
    b: &[T],
    beta: T,
    c: &mut [T],
) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    scale_or_clear(beta, c);
    for i in 0..m {
        let c_row = &mut c[i * n..(i + 1) * n];
        for p in 0..k {
            axpy(alpha * a[i * k + p], &b[p * n..(p + 1) * n], c_row);
        }
    }
}

/// LU factorization with partial pivoting, `P * A = L * U`, in place.
///
/// On return the strict lower triangle of `a` holds `L` (unit diagonal
/// implied) and the upper triangle holds `U`. `ipiv[k]` is the 1-based row
/// swapped with row `k`, as in LAPACK `?getrf`. Returns `0` on success or
/// `k + 1` when `U(k, k)` is exactly zero; factorization still completes.
pub(crate) fn getrf<T: Real>(n: usize, a: &mut [T], ipiv: &mut [i32]) -> i32 {
    debug_assert_eq!(a.len(), n * n);
    debug_assert_eq!(ipiv.len(), n);

    let mut info = 0;
    for k in 0..n {
        let mut p = k;
        let mut best = a[k * n + k].abs();
        for i in (k + 1)..n {
            let v = a[i * n + k].abs();
            if v > best {
                best = v;
                p = i;
            }
        }
        ipiv[k] = (p + 1) as i32;

        if a[p * n + k] == T::zero() {
            if info == 0 {
                info = (k + 1) as i32;
            }
            continue;
        }

        if p != k {
            for j in 0..n {
                a.swap(k * n + j, p * n + j);
            }
        }

        let pivot = a[k * n + k];
        for i in (k + 1)..n {
            let l = a[i * n + k] / pivot;
            a[i * n + k] = l;
            if l == T::zero() {
                continue;
            }
            for j in (k + 1)..n {
                let ukj = a[k * n + j];
                a[i * n + j] = a[i * n + j] - l * ukj;
            }
        }
    }
    info
}

/// Inverse from the factors produced by [`getrf`], in place.
///
/// Solves `L * U * X = P` column by column. Returns `k + 1` if `U(k, k)` is
/// zero, leaving `a` untouched.
pub(crate) fn getri<T: Real>(n: usize, a: &mut [T], ipiv: &[i32]) -> i32 {
    debug_assert_eq!(a.len(), n * n);
    debug_assert_eq!(ipiv.len(), n);

    if let Some(k) = (0..n).find(|&k| a[k * n + k] == T::zero()) {
        return (k + 1) as i32;
    }

    // X starts as P * I.
    let mut x = vec![T::zero(); n * n];
    for i in 0..n {
        x[i * n + i] = T::one();
    }
    for (k, &piv) in ipiv.iter().enumerate() {
        let p = (piv - 1) as usize;
        if p != k {
            for j in 0..n {
                x.swap(k * n + j, p * n + j);
            }
        }
    }

    // Forward substitution with unit lower L, row-oriented over all columns.
    for i in 0..n {
        for p in 0..i {
            let lip = a[i * n + p];
            if lip == T::zero() {
                continue;
            }
            for j in 0..n {
                let xpj = x[p * n + j];
                x[i * n + j] = x[i * n + j] - lip * xpj;
            }
        }
    }

    // Back substitution with U.
    for i in (0..n).rev() {
        for p in (i + 1)..n {
            let uip = a[i * n + p];
            if uip == T::zero() {
                continue;
            }
            for j in 0..n {
                let xpj = x[p * n + j];
                x[i * n + j] = x[i * n + j] - uip * xpj;
            }
        }
        let uii = a[i * n + i];
        for j in 0..n {
            x[i * n + j] = x[i * n + j] / uii;
        }
    }

    a.copy_from_slice(&x);
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dot() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [5.0, 6.0, 7.0, 8.0];
        // 1*5 + 2*6 + 3*7 + 4*8 = 70
        assert_eq!(dot(&x, &y), 70.0);
    }

    #[test]
    fn test_axpy() {
        let x = [1.0, 2.0, 3.0];
        let mut y = [10.0, 20.0, 30.0];
        axpy(2.0, &x, &mut y);
        assert_eq!(y, [12.0, 24.0, 36.0]);
    }

    #[test]
    fn test_asum() {
        assert_eq!(asum(&[-1.0f32, 2.0, -3.5]), 6.5);
    }

    #[test]
    fn test_gemm() {
        // [[1, 2], [3, 4]] * [[5, 6], [7, 8]] = [[19, 22], [43, 50]]
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        let mut c = [0.0; 4];
        gemm(2, 2, 2, 1.0, &a, &b, 0.0, &mut c);
        assert_eq!(c, [19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_gemm_with_alpha_beta() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        let mut c = [1.0; 4];
        // 2 * [[19, 22], [43, 50]] + 3 * ones
        gemm(2, 2, 2, 2.0, &a, &b, 3.0, &mut c);
        assert_eq!(c, [41.0, 47.0, 89.0, 103.0]);
    }

    #[test]
    fn test_gemm_zero_times_nan_is_nan() {
        // 0 * NaN must stay NaN, as in the CBLAS path.
        let a = [0.0, 1.0];
        let b = [f64::NAN, 1.0];
        let mut c = [0.0];
        gemm(1, 1, 2, 1.0, &a, &b, 0.0, &mut c);
        assert!(c[0].is_nan());

        let mut c = [0.0; 2];
        gemm(1, 2, 1, 1.0, &[0.0], &[f64::INFINITY, 1.0], 0.0, &mut c);
        assert!(c[0].is_nan());
        assert_eq!(c[1], 0.0);
    }

    #[test]
    fn test_gemv_both_orientations() {
        // A = [[1, 2, 3], [4, 5, 6]]
        let a = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let mut y = [0.0; 2];
        gemv(Trans::No, 2, 3, 1.0, &a, &[1.0, 1.0, 1.0], 0.0, &mut y);
        assert_eq!(y, [6.0, 15.0]);

        let mut yt = [0.0; 3];
        gemv(Trans::Yes, 2, 3, 1.0, &a, &[1.0, 2.0], 0.0, &mut yt);
        assert_eq!(yt, [9.0, 12.0, 15.0]);
    }

    #[test]
    fn test_getrf_getri_roundtrip() {
        // A = [[4, 7], [2, 6]], inv(A) = [[0.6, -0.7], [-0.2, 0.4]]
        let mut a = [4.0, 7.0, 2.0, 6.0];
        let mut ipiv = [0; 2];
        assert_eq!(getrf(2, &mut a, &mut ipiv), 0);
        assert_eq!(getri(2, &mut a, &ipiv), 0);
        let expected = [0.6, -0.7, -0.2, 0.4];
        for (got, want) in a.iter().zip(expected) {
            assert_relative_eq!(*got, want, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_getrf_pivots() {
        // First column forces a row swap.
        let mut a = [0.0, 1.0, 2.0, 3.0];
        let mut ipiv = [0; 2];
        assert_eq!(getrf(2, &mut a, &mut ipiv), 0);
        assert_eq!(ipiv, [2, 2]);
        assert_eq!(a, [2.0, 3.0, 0.0, 1.0]);
    }

    #[test]
    fn test_getrf_singular() {
        let mut a = [1.0, 2.0, 2.0, 4.0];
        let mut ipiv = [0; 2];
        assert_eq!(getrf(2, &mut a, &mut ipiv), 2);
        assert_eq!(getri(2, &mut a, &ipiv), 2);
    }
}
