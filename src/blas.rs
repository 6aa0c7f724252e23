//! BLAS integration for vector and matrix kernels.
//!
//! [`BlasScalar`] exposes the Level-1/2/3 routines this crate needs on
//! contiguous row-major slices. With the `blas` feature every call goes to
//! CBLAS (`cblas-sys`, linked against OpenBLAS); otherwise the portable loops
//! in the `naive` module are used. Both paths check slice lengths before
//! touching memory.

use accel_traits::Real;

/// Whether `gemv` uses `A` or its transpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trans {
    /// `y = alpha * A * x + beta * y`
    No,
    /// `y = alpha * A^T * x + beta * y`
    Yes,
}

/// Name of the active kernel backend, for log output.
pub const BACKEND: &str = if cfg!(feature = "blas") {
    "cblas"
} else {
    "naive"
};

/// BLAS routines for one floating-point precision.
///
/// All matrices are contiguous row-major with leading dimension equal to
/// their column count.
///
/// # Panics
///
/// Every method panics if the slice lengths do not match the stated
/// dimensions.
pub trait BlasScalar: Real {
    /// `y = alpha * x + y`
    fn axpy(alpha: Self, x: &[Self], y: &mut [Self]);

    /// `x = alpha * x`
    fn scal(alpha: Self, x: &mut [Self]);

    /// `x · y`
    fn dot(x: &[Self], y: &[Self]) -> Self;

    /// Sum of absolute values.
    fn asum(x: &[Self]) -> Self;

    /// `y = alpha * op(A) * x + beta * y` with `A` stored as `m x n`.
    #[allow(clippy::too_many_arguments)]
    fn gemv(
        trans: Trans,
        m: usize,
        n: usize,
        alpha: Self,
        a: &[Self],
        x: &[Self],
        beta: Self,
        y: &mut [Self],
    );

    /// `C = alpha * A * B + beta * C` with `A: m x k`, `B: k x n`, `C: m x n`.
    #[allow(clippy::too_many_arguments)]
    fn gemm(
        m: usize,
        n: usize,
        k: usize,
        alpha: Self,
        a: &[Self],
        b: &[Self],
        beta: Self,
        c: &mut [Self],
    );
}

// ============================================================================
// Argument checks shared by both backends
// ============================================================================

#[inline]
fn check_len(what: &str, got: usize, expected: usize) {
    assert!(
        got == expected,
        "{what}: slice length {got} does not match expected {expected}"
    );
}

#[inline]
fn check_gemv(trans: Trans, m: usize, n: usize, a: usize, x: usize, y: usize) {
    check_len("gemv A", a, m * n);
    let (x_len, y_len) = match trans {
        Trans::No => (n, m),
        Trans::Yes => (m, n),
    };
    check_len("gemv x", x, x_len);
    check_len("gemv y", y, y_len);
}

#[inline]
fn check_gemm(m: usize, n: usize, k: usize, a: usize, b: usize, c: usize) {
    check_len("gemm A", a, m * k);
    check_len("gemm B", b, k * n);
    check_len("gemm C", c, m * n);
}

// ============================================================================
// CBLAS-backed implementation (feature-gated)
// ============================================================================

#[cfg(feature = "blas")]
mod blas_impl {
    use super::*;
    use cblas_sys::{CBLAS_LAYOUT, CBLAS_TRANSPOSE};
    use std::os::raw::c_int;

    #[inline]
    pub(super) fn blas_int(n: usize) -> c_int {
        assert!(n <= c_int::MAX as usize, "dimension {n} exceeds BLAS integer range");
        n as c_int
    }

    #[inline]
    pub(super) fn cblas_trans(trans: Trans) -> CBLAS_TRANSPOSE {
        match trans {
            Trans::No => CBLAS_TRANSPOSE::CblasNoTrans,
            Trans::Yes => CBLAS_TRANSPOSE::CblasTrans,
        }
    }

    macro_rules! impl_cblas {
        ($t:ty, $axpy:ident, $scal:ident, $dot:ident, $asum:ident, $gemv:ident, $gemm:ident) => {
            impl BlasScalar for $t {
                fn axpy(alpha: $t, x: &[$t], y: &mut [$t]) {
                    check_len("axpy y", y.len(), x.len());
                    unsafe {
                        cblas_sys::$axpy(
                            blas_int(x.len()),
                            alpha,
                            x.as_ptr(),
                            1,
                            y.as_mut_ptr(),
                            1,
                        )
                    }
                }

                fn scal(alpha: $t, x: &mut [$t]) {
                    unsafe { cblas_sys::$scal(blas_int(x.len()), alpha, x.as_mut_ptr(), 1) }
                }

                fn dot(x: &[$t], y: &[$t]) -> $t {
                    check_len("dot y", y.len(), x.len());
                    unsafe { cblas_sys::$dot(blas_int(x.len()), x.as_ptr(), 1, y.as_ptr(), 1) }
                }

                fn asum(x: &[$t]) -> $t {
                    unsafe { cblas_sys::$asum(blas_int(x.len()), x.as_ptr(), 1) }
                }

                fn gemv(
                    trans: Trans,
                    m: usize,
                    n: usize,
                    alpha: $t,
                    a: &[$t],
                    x: &[$t],
                    beta: $t,
                    y: &mut [$t],
                ) {
                    check_gemv(trans, m, n, a.len(), x.len(), y.len());
                    if m == 0 || n == 0 {
                        crate::naive::gemv(trans, m, n, alpha, a, x, beta, y);
                        return;
                    }
                    unsafe {
                        cblas_sys::$gemv(
                            CBLAS_LAYOUT::CblasRowMajor,
                            cblas_trans(trans),
                            blas_int(m),
                            blas_int(n),
                            alpha,
                            a.as_ptr(),
                            blas_int(n),
                            x.as_ptr(),
                            1,
                            beta,
                            y.as_mut_ptr(),
                            1,
                        )
                    }
                }

                fn gemm(
                    m: usize,
                    n: usize,
                    k: usize,
                    alpha: $t,
                    a: &[$t],
                    b: &[$t],
                    beta: $t,
                    c: &mut [$t],
                ) {
                    check_gemm(m, n, k, a.len(), b.len(), c.len());
                    if m == 0 || n == 0 || k == 0 {
                        crate::naive::gemm(m, n, k, alpha, a, b, beta, c);
                        return;
                    }
                    unsafe {
                        cblas_sys::$gemm(
                            CBLAS_LAYOUT::CblasRowMajor,
                            CBLAS_TRANSPOSE::CblasNoTrans,
                            CBLAS_TRANSPOSE::CblasNoTrans,
                            blas_int(m),
                            blas_int(n),
                            blas_int(k),
                            alpha,
                            a.as_ptr(),
                            blas_int(k),
                            b.as_ptr(),
                            blas_int(n),
                            beta,
                            c.as_mut_ptr(),
                            blas_int(n),
                        )
                    }
                }
            }
        };
    }

    impl_cblas!(
        f32,
        cblas_saxpy,
        cblas_sscal,
        cblas_sdot,
        cblas_sasum,
        cblas_sgemv,
        cblas_sgemm
    );
    impl_cblas!(
        f64,
        cblas_daxpy,
        cblas_dscal,
        cblas_ddot,
        cblas_dasum,
        cblas_dgemv,
        cblas_dgemm
    );
}

// ============================================================================
// Portable implementation (always available)
// ============================================================================

#[cfg(not(feature = "blas"))]
macro_rules! impl_naive {
    ($t:ty) => {
        impl BlasScalar for $t {
            fn axpy(alpha: $t, x: &[$t], y: &mut [$t]) {
                check_len("axpy y", y.len(), x.len());
                crate::naive::axpy(alpha, x, y)
            }

            fn scal(alpha: $t, x: &mut [$t]) {
                crate::naive::scal(alpha, x)
            }

            fn dot(x: &[$t], y: &[$t]) -> $t {
                check_len("dot y", y.len(), x.len());
                crate::naive::dot(x, y)
            }

            fn asum(x: &[$t]) -> $t {
                crate::naive::asum(x)
            }

            fn gemv(
                trans: Trans,
                m: usize,
                n: usize,
                alpha: $t,
                a: &[$t],
                x: &[$t],
                beta: $t,
                y: &mut [$t],
            ) {
                check_gemv(trans, m, n, a.len(), x.len(), y.len());
                crate::naive::gemv(trans, m, n, alpha, a, x, beta, y)
            }

            fn gemm(
                m: usize,
                n: usize,
                k: usize,
                alpha: $t,
                a: &[$t],
                b: &[$t],
                beta: $t,
                c: &mut [$t],
            ) {
                check_gemm(m, n, k, a.len(), b.len(), c.len());
                crate::naive::gemm(m, n, k, alpha, a, b, beta, c)
            }
        }
    };
}

#[cfg(not(feature = "blas"))]
impl_naive!(f32);
#[cfg(not(feature = "blas"))]
impl_naive!(f64);
