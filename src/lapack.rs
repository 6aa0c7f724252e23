//! LAPACK integration for LU factorization and inversion.
//!
//! With the `blas` feature, [`LapackScalar`] calls `LAPACKE_?getrf` /
//! `LAPACKE_?getri` in row-major layout. Without it, the partial-pivoting LU
//! in the `naive` module produces the same factors and pivot convention.

use crate::{AccelError, Result};
use accel_traits::Real;

/// LAPACK routines for one floating-point precision.
///
/// Both routines operate in place on a contiguous row-major `n x n` matrix
/// and return the LAPACK `info` status: `0` on success, `k + 1` when
/// `U(k, k)` is exactly zero, negative for an illegal argument.
///
/// # Panics
///
/// Panics if `a.len() != n * n` or `ipiv.len() != n`.
pub trait LapackScalar: Real {
    /// LU factorization with partial pivoting, `P * A = L * U`.
    ///
    /// `ipiv` receives 1-based pivot rows.
    fn getrf(n: usize, a: &mut [Self], ipiv: &mut [i32]) -> i32;

    /// Inverse of `A` from the output of [`LapackScalar::getrf`].
    fn getri(n: usize, a: &mut [Self], ipiv: &[i32]) -> i32;
}

#[inline]
fn check_args(n: usize, a: usize, ipiv: usize) {
    assert!(a == n * n, "matrix length {a} is not {n}x{n}");
    assert!(ipiv == n, "pivot length {ipiv} does not match order {n}");
}

/// Map a LAPACK `info` code to an error.
pub(crate) fn check_info(routine: &'static str, info: i32) -> Result<()> {
    match info {
        0 => Ok(()),
        i if i > 0 => {
            log::debug!("{routine}: zero pivot at U({0}, {0})", i - 1);
            Err(AccelError::Singular {
                index: (i - 1) as usize,
            })
        }
        i => {
            log::debug!("{routine}: illegal value in argument {}", -i);
            Err(AccelError::Lapack { routine, info: i })
        }
    }
}

// ============================================================================
// LAPACKE-backed implementation (feature-gated)
// ============================================================================

#[cfg(feature = "blas")]
mod lapacke_impl {
    use super::*;
    use std::os::raw::c_int;

    const LAPACK_ROW_MAJOR: c_int = 101;

    #[inline]
    fn lapack_int(n: usize) -> c_int {
        assert!(n <= c_int::MAX as usize, "order {n} exceeds LAPACK integer range");
        n as c_int
    }

    macro_rules! impl_lapacke {
        ($t:ty, $getrf:ident, $getri:ident) => {
            impl LapackScalar for $t {
                fn getrf(n: usize, a: &mut [$t], ipiv: &mut [i32]) -> i32 {
                    check_args(n, a.len(), ipiv.len());
                    if n == 0 {
                        return 0;
                    }
                    let n = lapack_int(n);
                    unsafe {
                        lapacke_sys::$getrf(
                            LAPACK_ROW_MAJOR,
                            n,
                            n,
                            a.as_mut_ptr(),
                            n,
                            ipiv.as_mut_ptr(),
                        )
                    }
                }

                fn getri(n: usize, a: &mut [$t], ipiv: &[i32]) -> i32 {
                    check_args(n, a.len(), ipiv.len());
                    if n == 0 {
                        return 0;
                    }
                    let n = lapack_int(n);
                    unsafe {
                        lapacke_sys::$getri(LAPACK_ROW_MAJOR, n, a.as_mut_ptr(), n, ipiv.as_ptr())
                    }
                }
            }
        };
    }

    impl_lapacke!(f32, LAPACKE_sgetrf, LAPACKE_sgetri);
    impl_lapacke!(f64, LAPACKE_dgetrf, LAPACKE_dgetri);
}

// ============================================================================
// Portable implementation
// ============================================================================

#[cfg(not(feature = "blas"))]
macro_rules! impl_naive {
    ($t:ty) => {
        impl LapackScalar for $t {
            fn getrf(n: usize, a: &mut [$t], ipiv: &mut [i32]) -> i32 {
                check_args(n, a.len(), ipiv.len());
                crate::naive::getrf(n, a, ipiv)
            }

            fn getri(n: usize, a: &mut [$t], ipiv: &[i32]) -> i32 {
                check_args(n, a.len(), ipiv.len());
                crate::naive::getri(n, a, ipiv)
            }
        }
    };
}

#[cfg(not(feature = "blas"))]
impl_naive!(f32);
#[cfg(not(feature = "blas"))]
impl_naive!(f64);
