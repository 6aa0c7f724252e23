//! Operator overloads for [`Matrix`].
//!
//! Operators cannot return a `Result`, so a shape mismatch or singular
//! divisor panics with the [`AccelError`](crate::AccelError) message. The
//! named functions in [`crate::matrix`] report the same conditions as errors.

use super::linalg;
use super::Matrix;
use crate::Scalar;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[inline]
fn or_panic<R>(r: crate::Result<R>) -> R {
    r.unwrap_or_else(|e| panic!("{e}"))
}

/// `&a + &b` (allocating).
impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        or_panic(linalg::add(self, rhs))
    }
}

/// `a + &b`, reusing `a`'s buffer.
impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn add(mut self, rhs: &Matrix<T>) -> Matrix<T> {
        self += rhs;
        self
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        self + &rhs
    }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        or_panic(self.try_add_assign(rhs))
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        or_panic(linalg::sub(self, rhs))
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn sub(mut self, rhs: &Matrix<T>) -> Matrix<T> {
        self -= rhs;
        self
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        self - &rhs
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        or_panic(self.try_sub_assign(rhs))
    }
}

/// Matrix product, not element-wise; see [`linalg::dot`].
impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        or_panic(linalg::dot(self, rhs))
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        linalg::scale(self, rhs)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn mul(mut self, rhs: T) -> Matrix<T> {
        self *= rhs;
        self
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        T::scal(rhs, &mut self.grid);
    }
}

/// `a / &b` is `a * inv(b)`; see [`linalg::div`].
impl<T: Scalar> Div<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: &Matrix<T>) -> Matrix<T> {
        or_panic(linalg::div(self, rhs))
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Matrix<T> {
        self.map(|v| v / rhs)
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn div(mut self, rhs: T) -> Matrix<T> {
        self /= rhs;
        self
    }
}

impl<T: Scalar> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, rhs: T) {
        crate::map::map_in_place(&mut self.grid, |v| v / rhs);
    }
}

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|v| -v)
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Matrix<T>;

    #[inline]
    fn neg(mut self) -> Matrix<T> {
        crate::map::map_in_place(&mut self.grid, |v| -v);
        self
    }
}

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl Mul<Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            #[inline]
            fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                rhs * self
            }
        }

        impl Mul<&Matrix<$t>> for $t {
            type Output = Matrix<$t>;

            #[inline]
            fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64);
