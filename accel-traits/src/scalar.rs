//! Floating-point element bound.

use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Element types accepted by vector and matrix operations.
///
/// `Real` is implemented for exactly `f32` and `f64`, the two precisions the
/// BLAS `s`/`d` and LAPACK routine families cover. The trait is sealed so the
/// kernel crates can provide a native implementation for every `Real` type.
pub trait Real:
    num_traits::Float
    + num_traits::FloatConst
    + num_traits::FromPrimitive
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + Sum
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + 'static
    + sealed::Sealed
{
    /// Short precision name used in log output (`"f32"` / `"f64"`).
    const NAME: &'static str;

    /// Converts an element count to `Self`.
    ///
    /// Counts above 2^24 (`f32`) or 2^53 (`f64`) round to the nearest
    /// representable value.
    fn from_count(n: usize) -> Self;
}

impl Real for f32 {
    const NAME: &'static str = "f32";

    #[inline]
    fn from_count(n: usize) -> Self {
        n as f32
    }
}

impl Real for f64 {
    const NAME: &'static str = "f64";

    #[inline]
    fn from_count(n: usize) -> Self {
        n as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_real<T: Real>() {}

    #[test]
    fn test_standard_types() {
        assert_real::<f32>();
        assert_real::<f64>();
    }

    #[test]
    fn test_from_count() {
        assert_eq!(f32::from_count(3), 3.0);
        assert_eq!(f64::from_count(1 << 20), 1048576.0);
    }

    #[test]
    fn test_names() {
        assert_eq!(<f32 as Real>::NAME, "f32");
        assert_eq!(<f64 as Real>::NAME, "f64");
    }
}
