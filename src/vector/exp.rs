//! Exponential and logarithmic functions.

use crate::map::map;
use accel_traits::Real;

macro_rules! unary {
    ($($(#[$doc:meta])* $name:ident => $method:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<T: Real>(x: &[T]) -> Vec<T> {
                map(x, |a| a.$method())
            }
        )*
    };
}

unary! {
    /// Element-wise `e^x`.
    exp => exp;
    /// Element-wise `2^x`.
    exp2 => exp2;
    /// Element-wise `e^x - 1`, accurate near zero.
    expm1 => exp_m1;
    /// Element-wise natural logarithm.
    log => ln;
    /// Element-wise base-2 logarithm.
    log2 => log2;
    /// Element-wise base-10 logarithm.
    log10 => log10;
    /// Element-wise `ln(1 + x)`, accurate near zero.
    log1p => ln_1p;
}

/// Element-wise unbiased binary exponent, `floor(log2(|x|))`.
///
/// `-inf` at zero, `+inf` at infinity, NaN for NaN.
pub fn logb<T: Real>(x: &[T]) -> Vec<T> {
    map(x, |a| {
        if a.is_zero() {
            T::neg_infinity()
        } else {
            a.abs().log2().floor()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exp_log_roundtrip() {
        let x = [0.5, 1.0, 2.0];
        for (got, want) in log(&exp(&x)).iter().zip(x) {
            assert_relative_eq!(*got, want, epsilon = 1e-12);
        }
        assert_relative_eq!(exp(&[1.0f64])[0], std::f64::consts::E);
    }

    #[test]
    fn test_base_2_and_10() {
        assert_relative_eq!(exp2(&[3.0])[0], 8.0);
        assert_eq!(log2(&[8.0, 0.5]), vec![3.0, -1.0]);
        assert_relative_eq!(log10(&[1000.0f32])[0], 3.0);
    }

    #[test]
    fn test_near_zero_variants() {
        let tiny = 1e-12;
        assert_relative_eq!(expm1(&[tiny])[0], tiny, epsilon = 1e-20);
        assert_relative_eq!(log1p(&[tiny])[0], tiny, epsilon = 1e-20);
    }

    #[test]
    fn test_logb() {
        let out = logb(&[8.0, 10.0, -0.3, 1.0, 0.0, f64::INFINITY]);
        assert_eq!(&out[..4], &[3.0, 3.0, -2.0, 0.0]);
        assert_eq!(out[4], f64::NEG_INFINITY);
        assert_eq!(out[5], f64::INFINITY);
        assert!(logb(&[f64::NAN])[0].is_nan());
    }
}
