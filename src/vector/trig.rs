//! Trigonometric and hyperbolic functions.

use crate::map::{map, zip_map2};
use crate::Result;
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
    /// Element-wise sine (radians).
    sin => sin;
    /// Element-wise cosine (radians).
    cos => cos;
    /// Element-wise tangent (radians).
    tan => tan;
    /// Element-wise arcsine, in `[-pi/2, pi/2]`.
    asin => asin;
    /// Element-wise arccosine, in `[0, pi]`.
    acos => acos;
    /// Element-wise arctangent, in `[-pi/2, pi/2]`.
    atan => atan;
    /// Element-wise hyperbolic sine.
    sinh => sinh;
    /// Element-wise hyperbolic cosine.
    cosh => cosh;
    /// Element-wise hyperbolic tangent.
    tanh => tanh;
    /// Element-wise inverse hyperbolic sine.
    asinh => asinh;
    /// Element-wise inverse hyperbolic cosine.
    acosh => acosh;
    /// Element-wise inverse hyperbolic tangent.
    atanh => atanh;
    /// Degrees to radians.
    deg2rad => to_radians;
    /// Radians to degrees.
    rad2deg => to_degrees;
}

/// Four-quadrant arctangent of `y[i] / x[i]`.
pub fn atan2<T: Real>(y: &[T], x: &[T]) -> Result<Vec<T>> {
    zip_map2(y, x, |a, b| a.atan2(b))
}

/// Sine and cosine in one pass, returned as `(sin, cos)`.
pub fn sincos<T: Real>(x: &[T]) -> (Vec<T>, Vec<T>) {
    map(x, |a| a.sin_cos()).into_iter().unzip()
}
