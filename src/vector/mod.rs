//! Element-wise functions over numeric slices.
//!
//! Inputs are borrowed `&[T]`; every function returns freshly allocated
//! output and leaves its inputs untouched. The `*_assign` functions are the
//! exception: they update their first argument in place.
//!
//! Binary functions require operands of equal length and return
//! [`AccelError::LengthMismatch`](crate::AccelError::LengthMismatch)
//! otherwise.

mod arithmetic;
mod auxiliary;
mod convolution;
mod exp;
mod trig;

pub use arithmetic::{
    add, add_assign, add_scalar, argmax, argmin, asum, concat, dist, distsq, div, div_assign,
    div_scalar, dot, max, meamg, mean, measq, min, mul, mul_assign, mul_scalar, pow, pow_scalar,
    rem, remainder, rmsq, scale_assign, sq, sqrt, sub, sub_assign, sub_scalar, sum,
};
pub use auxiliary::{abs, ceil, clip, copysign, floor, neg, rec, round, threshold, trunc};
pub use convolution::{conv, xcorr};
pub use exp::{exp, exp2, expm1, log, log10, log1p, log2, logb};
pub use trig::{
    acos, acosh, asin, asinh, atan, atan2, atanh, cos, cosh, deg2rad, rad2deg, sin, sincos, sinh,
    tan, tanh,
};
