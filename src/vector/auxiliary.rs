//! Rounding, sign, and clamping functions.

use crate::map::{map, zip_map2};
use crate::{AccelError, Result};
use accel_traits::Real;

/// Element-wise absolute value.
pub fn abs<T: Real>(x: &[T]) -> Vec<T> {
    map(x, |a| a.abs())
}

/// Element-wise ceiling.
pub fn ceil<T: Real>(x: &[T]) -> Vec<T> {
    map(x, |a| a.ceil())
}

/// Element-wise floor.
pub fn floor<T: Real>(x: &[T]) -> Vec<T> {
    map(x, |a| a.floor())
}

/// Round to the nearest integer, halfway cases away from zero.
pub fn round<T: Real>(x: &[T]) -> Vec<T> {
    map(x, |a| a.round())
}

/// Round toward zero.
pub fn trunc<T: Real>(x: &[T]) -> Vec<T> {
    map(x, |a| a.trunc())
}

/// Element-wise negation.
pub fn neg<T: Real>(x: &[T]) -> Vec<T> {
    map(x, |a| -a)
}

/// Element-wise reciprocal `1 / x`.
pub fn rec<T: Real>(x: &[T]) -> Vec<T> {
    map(x, |a| a.recip())
}

/// Clamp every element to `[low, high]`.
///
/// NaN elements stay NaN.
///
/// # Errors
/// Returns [`AccelError::InvalidRange`] if `low > high` or either bound is
/// NaN.
pub fn clip<T: Real>(x: &[T], low: T, high: T) -> Result<Vec<T>> {
    if low.is_nan() || high.is_nan() || low > high {
        return Err(AccelError::InvalidRange {
            low: low.to_f64().unwrap_or(f64::NAN),
            high: high.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(map(x, |a| {
        if a < low {
            low
        } else if a > high {
            high
        } else {
            a
        }
    }))
}

/// Magnitude of `magnitude[i]` with the sign of `sign[i]`.
pub fn copysign<T: Real>(sign: &[T], magnitude: &[T]) -> Result<Vec<T>> {
    zip_map2(sign, magnitude, |s, m| m.copysign(s))
}

/// Element-wise `max(x, low)`: every value below `low` is raised to it.
pub fn threshold<T: Real>(x: &[T], low: T) -> Vec<T> {
    map(x, |a| if a < low { low } else { a })
}
