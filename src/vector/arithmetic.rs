//! Reductions and arithmetic on vectors.

use crate::map::{map, zip_map2, zip_map2_in_place};
use crate::{ensure_same_len, Result, Scalar};
use accel_traits::Real;

// ============================================================================
// Reductions
// ============================================================================

/// Sum of all elements. Zero for an empty slice.
pub fn sum<T: Real>(x: &[T]) -> T {
    x.iter().copied().sum()
}

/// Sum of absolute values (BLAS `asum`).
pub fn asum<T: Scalar>(x: &[T]) -> T {
    T::asum(x)
}

/// Largest element, or `None` for an empty slice.
pub fn max<T: Real>(x: &[T]) -> Option<T> {
    argmax(x).map(|i| x[i])
}

/// Index of the largest element; the first one on ties.
///
/// NaN never compares greater than the running maximum, so a NaN is only
/// returned when it is the first element.
pub fn argmax<T: Real>(x: &[T]) -> Option<usize> {
    arg_best(x, |v, best| v > best)
}

/// Smallest element, or `None` for an empty slice.
pub fn min<T: Real>(x: &[T]) -> Option<T> {
    argmin(x).map(|i| x[i])
}

/// Index of the smallest element; the first one on ties.
pub fn argmin<T: Real>(x: &[T]) -> Option<usize> {
    arg_best(x, |v, best| v < best)
}

fn arg_best<T: Real>(x: &[T], better: impl Fn(T, T) -> bool) -> Option<usize> {
    let mut iter = x.iter().copied().enumerate();
    let (mut best_i, mut best) = iter.next()?;
    for (i, v) in iter {
        if better(v, best) {
            best = v;
            best_i = i;
        }
    }
    Some(best_i)
}

/// Arithmetic mean. NaN for an empty slice.
pub fn mean<T: Real>(x: &[T]) -> T {
    sum(x) / T::from_count(x.len())
}

/// Mean magnitude, `sum(|x|) / n`. NaN for an empty slice.
pub fn meamg<T: Scalar>(x: &[T]) -> T {
    T::asum(x) / T::from_count(x.len())
}

/// Mean square, `sum(x^2) / n`. NaN for an empty slice.
pub fn measq<T: Scalar>(x: &[T]) -> T {
    T::dot(x, x) / T::from_count(x.len())
}

/// Root mean square, `sqrt(measq(x))`.
pub fn rmsq<T: Scalar>(x: &[T]) -> T {
    measq(x).sqrt()
}

/// Inner product `x · y` (BLAS `dot`).
pub fn dot<T: Scalar>(x: &[T], y: &[T]) -> Result<T> {
    ensure_same_len(x.len(), y.len())?;
    Ok(T::dot(x, y))
}

/// Squared Euclidean distance between `x` and `y`.
pub fn distsq<T: Real>(x: &[T], y: &[T]) -> Result<T> {
    ensure_same_len(x.len(), y.len())?;
    Ok(x.iter()
        .zip(y)
        .map(|(&a, &b)| {
            let d = a - b;
            d * d
        })
        .sum())
}

/// Euclidean distance between `x` and `y`.
pub fn dist<T: Real>(x: &[T], y: &[T]) -> Result<T> {
    distsq(x, y).map(|d| d.sqrt())
}

// ============================================================================
// Vector-vector arithmetic
// ============================================================================

/// `x + y`, computed as `axpy(1, x, y)`.
pub fn add<T: Scalar>(x: &[T], y: &[T]) -> Result<Vec<T>> {
    ensure_same_len(x.len(), y.len())?;
    let mut out = y.to_vec();
    T::axpy(T::one(), x, &mut out);
    Ok(out)
}

/// `x - y`, computed as `axpy(-1, y, x)`.
pub fn sub<T: Scalar>(x: &[T], y: &[T]) -> Result<Vec<T>> {
    ensure_same_len(x.len(), y.len())?;
    let mut out = x.to_vec();
    T::axpy(-T::one(), y, &mut out);
    Ok(out)
}

/// Element-wise product.
pub fn mul<T: Real>(x: &[T], y: &[T]) -> Result<Vec<T>> {
    zip_map2(x, y, |a, b| a * b)
}

/// Element-wise quotient.
pub fn div<T: Real>(x: &[T], y: &[T]) -> Result<Vec<T>> {
    zip_map2(x, y, |a, b| a / b)
}

/// Element-wise truncated remainder (C `fmod`): the result has the sign of
/// `x` and magnitude below `|y|`.
pub fn rem<T: Real>(x: &[T], y: &[T]) -> Result<Vec<T>> {
    zip_map2(x, y, |a, b| a % b)
}

/// Element-wise IEEE 754 remainder: `x - n * y` with `n` the integer nearest
/// `x / y`, ties to even.
pub fn remainder<T: Real>(x: &[T], y: &[T]) -> Result<Vec<T>> {
    zip_map2(x, y, ieee_remainder)
}

fn ieee_remainder<T: Real>(x: T, y: T) -> T {
    if y.is_zero() || x.is_infinite() || x.is_nan() || y.is_nan() {
        return T::nan();
    }
    if y.is_infinite() {
        return x;
    }
    let two = T::one() + T::one();
    let r = x % y;
    let half = y.abs() / two;
    let ra = r.abs();
    // On an exact tie, round the quotient to even.
    if ra > half || (ra == half && ((x - r) / y) % two != T::zero()) {
        r - r.signum() * y.abs()
    } else {
        r
    }
}

/// Element-wise power `x[i]^y[i]`.
pub fn pow<T: Real>(x: &[T], y: &[T]) -> Result<Vec<T>> {
    zip_map2(x, y, |a, b| a.powf(b))
}

// ============================================================================
// Vector-scalar arithmetic
// ============================================================================

/// `x + s` for every element.
pub fn add_scalar<T: Real>(x: &[T], s: T) -> Vec<T> {
    map(x, |a| a + s)
}

/// `x - s` for every element.
pub fn sub_scalar<T: Real>(x: &[T], s: T) -> Vec<T> {
    map(x, |a| a - s)
}

/// `x * s` for every element (BLAS `scal`).
pub fn mul_scalar<T: Scalar>(x: &[T], s: T) -> Vec<T> {
    let mut out = x.to_vec();
    T::scal(s, &mut out);
    out
}

/// `x / s` for every element.
pub fn div_scalar<T: Real>(x: &[T], s: T) -> Vec<T> {
    map(x, |a| a / s)
}

/// `x^p` for every element.
pub fn pow_scalar<T: Real>(x: &[T], p: T) -> Vec<T> {
    map(x, |a| a.powf(p))
}

/// Element-wise square root.
pub fn sqrt<T: Real>(x: &[T]) -> Vec<T> {
    map(x, |a| a.sqrt())
}

/// Element-wise square.
pub fn sq<T: Real>(x: &[T]) -> Vec<T> {
    map(x, |a| a * a)
}

/// Concatenate slices end to end.
pub fn concat<T: Copy, S: AsRef<[T]>>(parts: &[S]) -> Vec<T> {
    let total = parts.iter().map(|p| p.as_ref().len()).sum();
    let mut out = Vec::with_capacity(total);
    for part in parts {
        out.extend_from_slice(part.as_ref());
    }
    out
}

// ============================================================================
// Compound assignment
// ============================================================================

/// `x += y`
pub fn add_assign<T: Scalar>(x: &mut [T], y: &[T]) -> Result<()> {
    ensure_same_len(x.len(), y.len())?;
    T::axpy(T::one(), y, x);
    Ok(())
}

/// `x -= y`
pub fn sub_assign<T: Scalar>(x: &mut [T], y: &[T]) -> Result<()> {
    ensure_same_len(x.len(), y.len())?;
    T::axpy(-T::one(), y, x);
    Ok(())
}

/// `x *= y` element-wise.
pub fn mul_assign<T: Real>(x: &mut [T], y: &[T]) -> Result<()> {
    zip_map2_in_place(x, y, |a, b| a * b)
}

/// `x /= y` element-wise.
pub fn div_assign<T: Real>(x: &mut [T], y: &[T]) -> Result<()> {
    zip_map2_in_place(x, y, |a, b| a / b)
}

/// `x *= alpha` (BLAS `scal`).
pub fn scale_assign<T: Scalar>(x: &mut [T], alpha: T) {
    T::scal(alpha, x);
}
