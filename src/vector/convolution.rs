//! Direct convolution and cross-correlation.

use crate::{ensure_same_len, AccelError, Result};
use accel_traits::Real;

/// Full linear convolution of `x` with `kernel`.
///
/// Output length is `x.len() + kernel.len() - 1`:
/// `out[n] = sum_k x[k] * kernel[n - k]`.
///
/// # Errors
/// Returns [`AccelError::EmptyInput`] if either input is empty.
pub fn conv<T: Real>(x: &[T], kernel: &[T]) -> Result<Vec<T>> {
    if x.is_empty() || kernel.is_empty() {
        return Err(AccelError::EmptyInput);
    }
    let mut out = vec![T::zero(); x.len() + kernel.len() - 1];
    for (i, &xi) in x.iter().enumerate() {
        for (o, &kj) in out[i..i + kernel.len()].iter_mut().zip(kernel) {
            *o += xi * kj;
        }
    }
    Ok(out)
}

/// Full cross-correlation of two equal-length signals.
///
/// Output has `2n - 1` entries for lags `-(n - 1) ..= n - 1`, with
/// `out[lag + n - 1] = sum_i x[i + lag] * y[i]`.
///
/// # Errors
/// Returns [`AccelError::EmptyInput`] for empty inputs and
/// [`AccelError::LengthMismatch`] if the lengths differ.
pub fn xcorr<T: Real>(x: &[T], y: &[T]) -> Result<Vec<T>> {
    ensure_same_len(x.len(), y.len())?;
    let reversed: Vec<T> = y.iter().rev().copied().collect();
    conv(x, &reversed)
}
