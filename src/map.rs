//! Element-wise map engine.
//!
//! Every unary and binary vector function in this crate funnels through the
//! helpers here. With the `parallel` feature, inputs of at least
//! [`MIN_THREAD_LENGTH`](crate::MIN_THREAD_LENGTH) elements are split across rayon workers; the output
//! is identical to the sequential path since each element is independent.

use crate::{ensure_same_len, Result};

#[cfg(feature = "parallel")]
use crate::MIN_THREAD_LENGTH;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "parallel")]
#[inline]
fn use_threads(len: usize) -> bool {
    len >= MIN_THREAD_LENGTH
}

/// Apply `f` to every element of `src`, returning a new vector.
pub fn map<T, U, F>(src: &[T], f: F) -> Vec<U>
where
    T: Copy + Sync,
    U: Send,
    F: Fn(T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    if use_threads(src.len()) {
        return src.par_iter().map(|&x| f(x)).collect();
    }
    src.iter().map(|&x| f(x)).collect()
}

/// Apply `f` pairwise to `a` and `b`, returning a new vector.
///
/// # Errors
/// Returns [`AccelError::LengthMismatch`](crate::AccelError::LengthMismatch)
/// if the inputs differ in length.
pub fn zip_map2<A, B, U, F>(a: &[A], b: &[B], f: F) -> Result<Vec<U>>
where
    A: Copy + Sync,
    B: Copy + Sync,
    U: Send,
    F: Fn(A, B) -> U + Sync + Send,
{
    ensure_same_len(a.len(), b.len())?;

    #[cfg(feature = "parallel")]
    if use_threads(a.len()) {
        return Ok(a
            .par_iter()
            .zip(b.par_iter())
            .map(|(&x, &y)| f(x, y))
            .collect());
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect())
}

/// Replace every element of `dst` with `f(element)`.
pub fn map_in_place<T, F>(dst: &mut [T], f: F)
where
    T: Copy + Send,
    F: Fn(T) -> T + Sync + Send,
{
    #[cfg(feature = "parallel")]
    if use_threads(dst.len()) {
        dst.par_iter_mut().for_each(|x| *x = f(*x));
        return;
    }
    for x in dst.iter_mut() {
        *x = f(*x);
    }
}

/// `dst[i] = f(dst[i], src[i])` for every `i`.
///
/// # Errors
/// Returns [`AccelError::LengthMismatch`](crate::AccelError::LengthMismatch)
/// if the inputs differ in length; `dst` is left unchanged.
pub fn zip_map2_in_place<T, S, F>(dst: &mut [T], src: &[S], f: F) -> Result<()>
where
    T: Copy + Send,
    S: Copy + Sync,
    F: Fn(T, S) -> T + Sync + Send,
{
    ensure_same_len(dst.len(), src.len())?;

    #[cfg(feature = "parallel")]
    if use_threads(dst.len()) {
        dst.par_iter_mut()
            .zip(src.par_iter())
            .for_each(|(d, &s)| *d = f(*d, s));
        return Ok(());
    }
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = f(*d, s);
    }
    Ok(())
}
