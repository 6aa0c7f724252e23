//! Element-wise vector math and a row-major [`Matrix`] type backed by
//! BLAS/LAPACK.
//!
//! Every operation validates shapes, hands the work to a kernel, and wraps the
//! result in a newly allocated `Vec` or [`Matrix`]. With the `blas` feature
//! the kernels are CBLAS/LAPACKE routines from the system OpenBLAS; without
//! it, portable Rust loops with the same contracts are used.
//!
//! # Core Types
//!
//! - [`Matrix`]: owned row-major 2D container (`grid.len() == rows * columns`)
//! - [`MatrixView`] / [`VectorView`]: zero-copy borrowed views (reshape,
//!   transpose, strided columns)
//! - [`Real`]: element bound, implemented for `f32` and `f64`
//!
//! # Vector Functions
//!
//! Free functions over `&[T]` live in [`vector`]:
//!
//! - Reductions: [`sum`], [`asum`], [`max`], [`argmax`], [`min`], [`argmin`],
//!   [`mean`], [`meamg`], [`measq`], [`dot`], [`dist`]
//! - Arithmetic: [`add`], [`sub`], [`mul`], [`div`], [`rem`], [`remainder`]
//! - Transcendental: [`vector::sin`], [`vector::exp`], [`vector::log`], ...
//! - Auxiliary: [`vector::abs`], [`vector::clip`], [`vector::threshold`], ...
//!
//! # Example
//!
//! ```rust
//! use accel_math::{Matrix, vector};
//!
//! let x = [1.0, 2.0, 3.0];
//! assert_eq!(vector::sum(&x), 6.0);
//! assert_eq!(vector::argmax(&x), Some(2));
//!
//! let row = Matrix::from_rows(&[[1.0, 2.0, 3.0]]).unwrap();
//! let col = Matrix::from_rows(&[[1.0], [1.0], [1.0]]).unwrap();
//! let product = row.dot(&col).unwrap();
//! assert_eq!(product.as_slice(), &[6.0]);
//! ```
//!
//! # Errors
//!
//! Dimension mismatches and LAPACK failures are reported as [`AccelError`]
//! values. Operator impls (`+`, `-`, `*`, ...) cannot return a `Result` and
//! panic with the same message instead; use the named functions to handle
//! the error.

pub mod blas;
pub mod lapack;
pub mod map;
pub mod matrix;
mod naive;
pub mod vector;

pub use accel_traits::Real;

pub use blas::{BlasScalar, Trans};
pub use lapack::LapackScalar;

pub use matrix::{Axis, Matrix, MatrixView, VectorView};

pub use vector::{
    add, argmax, argmin, asum, concat, dist, div, dot, max, meamg, mean, measq, min, mul, rem,
    remainder, sub, sum,
};

// ============================================================================
// Constants
// ============================================================================

/// Minimum element count for which the `parallel` feature splits an
/// element-wise map across rayon workers.
pub const MIN_THREAD_LENGTH: usize = 1 << 15;

/// Tile edge length for the blocked transpose kernel.
pub const TRANSPOSE_TILE: usize = 16;

/// Element types usable with every operation in this crate.
///
/// `Real` plus the native BLAS and LAPACK entry points for that precision.
pub trait Scalar: Real + BlasScalar + LapackScalar {}

impl<T> Scalar for T where T: Real + BlasScalar + LapackScalar {}

// ============================================================================
// Error types
// ============================================================================

/// Errors that can occur during vector and matrix operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AccelError {
    /// Operand vectors have different lengths.
    #[error("length mismatch: {0} vs {1}")]
    LengthMismatch(usize, usize),

    /// Matrix shapes are incompatible for the operation.
    #[error("shape mismatch: {0:?} vs {1:?}")]
    ShapeMismatch((usize, usize), (usize, usize)),

    /// Matrix is not square when a square matrix was required.
    #[error("non-square matrix: rows={rows}, cols={cols}")]
    NonSquare { rows: usize, cols: usize },

    /// LU factorization found an exactly zero pivot.
    #[error("matrix is singular: U({index}, {index}) is exactly zero")]
    Singular { index: usize },

    /// A matrix was constructed with zero rows or columns.
    #[error("matrix dimensions must be non-zero: rows={rows}, cols={cols}")]
    EmptyDimension { rows: usize, cols: usize },

    /// The operation needs at least one element.
    #[error("input must not be empty")]
    EmptyInput,

    /// `rows * cols` does not fit in `usize`.
    #[error("matrix dimensions overflow: rows={rows}, cols={cols}")]
    DimensionOverflow { rows: usize, cols: usize },

    /// Backing data does not fill the requested dimensions.
    #[error("data length {len} does not match {rows}x{cols}")]
    DataLength { len: usize, rows: usize, cols: usize },

    /// Reshape would change the number of elements.
    #[error("cannot reshape {rows}x{cols} into {new_rows}x{new_cols}")]
    ReshapeSize {
        rows: usize,
        cols: usize,
        new_rows: usize,
        new_cols: usize,
    },

    /// Row, column, or element index outside the matrix.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Lower bound above upper bound in a clamp.
    #[error("invalid range: low {low} > high {high}")]
    InvalidRange { low: f64, high: f64 },

    /// LAPACK rejected an argument (negative `info`).
    #[error("{routine} returned info = {info}")]
    Lapack { routine: &'static str, info: i32 },
}

/// Result type for vector and matrix operations.
pub type Result<T> = std::result::Result<T, AccelError>;

#[inline]
pub(crate) fn ensure_same_len(a: usize, b: usize) -> Result<()> {
    if a != b {
        return Err(AccelError::LengthMismatch(a, b));
    }
    Ok(())
}
