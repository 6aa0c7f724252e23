//! Linear algebra on [`Matrix`].
//!
//! Shapes are validated up front; the arithmetic itself is a single BLAS or
//! LAPACK call (`axpy`, `scal`, `gemv`, `gemm`, `getrf`/`getri`) or an
//! element-wise map.

use super::Matrix;
use crate::blas::{Trans, BACKEND};
use crate::lapack::check_info;
use crate::map::{map, zip_map2};
use crate::{AccelError, Real, Result, Scalar, TRANSPOSE_TILE};

/// Direction of a partial reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// One result per row; the output is `rows x 1`.
    Row,
    /// One result per column; the output is `1 x columns`.
    Column,
}

#[inline]
fn ensure_same_shape<T>(x: &Matrix<T>, y: &Matrix<T>) -> Result<()> {
    if x.rows != y.rows || x.columns != y.columns {
        return Err(AccelError::ShapeMismatch(
            (x.rows, x.columns),
            (y.rows, y.columns),
        ));
    }
    Ok(())
}

#[inline]
fn ensure_square<T>(x: &Matrix<T>) -> Result<()> {
    if x.rows != x.columns {
        return Err(AccelError::NonSquare {
            rows: x.rows,
            cols: x.columns,
        });
    }
    Ok(())
}

// ============================================================================
// Element-wise
// ============================================================================

/// `x + y`; shapes must match.
pub fn add<T: Scalar>(x: &Matrix<T>, y: &Matrix<T>) -> Result<Matrix<T>> {
    ensure_same_shape(x, y)?;
    let mut grid = y.grid.clone();
    T::axpy(T::one(), &x.grid, &mut grid);
    Ok(Matrix::from_parts(x.rows, x.columns, grid))
}

/// `x - y`; shapes must match.
pub fn sub<T: Scalar>(x: &Matrix<T>, y: &Matrix<T>) -> Result<Matrix<T>> {
    ensure_same_shape(x, y)?;
    let mut grid = x.grid.clone();
    T::axpy(-T::one(), &y.grid, &mut grid);
    Ok(Matrix::from_parts(x.rows, x.columns, grid))
}

/// `alpha * x` (BLAS `scal`).
pub fn scale<T: Scalar>(x: &Matrix<T>, alpha: T) -> Matrix<T> {
    let mut grid = x.grid.clone();
    T::scal(alpha, &mut grid);
    Matrix::from_parts(x.rows, x.columns, grid)
}

/// Element-wise (Hadamard) product; shapes must match.
pub fn elmul<T: Real>(x: &Matrix<T>, y: &Matrix<T>) -> Result<Matrix<T>> {
    ensure_same_shape(x, y)?;
    let grid = zip_map2(&x.grid, &y.grid, |a, b| a * b)?;
    Ok(Matrix::from_parts(x.rows, x.columns, grid))
}

/// Element-wise quotient; shapes must match.
pub fn eldiv<T: Real>(x: &Matrix<T>, y: &Matrix<T>) -> Result<Matrix<T>> {
    ensure_same_shape(x, y)?;
    let grid = zip_map2(&x.grid, &y.grid, |a, b| a / b)?;
    Ok(Matrix::from_parts(x.rows, x.columns, grid))
}

/// Element-wise `x^p`.
pub fn pow<T: Real>(x: &Matrix<T>, p: T) -> Matrix<T> {
    Matrix::from_parts(x.rows, x.columns, map(&x.grid, |a| a.powf(p)))
}

/// Element-wise `e^x`.
pub fn exp<T: Real>(x: &Matrix<T>) -> Matrix<T> {
    Matrix::from_parts(x.rows, x.columns, map(&x.grid, |a| a.exp()))
}

// ============================================================================
// Products
// ============================================================================

/// Matrix product `x * y`; requires `x.columns() == y.rows()` (BLAS `gemm`).
pub fn dot<T: Scalar>(x: &Matrix<T>, y: &Matrix<T>) -> Result<Matrix<T>> {
    if x.columns != y.rows {
        return Err(AccelError::ShapeMismatch(
            (x.rows, x.columns),
            (y.rows, y.columns),
        ));
    }
    let (m, k, n) = (x.rows, x.columns, y.columns);
    log::trace!(
        "gemm {m}x{k} * {k}x{n} ({}, {BACKEND})",
        <T as Real>::NAME
    );
    let mut grid = vec![T::zero(); m * n];
    T::gemm(m, n, k, T::one(), &x.grid, &y.grid, T::zero(), &mut grid);
    Ok(Matrix::from_parts(m, n, grid))
}

/// Matrix-vector product `x * v`; requires `x.columns() == v.len()`
/// (BLAS `gemv`).
pub fn dot_vector<T: Scalar>(x: &Matrix<T>, v: &[T]) -> Result<Vec<T>> {
    if x.columns != v.len() {
        return Err(AccelError::ShapeMismatch(
            (x.rows, x.columns),
            (v.len(), 1),
        ));
    }
    log::trace!(
        "gemv {}x{} * {} ({}, {BACKEND})",
        x.rows,
        x.columns,
        v.len(),
        <T as Real>::NAME
    );
    let mut out = vec![T::zero(); x.rows];
    T::gemv(
        Trans::No,
        x.rows,
        x.columns,
        T::one(),
        &x.grid,
        v,
        T::zero(),
        &mut out,
    );
    Ok(out)
}

/// Vector-matrix product `v * x`; requires `v.len() == x.rows()`
/// (BLAS `gemv` on the transpose).
pub fn vector_dot<T: Scalar>(v: &[T], x: &Matrix<T>) -> Result<Vec<T>> {
    if v.len() != x.rows {
        return Err(AccelError::ShapeMismatch(
            (1, v.len()),
            (x.rows, x.columns),
        ));
    }
    log::trace!(
        "gemv {} * {}x{} ({}, {BACKEND})",
        v.len(),
        x.rows,
        x.columns,
        <T as Real>::NAME
    );
    let mut out = vec![T::zero(); x.columns];
    T::gemv(
        Trans::Yes,
        x.rows,
        x.columns,
        T::one(),
        &x.grid,
        v,
        T::zero(),
        &mut out,
    );
    Ok(out)
}

/// `x * inv(y)`; shapes must match and `y` must be invertible.
pub fn div<T: Scalar>(x: &Matrix<T>, y: &Matrix<T>) -> Result<Matrix<T>> {
    ensure_same_shape(x, y)?;
    let y_inv = inv(y)?;
    dot(x, &y_inv)
}

// ============================================================================
// Reductions
// ============================================================================

/// Sum of every element.
pub fn sum<T: Real>(x: &Matrix<T>) -> T {
    crate::vector::sum(&x.grid)
}

/// Sum of the absolute value of every element (BLAS `asum`).
pub fn asum<T: Scalar>(x: &Matrix<T>) -> T {
    T::asum(&x.grid)
}

/// Row sums (`rows x 1`) or column sums (`1 x columns`).
pub fn sum_axis<T: Scalar>(x: &Matrix<T>, axis: Axis) -> Matrix<T> {
    match axis {
        Axis::Row => {
            let sums = x.rows_iter().map(crate::vector::sum).collect();
            Matrix::from_parts(x.rows, 1, sums)
        }
        Axis::Column => {
            let mut acc = vec![T::zero(); x.columns];
            for row in x.rows_iter() {
                T::axpy(T::one(), row, &mut acc);
            }
            Matrix::from_parts(1, x.columns, acc)
        }
    }
}

/// Row or column sums of absolute values.
pub fn asum_axis<T: Scalar>(x: &Matrix<T>, axis: Axis) -> Matrix<T> {
    match axis {
        Axis::Row => {
            let sums = x.rows_iter().map(T::asum).collect();
            Matrix::from_parts(x.rows, 1, sums)
        }
        Axis::Column => {
            let mut acc = vec![T::zero(); x.columns];
            for row in x.rows_iter() {
                for (a, &v) in acc.iter_mut().zip(row) {
                    *a += v.abs();
                }
            }
            Matrix::from_parts(1, x.columns, acc)
        }
    }
}

// ============================================================================
// Factorization-based
// ============================================================================

/// Inverse of a square matrix via LU factorization (`getrf` + `getri`).
///
/// # Errors
/// [`AccelError::NonSquare`] for a rectangular input and
/// [`AccelError::Singular`] when the factorization hits a zero pivot.
pub fn inv<T: Scalar>(x: &Matrix<T>) -> Result<Matrix<T>> {
    ensure_square(x)?;
    let n = x.rows;
    log::trace!("getrf/getri {n}x{n} ({}, {BACKEND})", <T as Real>::NAME);
    let mut a = x.grid.clone();
    let mut ipiv = vec![0i32; n];
    check_info("getrf", T::getrf(n, &mut a, &mut ipiv))?;
    check_info("getri", T::getri(n, &mut a, &ipiv))?;
    Ok(Matrix::from_parts(n, n, a))
}

/// Determinant via LU factorization. Zero for a singular matrix.
pub fn det<T: Scalar>(x: &Matrix<T>) -> Result<T> {
    ensure_square(x)?;
    let n = x.rows;
    let mut a = x.grid.clone();
    let mut ipiv = vec![0i32; n];
    match check_info("getrf", T::getrf(n, &mut a, &mut ipiv)) {
        Ok(()) => {}
        Err(AccelError::Singular { .. }) => return Ok(T::zero()),
        Err(e) => return Err(e),
    }
    let mut det = T::one();
    for (k, &p) in ipiv.iter().enumerate() {
        det *= a[k * n + k];
        if (p - 1) as usize != k {
            det = -det;
        }
    }
    Ok(det)
}

/// Transpose into a new `columns x rows` matrix.
///
/// Walks the source in `TRANSPOSE_TILE`-square tiles so both the reads and
/// the scattered writes stay cache-resident.
pub fn transpose<T: Real>(x: &Matrix<T>) -> Matrix<T> {
    let (rows, cols) = (x.rows, x.columns);
    let mut grid = vec![T::zero(); rows * cols];
    for ib in (0..rows).step_by(TRANSPOSE_TILE) {
        let i_end = (ib + TRANSPOSE_TILE).min(rows);
        for jb in (0..cols).step_by(TRANSPOSE_TILE) {
            let j_end = (jb + TRANSPOSE_TILE).min(cols);
            for i in ib..i_end {
                for j in jb..j_end {
                    grid[j * rows + i] = x.grid[i * cols + j];
                }
            }
        }
    }
    Matrix::from_parts(cols, rows, grid)
}

// ============================================================================
// Method forms
// ============================================================================

impl<T: Scalar> Matrix<T> {
    /// Matrix product; see [`dot`].
    pub fn dot(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        dot(self, other)
    }

    /// Matrix-vector product; see [`dot_vector`].
    pub fn dot_vector(&self, v: &[T]) -> Result<Vec<T>> {
        dot_vector(self, v)
    }

    /// See [`inv`].
    pub fn inv(&self) -> Result<Matrix<T>> {
        inv(self)
    }

    /// See [`det`].
    pub fn det(&self) -> Result<T> {
        det(self)
    }

    pub fn scale(&self, alpha: T) -> Matrix<T> {
        scale(self, alpha)
    }

    pub fn asum(&self) -> T {
        asum(self)
    }

    pub fn sum_axis(&self, axis: Axis) -> Matrix<T> {
        sum_axis(self, axis)
    }

    pub fn asum_axis(&self, axis: Axis) -> Matrix<T> {
        asum_axis(self, axis)
    }

    /// `self += rhs`, reporting a shape mismatch instead of panicking.
    pub fn try_add_assign(&mut self, rhs: &Matrix<T>) -> Result<()> {
        ensure_same_shape(self, rhs)?;
        T::axpy(T::one(), &rhs.grid, &mut self.grid);
        Ok(())
    }

    /// `self -= rhs`, reporting a shape mismatch instead of panicking.
    pub fn try_sub_assign(&mut self, rhs: &Matrix<T>) -> Result<()> {
        ensure_same_shape(self, rhs)?;
        T::axpy(-T::one(), &rhs.grid, &mut self.grid);
        Ok(())
    }
}

impl<T: Real> Matrix<T> {
    /// See [`transpose`].
    pub fn transpose(&self) -> Matrix<T> {
        transpose(self)
    }

    pub fn sum(&self) -> T {
        sum(self)
    }

    /// Applies `f` to every element, keeping the shape.
    pub fn map<F>(&self, f: F) -> Matrix<T>
    where
        F: Fn(T) -> T + Sync + Send,
    {
        Matrix::from_parts(self.rows, self.columns, map(&self.grid, f))
    }
}
