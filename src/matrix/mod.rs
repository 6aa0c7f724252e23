//! Row-major matrix container.
//!
//! A [`Matrix`] exclusively owns a flat buffer of `rows * columns` elements;
//! element `(r, c)` lives at `grid[r * columns + c]`. Rows are contiguous
//! slices, columns are strided [`VectorView`]s.
//!
//! Reading never copies: [`Matrix::row`], [`Matrix::column`],
//! [`Matrix::view`], [`Matrix::reshaped`], and [`MatrixView::t`] all borrow
//! the grid. Writing always goes through an owning `Matrix`, and
//! [`MatrixView::to_matrix`] is the explicit copy that turns a view into one.

mod linalg;
mod operators;
mod view;

pub use linalg::{
    add, asum, asum_axis, det, div, dot, dot_vector, eldiv, elmul, exp, inv, pow, scale, sub, sum,
    sum_axis, transpose, vector_dot, Axis,
};
pub use view::{MatrixView, VectorView};

use crate::{ensure_same_len, AccelError, Result};
use accel_traits::Real;
use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice::ChunksExact;

/// A dense row-major matrix.
///
/// # Example
///
/// ```rust
/// use accel_math::Matrix;
///
/// let mut m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(m[(1, 2)], 6.0);
/// assert_eq!(m.row(0).unwrap(), &[1.0, 2.0, 3.0]);
/// assert_eq!(m.column(1).unwrap().to_vec(), vec![2.0, 5.0]);
///
/// m.set_column(0, &[0.0, 0.0]).unwrap();
/// let m = m.reshape(3, 2).unwrap();
/// assert_eq!(m.row(2).unwrap(), &[5.0, 6.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    columns: usize,
    grid: Vec<T>,
}

#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(AccelError::IndexOutOfBounds { index, len });
    }
    Ok(())
}

/// Validates the dimensions and returns `rows * cols`.
#[inline]
fn check_dims(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(AccelError::EmptyDimension { rows, cols });
    }
    rows.checked_mul(cols).ok_or(AccelError::DimensionOverflow { rows, cols })
}

impl<T: Copy> Matrix<T> {
    /// Creates a `rows x columns` matrix with every element set to `fill`.
    ///
    /// # Errors
    /// Returns [`AccelError::EmptyDimension`] if either dimension is zero and
    /// [`AccelError::DimensionOverflow`] if `rows * columns` overflows.
    pub fn new(rows: usize, columns: usize, fill: T) -> Result<Self> {
        let size = check_dims(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            grid: vec![fill; size],
        })
    }

    /// Wraps row-major `data` as a `rows x columns` matrix.
    ///
    /// # Errors
    /// Returns [`AccelError::EmptyDimension`] for a zero dimension and
    /// [`AccelError::DataLength`] if `data.len() != rows * columns`.
    pub fn from_vec(rows: usize, columns: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(AccelError::EmptyDimension {
                rows,
                cols: columns,
            });
        }
        if rows.checked_mul(columns) != Some(data.len()) {
            return Err(AccelError::DataLength {
                len: data.len(),
                rows,
                cols: columns,
            });
        }
        Ok(Self {
            rows,
            columns,
            grid: data,
        })
    }

    /// Builds a matrix from a list of equally long rows.
    ///
    /// # Errors
    /// Returns [`AccelError::EmptyDimension`] if there are no rows or the rows
    /// are empty, and [`AccelError::LengthMismatch`] for ragged input.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let columns = rows.first().map_or(0, |r| r.as_ref().len());
        let size = check_dims(rows.len(), columns)?;
        let mut grid = Vec::with_capacity(size);
        for row in rows {
            let row = row.as_ref();
            ensure_same_len(row.len(), columns)?;
            grid.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            columns,
            grid,
        })
    }

    /// Builds a matrix by calling `f(row, column)` for every element in
    /// row-major order.
    ///
    /// # Errors
    /// Returns [`AccelError::EmptyDimension`] if either dimension is zero and
    /// [`AccelError::DimensionOverflow`] if `rows * columns` overflows; `f`
    /// is not called in either case.
    pub fn from_fn<F>(rows: usize, columns: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        let size = check_dims(rows, columns)?;
        let mut grid = Vec::with_capacity(size);
        for r in 0..rows {
            for c in 0..columns {
                grid.push(f(r, c));
            }
        }
        Ok(Self {
            rows,
            columns,
            grid,
        })
    }

    /// A `1 x n` matrix holding `values`.
    pub fn row_vector(values: &[T]) -> Result<Self> {
        Self::from_vec(1, values.len(), values.to_vec())
    }

    /// An `n x 1` matrix holding `values`.
    pub fn column_vector(values: &[T]) -> Result<Self> {
        Self::from_vec(values.len(), 1, values.to_vec())
    }

    /// Unchecked constructor for results whose shape is already validated.
    #[inline]
    pub(crate) fn from_parts(rows: usize, columns: usize, grid: Vec<T>) -> Self {
        debug_assert_eq!(grid.len(), rows * columns);
        Self {
            rows,
            columns,
            grid,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of elements, `rows * columns`.
    #[inline]
    pub fn size(&self) -> usize {
        self.grid.len()
    }

    /// `(rows, columns)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// The row-major backing buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.grid
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.grid
    }

    /// Consumes the matrix, returning its row-major buffer.
    pub fn into_vec(self) -> Vec<T> {
        self.grid
    }

    /// Element at `(row, column)`, or `None` if out of range.
    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<T> {
        if row < self.rows && column < self.columns {
            Some(self.grid[row * self.columns + column])
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, row: usize, column: usize) -> Option<&mut T> {
        if row < self.rows && column < self.columns {
            Some(&mut self.grid[row * self.columns + column])
        } else {
            None
        }
    }

    /// Sets the element at `(row, column)`.
    pub fn set(&mut self, row: usize, column: usize, value: T) -> Result<()> {
        check_index(row, self.rows)?;
        check_index(column, self.columns)?;
        self.grid[row * self.columns + column] = value;
        Ok(())
    }

    /// Row `row` as a contiguous slice.
    pub fn row(&self, row: usize) -> Result<&[T]> {
        check_index(row, self.rows)?;
        let start = row * self.columns;
        Ok(&self.grid[start..start + self.columns])
    }

    pub fn row_mut(&mut self, row: usize) -> Result<&mut [T]> {
        check_index(row, self.rows)?;
        let start = row * self.columns;
        Ok(&mut self.grid[start..start + self.columns])
    }

    /// Column `column` as a view with stride `columns`.
    pub fn column(&self, column: usize) -> Result<VectorView<'_, T>> {
        check_index(column, self.columns)?;
        VectorView::new(&self.grid, self.rows, self.columns, column)
    }

    /// Overwrites row `row`; `values.len()` must equal `columns`.
    pub fn set_row(&mut self, row: usize, values: &[T]) -> Result<()> {
        ensure_same_len(values.len(), self.columns)?;
        self.row_mut(row)?.copy_from_slice(values);
        Ok(())
    }

    /// Overwrites column `column`; `values.len()` must equal `rows`.
    pub fn set_column(&mut self, column: usize, values: &[T]) -> Result<()> {
        check_index(column, self.columns)?;
        ensure_same_len(values.len(), self.rows)?;
        for (r, &v) in values.iter().enumerate() {
            self.grid[r * self.columns + column] = v;
        }
        Ok(())
    }

    /// Iterator over rows as contiguous slices.
    pub fn rows_iter(&self) -> ChunksExact<'_, T> {
        self.grid.chunks_exact(self.columns)
    }

    /// Iterator over columns as strided views.
    pub fn columns_iter(&self) -> impl ExactSizeIterator<Item = VectorView<'_, T>> + '_ {
        (0..self.columns).map(move |c| VectorView::from_parts(&self.grid, self.rows, self.columns, c))
    }

    /// Reinterprets the grid as `rows x columns` without moving data.
    ///
    /// # Errors
    /// Returns [`AccelError::ReshapeSize`] unless `rows * columns == size()`.
    pub fn reshape(self, rows: usize, columns: usize) -> Result<Self> {
        self.check_reshape(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            grid: self.grid,
        })
    }

    /// Borrowed view of the grid with new dimensions.
    pub fn reshaped(&self, rows: usize, columns: usize) -> Result<MatrixView<'_, T>> {
        self.check_reshape(rows, columns)?;
        MatrixView::new(&self.grid, rows, columns, columns, 1)
    }

    fn check_reshape(&self, rows: usize, columns: usize) -> Result<()> {
        if rows == 0 || columns == 0 || rows.checked_mul(columns) != Some(self.size()) {
            return Err(AccelError::ReshapeSize {
                rows: self.rows,
                cols: self.columns,
                new_rows: rows,
                new_cols: columns,
            });
        }
        Ok(())
    }

    /// Borrowed view of the whole matrix.
    pub fn view(&self) -> MatrixView<'_, T> {
        MatrixView::from_parts(&self.grid, self.rows, self.columns, self.columns, 1)
    }
}

impl<T: Real> Matrix<T> {
    /// A `rows x columns` matrix of zeros.
    pub fn zeros(rows: usize, columns: usize) -> Result<Self> {
        Self::new(rows, columns, T::zero())
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n {
            m.grid[i * n + i] = T::one();
        }
        Ok(m)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// # Panics
    /// Panics if `(row, column)` is out of range.
    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &T {
        assert!(
            row < self.rows && column < self.columns,
            "index ({row}, {column}) out of bounds for {}x{} matrix",
            self.rows,
            self.columns
        );
        &self.grid[row * self.columns + column]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && column < self.columns,
            "index ({row}, {column}) out of bounds for {}x{} matrix",
            self.rows,
            self.columns
        );
        &mut self.grid[row * self.columns + column]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.chunks_exact(self.columns).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix<f64> {
        Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap()
    }

    #[test]
    fn test_construction() {
        let m = Matrix::new(2, 2, 7.0f32).unwrap();
        assert_eq!(m.as_slice(), &[7.0; 4]);
        assert_eq!(m.shape(), (2, 2));
        assert!(m.is_square());

        let id = Matrix::<f64>::identity(3).unwrap();
        assert_eq!(id.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

        let f = Matrix::from_fn(2, 2, |r, c| (r * 10 + c) as f64).unwrap();
        assert_eq!(f.as_slice(), &[0.0, 1.0, 10.0, 11.0]);
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            Matrix::new(0, 3, 1.0).unwrap_err(),
            AccelError::EmptyDimension { rows: 0, cols: 3 }
        );
        assert_eq!(
            Matrix::from_vec(2, 2, vec![1.0; 3]).unwrap_err(),
            AccelError::DataLength {
                len: 3,
                rows: 2,
                cols: 2
            }
        );
        let empty: [[f64; 0]; 0] = [];
        assert!(Matrix::from_rows(&empty).is_err());
        assert_eq!(
            Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).unwrap_err(),
            AccelError::LengthMismatch(1, 2)
        );
    }

    #[test]
    fn test_vector_shapes() {
        let r = Matrix::row_vector(&[1.0, 2.0, 3.0]).unwrap();
        let c = Matrix::column_vector(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(r.shape(), (1, 3));
        assert_eq!(c.shape(), (3, 1));
        assert!(Matrix::<f64>::row_vector(&[]).is_err());
    }

    #[test]
    fn test_element_access() {
        let mut m = sample();
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m.get(1, 2), Some(6.0));
        assert_eq!(m.get(2, 0), None);
        m[(1, 0)] = 40.0;
        m.set(0, 0, 10.0).unwrap();
        *m.get_mut(0, 2).unwrap() = 30.0;
        assert_eq!(m.as_slice(), &[10.0, 2.0, 30.0, 40.0, 5.0, 6.0]);
        assert_eq!(
            m.set(0, 3, 1.0).unwrap_err(),
            AccelError::IndexOutOfBounds { index: 3, len: 3 }
        );
    }

    #[test]
    #[should_panic(expected = "out of bounds for 2x3 matrix")]
    fn test_index_out_of_bounds_panics() {
        let m = sample();
        let _ = m[(2, 0)];
    }

    #[test]
    fn test_row_and_column_access() {
        let m = sample();
        assert_eq!(m.row(1).unwrap(), &[4.0, 5.0, 6.0]);
        assert_eq!(m.column(2).unwrap().to_vec(), vec![3.0, 6.0]);
        assert!(m.row(2).is_err());
        assert!(m.column(3).is_err());

        let rows: Vec<&[f64]> = m.rows_iter().collect();
        assert_eq!(rows, vec![&[1.0, 2.0, 3.0][..], &[4.0, 5.0, 6.0][..]]);
        let cols: Vec<Vec<f64>> = m.columns_iter().map(|c| c.to_vec()).collect();
        assert_eq!(cols, vec![vec![1.0, 4.0], vec![2.0, 5.0], vec![3.0, 6.0]]);
    }

    #[test]
    fn test_row_and_column_setters() {
        let mut m = sample();
        m.set_row(0, &[7.0, 8.0, 9.0]).unwrap();
        m.set_column(1, &[0.0, 0.0]).unwrap();
        assert_eq!(m.as_slice(), &[7.0, 0.0, 9.0, 4.0, 0.0, 6.0]);

        assert_eq!(
            m.set_row(0, &[1.0, 2.0]).unwrap_err(),
            AccelError::LengthMismatch(2, 3)
        );
        assert_eq!(
            m.set_column(0, &[1.0, 2.0, 3.0]).unwrap_err(),
            AccelError::LengthMismatch(3, 2)
        );
        assert!(m.set_row(5, &[1.0, 2.0, 3.0]).is_err());
        // Failed setters leave the matrix untouched.
        assert_eq!(m.as_slice(), &[7.0, 0.0, 9.0, 4.0, 0.0, 6.0]);
    }

    #[test]
    fn test_reshape() {
        let m = sample();
        let r = m.clone().reshape(3, 2).unwrap();
        assert_eq!(r.shape(), (3, 2));
        assert_eq!(r.as_slice(), m.as_slice());
        assert_eq!(r.row(1).unwrap(), &[3.0, 4.0]);
        assert_eq!(r.reshape(2, 3).unwrap(), m);

        assert_eq!(
            m.clone().reshape(4, 2).unwrap_err(),
            AccelError::ReshapeSize {
                rows: 2,
                cols: 3,
                new_rows: 4,
                new_cols: 2
            }
        );
        assert!(m.reshape(6, 0).is_err());
    }

    #[test]
    fn test_dimension_overflow_is_an_error() {
        let huge = (1usize << 63) + 1;
        let m = Matrix::from_vec(1, 2, vec![1.0, 2.0]).unwrap();
        assert_eq!(
            m.clone().reshape(huge, 2).unwrap_err(),
            AccelError::ReshapeSize {
                rows: 1,
                cols: 2,
                new_rows: huge,
                new_cols: 2
            }
        );
        assert!(m.reshaped(huge, 2).is_err());

        // (1 << 63) * 2 wraps to 0.
        assert_eq!(
            Matrix::<f64>::from_vec(1 << 63, 2, vec![]).unwrap_err(),
            AccelError::DataLength {
                len: 0,
                rows: 1 << 63,
                cols: 2
            }
        );
        assert_eq!(
            Matrix::new(usize::MAX, 2, 0.0).unwrap_err(),
            AccelError::DimensionOverflow {
                rows: usize::MAX,
                cols: 2
            }
        );
        let mut calls = 0;
        assert!(Matrix::from_fn(usize::MAX, 2, |_, _| {
            calls += 1;
            0.0
        })
        .is_err());
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_reshaped_view_borrows() {
        let m = sample();
        let v = m.reshaped(6, 1).unwrap();
        assert_eq!(v.shape(), (6, 1));
        assert_eq!(v.get(4, 0), Some(5.0));
        assert!(m.reshaped(5, 1).is_err());
    }

    #[test]
    fn test_display() {
        let m = sample();
        assert_eq!(m.to_string(), "[1, 2, 3]\n[4, 5, 6]");
    }
}
