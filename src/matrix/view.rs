//! Borrowed strided views over a matrix grid.

use super::Matrix;
use crate::{AccelError, Result};
use std::ops::Index;

/// A read-only 1D view with a fixed element stride.
///
/// Matrix columns are views with stride `columns`; rows of a transposed
/// [`MatrixView`] are too.
#[derive(Debug, Clone, Copy)]
pub struct VectorView<'a, T> {
    data: &'a [T],
    len: usize,
    stride: usize,
    offset: usize,
}

/// Check that the last element of a strided walk stays inside `data_len`.
fn validate_bounds(data_len: usize, extents: &[(usize, usize)], offset: usize) -> Result<()> {
    let mut last = offset;
    for &(len, stride) in extents {
        if len == 0 {
            return Ok(());
        }
        let span = (len - 1)
            .checked_mul(stride)
            .ok_or(AccelError::IndexOutOfBounds {
                index: usize::MAX,
                len: data_len,
            })?;
        last = last.checked_add(span).ok_or(AccelError::IndexOutOfBounds {
            index: usize::MAX,
            len: data_len,
        })?;
    }
    if last >= data_len {
        return Err(AccelError::IndexOutOfBounds {
            index: last,
            len: data_len,
        });
    }
    Ok(())
}

impl<'a, T: Copy> VectorView<'a, T> {
    /// Create a view of `len` elements starting at `offset`, `stride` apart.
    ///
    /// # Errors
    /// Returns an error if the view would read past the end of `data`.
    pub fn new(data: &'a [T], len: usize, stride: usize, offset: usize) -> Result<Self> {
        validate_bounds(data.len(), &[(len, stride.max(1))], offset)?;
        Ok(Self::from_parts(data, len, stride, offset))
    }

    /// Caller guarantees the walk stays in bounds.
    #[inline]
    pub(crate) fn from_parts(data: &'a [T], len: usize, stride: usize, offset: usize) -> Self {
        Self {
            data,
            len,
            stride: stride.max(1),
            offset,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distance between consecutive elements in the backing buffer.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<T> {
        if i < self.len {
            Some(self.data[self.offset + i * self.stride])
        } else {
            None
        }
    }

    /// The elements as a plain slice, when they are contiguous.
    pub fn as_slice(&self) -> Option<&'a [T]> {
        if self.stride == 1 || self.len <= 1 {
            Some(&self.data[self.offset..self.offset + self.len])
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = T> + 'a {
        let data = self.data;
        let (offset, stride) = (self.offset, self.stride);
        (0..self.len).map(move |i| data[offset + i * stride])
    }

    /// Copies the elements into a new vector.
    pub fn to_vec(&self) -> Vec<T> {
        match self.as_slice() {
            Some(s) => s.to_vec(),
            None => self.iter().collect(),
        }
    }
}

impl<T> Index<usize> for VectorView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        assert!(i < self.len, "index {i} out of bounds for length {}", self.len);
        &self.data[self.offset + i * self.stride]
    }
}

/// A read-only 2D view with independent row and column strides.
///
/// Produced by [`Matrix::view`], [`Matrix::reshaped`], and
/// [`MatrixView::t`]; none of these copy. Use [`MatrixView::to_matrix`] to
/// get an owned, mutable copy.
#[derive(Debug, Clone, Copy)]
pub struct MatrixView<'a, T> {
    data: &'a [T],
    rows: usize,
    columns: usize,
    row_stride: usize,
    col_stride: usize,
}

impl<'a, T: Copy> MatrixView<'a, T> {
    /// Create a view over `data`.
    ///
    /// # Errors
    /// Returns [`AccelError::EmptyDimension`] for a zero dimension and
    /// [`AccelError::IndexOutOfBounds`] if the view would read past `data`.
    pub fn new(
        data: &'a [T],
        rows: usize,
        columns: usize,
        row_stride: usize,
        col_stride: usize,
    ) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(AccelError::EmptyDimension {
                rows,
                cols: columns,
            });
        }
        validate_bounds(data.len(), &[(rows, row_stride), (columns, col_stride)], 0)?;
        Ok(Self::from_parts(data, rows, columns, row_stride, col_stride))
    }

    #[inline]
    pub(crate) fn from_parts(
        data: &'a [T],
        rows: usize,
        columns: usize,
        row_stride: usize,
        col_stride: usize,
    ) -> Self {
        Self {
            data,
            rows,
            columns,
            row_stride,
            col_stride,
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

    #[inline]
    pub fn size(&self) -> usize {
        self.rows * self.columns
    }

    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// `(row_stride, col_stride)` in elements.
    #[inline]
    pub fn strides(&self) -> (usize, usize) {
        (self.row_stride, self.col_stride)
    }

    /// True when the view is a dense row-major block starting at the front
    /// of its buffer.
    #[inline]
    pub fn is_row_major(&self) -> bool {
        (self.col_stride == 1 || self.columns == 1)
            && (self.row_stride == self.columns || self.rows == 1)
    }

    #[inline]
    pub fn get(&self, row: usize, column: usize) -> Option<T> {
        if row < self.rows && column < self.columns {
            Some(self.data[row * self.row_stride + column * self.col_stride])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Result<VectorView<'a, T>> {
        super::check_index(row, self.rows)?;
        Ok(VectorView::from_parts(
            self.data,
            self.columns,
            self.col_stride,
            row * self.row_stride,
        ))
    }

    pub fn column(&self, column: usize) -> Result<VectorView<'a, T>> {
        super::check_index(column, self.columns)?;
        Ok(VectorView::from_parts(
            self.data,
            self.rows,
            self.row_stride,
            column * self.col_stride,
        ))
    }

    /// Zero-copy transpose: swaps dimensions and strides.
    pub fn t(&self) -> MatrixView<'a, T> {
        Self::from_parts(
            self.data,
            self.columns,
            self.rows,
            self.col_stride,
            self.row_stride,
        )
    }

    /// Elements in row-major order of the view.
    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        let view = *self;
        (0..view.rows).flat_map(move |r| {
            (0..view.columns).map(move |c| view.data[r * view.row_stride + c * view.col_stride])
        })
    }

    /// Copies the view into an owned row-major matrix.
    pub fn to_matrix(&self) -> Matrix<T> {
        let grid = if self.is_row_major() {
            self.data[..self.size()].to_vec()
        } else {
            self.iter().collect()
        };
        Matrix::from_parts(self.rows, self.columns, grid)
    }
}

impl<T> Index<(usize, usize)> for MatrixView<'_, T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, column): (usize, usize)) -> &T {
        assert!(
            row < self.rows && column < self.columns,
            "index ({row}, {column}) out of bounds for {}x{} view",
            self.rows,
            self.columns
        );
        &self.data[row * self.row_stride + column * self.col_stride]
    }
}
