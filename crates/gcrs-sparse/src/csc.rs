//! Column-compressed 2-D matrix holding the nonzeros of a GCRS array
//!
//! # Format
//!
//! For an m×n matrix with nnz stored entries:
//! - `indptr`: length n+1, `indptr[j]` is the start of column j
//! - `indices`: length nnz, the row of each entry, strictly ascending within
//!   each column
//! - `data`: length nnz, the payload of each entry
//! - `shape`: (m, n)
//!
//! The payload type is opaque; nothing here needs arithmetic on it.
//!
//! # Examples
//!
//! ```
//! use gcrs_sparse::CompressedMatrix;
//!
//! // [1  0  4]
//! // [0  3  0]
//! // [2  0  5]
//! let indptr = vec![0, 2, 3, 5];
//! let indices = vec![0, 2, 1, 0, 2];
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let m = CompressedMatrix::new(indptr, indices, data, (3, 3)).unwrap();
//! assert_eq!(m.nnz(), 5);
//! assert_eq!(m.get(2, 2), Some(&5.0));
//! assert_eq!(m.get(1, 0), None);
//! ```

use gcrs_core::error::{GcrsResult, IndexError, PreconditionError, ShapeMismatchError};
use gcrs_core::CompressedShape;
use scirs2_core::ndarray_ext::Array2;

use crate::codec::{compress_dimension, pointer_len, validate_pointer};

/// Column-compressed sparse matrix
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedMatrix<T> {
    /// Column pointers, length ncols + 1, last entry = nnz
    indptr: Vec<usize>,
    /// Row index of each stored entry
    indices: Vec<usize>,
    /// Payload of each stored entry
    data: Vec<T>,
    /// (nrows, ncols)
    shape: (usize, usize),
}

impl<T> CompressedMatrix<T> {
    /// Create a matrix from its parts.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if `indptr.len() != ncols + 1` or `indices` and `data`
    ///   differ in length
    /// - `PreconditionViolated` if `indptr` does not start at 0, decreases, or
    ///   does not end at nnz, or rows within a column are not strictly ascending
    /// - `OutOfBounds` if a row index is not below `nrows`
    pub fn new(
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<T>,
        shape: (usize, usize),
    ) -> GcrsResult<Self> {
        let (nrows, ncols) = shape;

        let expected = pointer_len(ncols)?;
        if indptr.len() != expected {
            return Err(ShapeMismatchError::PointerLength {
                expected,
                got: indptr.len(),
            }
            .into());
        }
        if indices.len() != data.len() {
            return Err(ShapeMismatchError::LengthMismatch {
                indices: indices.len(),
                data: data.len(),
            }
            .into());
        }

        validate_pointer(&indptr)?;
        let nnz = indices.len();
        let last = indptr[ncols];
        if last != nnz {
            return Err(PreconditionError::PointerEnd { last, nnz }.into());
        }

        for col in 0..ncols {
            let segment = &indices[indptr[col]..indptr[col + 1]];
            if let Some(&row) = segment.iter().find(|&&r| r >= nrows) {
                return Err(IndexError::RowOutOfBounds { row, nrows }.into());
            }
            if let Some(offset) = segment.windows(2).position(|w| w[0] >= w[1]) {
                return Err(PreconditionError::UnsortedSegment {
                    col,
                    position: indptr[col] + offset + 1,
                }
                .into());
            }
        }

        Ok(Self::from_parts_unchecked(indptr, indices, data, shape))
    }

    /// Create a matrix without validation.
    ///
    /// The caller guarantees every invariant checked by [`CompressedMatrix::new`].
    pub fn from_parts_unchecked(
        indptr: Vec<usize>,
        indices: Vec<usize>,
        data: Vec<T>,
        shape: (usize, usize),
    ) -> Self {
        debug_assert_eq!(indptr.len().checked_sub(1), Some(shape.1));
        debug_assert_eq!(indices.len(), data.len());
        Self {
            indptr,
            indices,
            data,
            shape,
        }
    }

    /// Empty matrix with the given shape.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the column count leaves no room for the pointer array.
    pub fn zeros(shape: (usize, usize)) -> GcrsResult<Self> {
        Ok(Self {
            indptr: vec![0; pointer_len(shape.1)?],
            indices: Vec::new(),
            data: Vec::new(),
            shape,
        })
    }

    /// Build from (row, col, value) triplets in any order.
    ///
    /// # Errors
    ///
    /// - `OutOfBounds` if a triplet lies outside `shape`
    /// - `PreconditionViolated` if two triplets share a position
    pub fn from_triplets(
        shape: (usize, usize),
        triplets: impl IntoIterator<Item = (usize, usize, T)>,
    ) -> GcrsResult<Self> {
        let (nrows, ncols) = shape;
        let mut triplets: Vec<(usize, usize, T)> = triplets.into_iter().collect();
        if let Some(&(row, _, _)) = triplets.iter().find(|t| t.0 >= nrows) {
            return Err(IndexError::RowOutOfBounds { row, nrows }.into());
        }
        if let Some(&(_, col, _)) = triplets.iter().find(|t| t.1 >= ncols) {
            return Err(IndexError::ColOutOfBounds { col, ncols }.into());
        }

        triplets.sort_by_key(|&(row, col, _)| (col, row));
        if let Some(w) = triplets
            .windows(2)
            .find(|w| (w[0].0, w[0].1) == (w[1].0, w[1].1))
        {
            return Err(PreconditionError::DuplicateEntry {
                row: w[0].0,
                col: w[0].1,
            }
            .into());
        }

        let cols: Vec<usize> = triplets.iter().map(|t| t.1).collect();
        let indptr = compress_dimension(&cols, ncols)?;
        let (indices, data) = triplets.into_iter().map(|(row, _, v)| (row, v)).unzip();

        Ok(Self::from_parts_unchecked(indptr, indices, data, shape))
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// Shape of the matrix (nrows, ncols)
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    pub fn compressed_shape(&self) -> CompressedShape {
        CompressedShape::from(self.shape)
    }

    pub fn nrows(&self) -> usize {
        self.shape.0
    }

    pub fn ncols(&self) -> usize {
        self.shape.1
    }

    /// Column pointers
    pub fn indptr(&self) -> &[usize] {
        &self.indptr
    }

    /// Row indices
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Compute density (nnz / total elements), 0 for an empty shape
    pub fn density(&self) -> f64 {
        let total = self.nrows() as f64 * self.ncols() as f64;
        if total == 0.0 {
            0.0
        } else {
            self.nnz() as f64 / total
        }
    }

    /// Get a column as (row indices, values) slices
    pub fn column(&self, j: usize) -> Option<(&[usize], &[T])> {
        if j >= self.ncols() {
            return None;
        }
        let range = self.indptr[j]..self.indptr[j + 1];
        Some((&self.indices[range.clone()], &self.data[range]))
    }

    /// Look up the entry at (row, col) by binary search in the column
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.nrows() {
            return None;
        }
        let (rows, values) = self.column(col)?;
        rows.binary_search(&row).ok().map(|pos| &values[pos])
    }

    /// Iterate stored entries as (row, col, value) in column-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.indptr.windows(2).enumerate().flat_map(move |(col, w)| {
            (w[0]..w[1]).map(move |k| (self.indices[k], col, &self.data[k]))
        })
    }

    /// Split into (indptr, indices, data, shape)
    pub fn into_parts(self) -> (Vec<usize>, Vec<usize>, Vec<T>, (usize, usize)) {
        (self.indptr, self.indices, self.data, self.shape)
    }
}

impl<T: Clone + Default> CompressedMatrix<T> {
    /// Decode to a dense array, absent entries become `T::default()`
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::from_elem(self.shape, T::default());
        for (row, col, value) in self.iter() {
            dense[[row, col]] = value.clone();
        }
        dense
    }
}
