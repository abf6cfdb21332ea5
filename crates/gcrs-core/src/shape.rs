//! Shape model for GCRS arrays.
//!
//! An N-dimensional [`Shape`] is folded into a 2-D [`CompressedShape`] by
//! splitting its axes into two contiguous groups:
//!
//! - the **row group**: the first ⌈N/2⌉ axes
//! - the **column group**: the remaining ⌊N/2⌋ axes
//!
//! On an odd split the extra axis goes to the row group. A 1-D shape has an
//! empty column group, so every element lands in column 0.
//!
//! # Examples
//!
//! ```
//! use gcrs_core::{CompressedShape, Shape};
//!
//! let shape = Shape::new(&[2, 2, 2]).unwrap();
//! assert_eq!(shape.split_point(), 2);
//! assert_eq!(shape.compressed(), CompressedShape::new(4, 2));
//!
//! let vector = Shape::new(&[5]).unwrap();
//! assert_eq!(vector.compressed(), CompressedShape::new(5, 1));
//! ```

use smallvec::SmallVec;
use std::fmt;

use crate::error::{GcrsResult, ShapeMismatchError};

/// Axis sizes or coordinates, inline for up to 6 axes.
pub type Dims = SmallVec<[usize; 6]>;

/// An N-dimensional coordinate.
pub type Coordinate = SmallVec<[usize; 6]>;

/// Validated N-dimensional shape.
///
/// Construction guarantees a non-empty list of positive axis sizes whose
/// row-group and column-group products both fit in `usize`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: Dims,
    compressed: CompressedShape,
}

impl Shape {
    /// Create a shape from axis sizes.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if `dims` is empty or contains a zero
    /// - `ShapeMismatch` if either axis group's size product overflows
    pub fn new(dims: &[usize]) -> GcrsResult<Self> {
        if dims.is_empty() {
            return Err(ShapeMismatchError::EmptyShape.into());
        }
        if let Some(axis) = dims.iter().position(|&d| d == 0) {
            return Err(ShapeMismatchError::ZeroAxis { axis }.into());
        }

        let split = split_point(dims.len());
        let overflow = || ShapeMismatchError::Overflow {
            dims: dims.to_vec(),
        };
        let nrows = checked_product(&dims[..split]).ok_or_else(overflow)?;
        let ncols = checked_product(&dims[split..]).ok_or_else(overflow)?;

        Ok(Self {
            dims: Dims::from_slice(dims),
            compressed: CompressedShape::new(nrows, ncols),
        })
    }

    /// Number of axes
    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Axis sizes
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Index of the first column-group axis, ⌈N/2⌉
    pub fn split_point(&self) -> usize {
        split_point(self.dims.len())
    }

    /// Axis sizes of the row group
    pub fn row_dims(&self) -> &[usize] {
        &self.dims[..self.split_point()]
    }

    /// Axis sizes of the column group (empty for 1-D shapes)
    pub fn col_dims(&self) -> &[usize] {
        &self.dims[self.split_point()..]
    }

    /// Derived 2-D shape
    pub fn compressed(&self) -> CompressedShape {
        self.compressed
    }

    /// Total number of logical elements, `None` on overflow
    pub fn num_elements(&self) -> Option<usize> {
        self.compressed.nrows.checked_mul(self.compressed.ncols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, d) in self.dims.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", d)?;
        }
        write!(f, ")")
    }
}

/// 2-D shape of the compressed representation: (rows, columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompressedShape {
    pub nrows: usize,
    pub ncols: usize,
}

impl CompressedShape {
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols }
    }

    /// Derive the compressed shape of an N-d shape
    pub fn from_shape(shape: &Shape) -> Self {
        shape.compressed()
    }

    /// Whether `position` lies inside this shape
    pub fn contains(&self, position: CompressedPosition) -> bool {
        position.row < self.nrows && position.col < self.ncols
    }

    /// Whether every position of `other` also fits in `self`
    pub fn covers(&self, other: &CompressedShape) -> bool {
        other.nrows <= self.nrows && other.ncols <= self.ncols
    }

    pub fn as_tuple(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }
}

impl From<(usize, usize)> for CompressedShape {
    fn from((nrows, ncols): (usize, usize)) -> Self {
        Self::new(nrows, ncols)
    }
}

/// Position of an element in the compressed 2-D matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompressedPosition {
    pub row: usize,
    pub col: usize,
}

impl CompressedPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[inline]
pub(crate) fn split_point(ndim: usize) -> usize {
    ndim.div_ceil(2)
}

fn checked_product(dims: &[usize]) -> Option<usize> {
    dims.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, GcrsError};

    #[test]
    fn test_even_split() {
        let shape = Shape::new(&[2, 3]).unwrap();
        assert_eq!(shape.row_dims(), &[2]);
        assert_eq!(shape.col_dims(), &[3]);
        assert_eq!(shape.compressed(), CompressedShape::new(2, 3));
    }

    #[test]
    fn test_odd_split_favours_rows() {
        let shape = Shape::new(&[2, 3, 4, 5, 6]).unwrap();
        assert_eq!(shape.split_point(), 3);
        assert_eq!(shape.row_dims(), &[2, 3, 4]);
        assert_eq!(shape.col_dims(), &[5, 6]);
        assert_eq!(shape.compressed().as_tuple(), (24, 30));
        assert_eq!(shape.num_elements(), Some(720));
    }

    #[test]
    fn test_one_dimensional() {
        let shape = Shape::new(&[7]).unwrap();
        assert!(shape.col_dims().is_empty());
        assert_eq!(shape.compressed(), CompressedShape::new(7, 1));
    }

    #[test]
    fn test_invalid_shapes() {
        let err = Shape::new(&[]).unwrap_err();
        assert_eq!(err, GcrsError::from(ShapeMismatchError::EmptyShape));

        let err = Shape::new(&[3, 0, 2]).unwrap_err();
        assert_eq!(err, GcrsError::from(ShapeMismatchError::ZeroAxis { axis: 1 }));

        let err = Shape::new(&[usize::MAX, 2, 1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_covers_and_contains() {
        let big = CompressedShape::new(4, 4);
        let small = CompressedShape::from((2, 4));
        assert!(big.covers(&small));
        assert!(!small.covers(&big));
        assert!(small.contains(CompressedPosition::new(1, 3)));
        assert!(!small.contains(CompressedPosition::new(2, 0)));
    }

    #[test]
    fn test_display() {
        let shape = Shape::new(&[2, 3, 4]).unwrap();
        assert_eq!(shape.to_string(), "(2, 3, 4)");
    }
}
