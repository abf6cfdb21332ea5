//! Coordinate mapping between N-d coordinates and compressed positions
//!
//! Each axis group is flattened with mixed-radix arithmetic, most significant
//! axis first:
//!
//! ```text
//! acc = 0
//! for i in group: acc = acc * size[i] + coord[i]
//! ```
//!
//! # Examples
//!
//! ```
//! use gcrs_core::{map_from_compressed, map_to_compressed, CompressedPosition, Shape};
//!
//! let shape = Shape::new(&[2, 2, 2]).unwrap();
//! let pos = map_to_compressed(&[1, 0, 1], &shape, &shape.compressed()).unwrap();
//! assert_eq!(pos, CompressedPosition::new(2, 1));
//!
//! let coord = map_from_compressed(pos, &shape).unwrap();
//! assert_eq!(coord.as_slice(), &[1, 0, 1]);
//! ```

use crate::error::{GcrsError, GcrsResult, IndexError, ShapeMismatchError};
use crate::shape::{CompressedPosition, CompressedShape, Coordinate, Shape};

/// Map an N-d coordinate to its (row, col) position.
///
/// `compressed` must be able to hold the shape's derived compressed shape;
/// a larger target is accepted.
///
/// # Errors
///
/// - `ShapeMismatch` if `coord` has the wrong rank or `compressed` is too small
/// - `OutOfBounds` if any coordinate value exceeds its axis size
pub fn map_to_compressed(
    coord: &[usize],
    shape: &Shape,
    compressed: &CompressedShape,
) -> GcrsResult<CompressedPosition> {
    check_compressed(shape, compressed)?;
    if coord.len() != shape.ndim() {
        return Err(GcrsError::rank_mismatch(shape.ndim(), coord.len()));
    }
    for (axis, (&c, &size)) in coord.iter().zip(shape.dims()).enumerate() {
        if c >= size {
            return Err(GcrsError::out_of_bounds(axis, c, size));
        }
    }
    Ok(map_unchecked(coord, shape))
}

/// Map a compressed position back to its N-d coordinate.
///
/// # Errors
///
/// `OutOfBounds` if the position lies outside the shape's compressed shape.
pub fn map_from_compressed(position: CompressedPosition, shape: &Shape) -> GcrsResult<Coordinate> {
    let CompressedShape { nrows, ncols } = shape.compressed();
    if position.row >= nrows {
        return Err(IndexError::RowOutOfBounds {
            row: position.row,
            nrows,
        }
        .into());
    }
    if position.col >= ncols {
        return Err(IndexError::ColOutOfBounds {
            col: position.col,
            ncols,
        }
        .into());
    }

    let mut coord = Coordinate::from_elem(0, shape.ndim());
    let split = shape.split_point();
    unflatten_group(position.row, shape.row_dims(), &mut coord[..split]);
    unflatten_group(position.col, shape.col_dims(), &mut coord[split..]);
    Ok(coord)
}

impl Shape {
    /// Map `coord` using this shape's own compressed shape
    pub fn compressed_position(&self, coord: &[usize]) -> GcrsResult<CompressedPosition> {
        map_to_compressed(coord, self, &self.compressed())
    }
}

/// Flatten one axis group. An empty group flattens to 0.
#[inline]
pub(crate) fn flatten_group(coords: &[usize], dims: &[usize]) -> usize {
    coords
        .iter()
        .zip(dims)
        .fold(0, |acc, (&c, &size)| acc * size + c)
}

/// Map without bounds checks. Caller guarantees `coord` is in bounds.
#[inline]
pub(crate) fn map_unchecked(coord: &[usize], shape: &Shape) -> CompressedPosition {
    let split = shape.split_point();
    CompressedPosition {
        row: flatten_group(&coord[..split], shape.row_dims()),
        col: flatten_group(&coord[split..], shape.col_dims()),
    }
}

/// Check that `compressed` can hold every position of `shape`.
///
/// # Errors
///
/// `ShapeMismatch` if either dimension of `compressed` is too small.
pub fn check_compressed(shape: &Shape, compressed: &CompressedShape) -> GcrsResult<()> {
    let derived = shape.compressed();
    if !compressed.covers(&derived) {
        return Err(ShapeMismatchError::Compressed {
            expected: derived.as_tuple(),
            got: compressed.as_tuple(),
        }
        .into());
    }
    Ok(())
}

fn unflatten_group(mut flat: usize, dims: &[usize], out: &mut [usize]) {
    for (slot, &size) in out.iter_mut().zip(dims).rev() {
        *slot = flat % size;
        flat /= size;
    }
}
