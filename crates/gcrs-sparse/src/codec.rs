//! Pointer-array codec for one axis of a compressed representation
//!
//! A sorted coordinate array and a pointer array (`indptr`) are two encodings
//! of the same thing: how many stored entries fall on each axis value.
//!
//! ```text
//! coords = [0, 0, 2, 2, 2, 4]      axis size 5
//! indptr = [0, 2, 2, 5, 5, 6]      indptr[v+1] - indptr[v] = count of v
//! ```
//!
//! # Examples
//!
//! ```
//! use gcrs_sparse::codec::{compress_dimension, expand_dimension};
//!
//! let coords = vec![0, 0, 2, 2, 2, 4];
//! let indptr = compress_dimension(&coords, 5).unwrap();
//! assert_eq!(indptr, vec![0, 2, 2, 5, 5, 6]);
//! assert_eq!(expand_dimension(&indptr).unwrap(), coords);
//! ```

use gcrs_core::error::{GcrsResult, IndexError, PreconditionError, ShapeMismatchError};

/// Encode sorted coordinates into a caller-supplied pointer buffer.
///
/// The axis size is `indptr.len() - 1`. Runs in O(len(coords) + axis size).
///
/// # Errors
///
/// - `ShapeMismatch` if `indptr` is empty
/// - `OutOfBounds` if a coordinate is not below the axis size
/// - `PreconditionViolated` if `coords` is not non-decreasing
///
/// On error `indptr` may already be partially written; its contents are
/// unspecified. Use [`compress_dimension`] when that matters.
pub fn compress_dimension_into(coords: &[usize], indptr: &mut [usize]) -> GcrsResult<()> {
    let Some(axis_size) = indptr.len().checked_sub(1) else {
        return Err(ShapeMismatchError::PointerLength {
            expected: 1,
            got: 0,
        }
        .into());
    };

    indptr[0] = 0;
    // last axis value whose start offset has been written
    let mut cursor = 0;
    let mut prev = 0;

    for (position, &value) in coords.iter().enumerate() {
        if value >= axis_size {
            return Err(IndexError::CoordinateOutOfBounds {
                position,
                value,
                size: axis_size,
            }
            .into());
        }
        if value < prev {
            return Err(PreconditionError::CoordinatesNotAscending {
                position,
                prev,
                next: value,
            }
            .into());
        }
        while cursor < value {
            cursor += 1;
            indptr[cursor] = position;
        }
        prev = value;
    }

    let nnz = coords.len();
    for slot in &mut indptr[cursor + 1..] {
        *slot = nnz;
    }
    Ok(())
}

/// Encode sorted coordinates into a fresh pointer array of length `axis_size + 1`.
///
/// Errors as [`compress_dimension_into`]; nothing is returned on error.
pub fn compress_dimension(coords: &[usize], axis_size: usize) -> GcrsResult<Vec<usize>> {
    let mut indptr = vec![0; pointer_len(axis_size)?];
    compress_dimension_into(coords, &mut indptr)?;
    Ok(indptr)
}

/// Decode a pointer array into its sorted coordinate array.
///
/// # Errors
///
/// - `ShapeMismatch` if `indptr` is empty
/// - `PreconditionViolated` if `indptr` does not start at 0 or decreases
pub fn expand_dimension(indptr: &[usize]) -> GcrsResult<Vec<usize>> {
    let counts = segment_lengths(indptr)?;
    let nnz = indptr.last().copied().unwrap_or(0);

    let mut coords = Vec::with_capacity(nnz);
    for (value, count) in counts.enumerate() {
        coords.extend(std::iter::repeat(value).take(count));
    }
    Ok(coords)
}

/// Length of the pointer array for an axis of `axis_size` values.
///
/// # Errors
///
/// `ShapeMismatch` if `axis_size + 1` does not fit in `usize`.
pub fn pointer_len(axis_size: usize) -> GcrsResult<usize> {
    axis_size.checked_add(1).ok_or_else(|| {
        ShapeMismatchError::PointerLength {
            expected: usize::MAX,
            got: 0,
        }
        .into()
    })
}

// Validate a pointer array and iterate its per-axis entry counts
fn segment_lengths(indptr: &[usize]) -> GcrsResult<impl Iterator<Item = usize> + '_> {
    validate_pointer(indptr)?;
    Ok(indptr.windows(2).map(|w| w[1] - w[0]))
}

/// Check that `indptr` is non-empty, starts at 0 and never decreases.
pub fn validate_pointer(indptr: &[usize]) -> GcrsResult<()> {
    let Some(&first) = indptr.first() else {
        return Err(ShapeMismatchError::PointerLength {
            expected: 1,
            got: 0,
        }
        .into());
    };
    if first != 0 {
        return Err(PreconditionError::PointerStart { first }.into());
    }
    if let Some(idx) = indptr.windows(2).position(|w| w[0] > w[1]) {
        return Err(PreconditionError::PointerNotMonotonic {
            idx,
            curr: indptr[idx],
            next: indptr[idx + 1],
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcrs_core::{ErrorKind, GcrsError};

    #[test]
    fn test_compress_with_gaps() {
        let indptr = compress_dimension(&[0, 0, 2, 2, 2, 4], 5).unwrap();
        assert_eq!(indptr, vec![0, 2, 2, 5, 5, 6]);
    }

    #[test]
    fn test_compress_leading_gap() {
        // first coordinate above zero is handled by the general rule
        let indptr = compress_dimension(&[2, 3, 3], 6).unwrap();
        assert_eq!(indptr, vec![0, 0, 0, 1, 3, 3, 3]);
    }

    #[test]
    fn test_compress_empty_coords() {
        let indptr = compress_dimension(&[], 4).unwrap();
        assert_eq!(indptr, vec![0; 5]);
        assert!(expand_dimension(&indptr).unwrap().is_empty());
    }

    #[test]
    fn test_compress_zero_axis() {
        assert_eq!(compress_dimension(&[], 0).unwrap(), vec![0]);
        let err = compress_dimension(&[0], 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
    }

    #[test]
    fn test_compress_axis_size_overflow() {
        let err = compress_dimension(&[], usize::MAX).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        assert_eq!(pointer_len(4).unwrap(), 5);
    }

    #[test]
    fn test_compress_into_buffer() {
        let mut indptr = [9usize; 4];
        compress_dimension_into(&[1, 1, 2], &mut indptr).unwrap();
        assert_eq!(indptr, [0, 0, 2, 3]);

        let mut empty: [usize; 0] = [];
        let err = compress_dimension_into(&[], &mut empty).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_compress_rejects_bad_input() {
        let err = compress_dimension(&[0, 5], 5).unwrap_err();
        assert_eq!(
            err,
            GcrsError::from(IndexError::CoordinateOutOfBounds {
                position: 1,
                value: 5,
                size: 5
            })
        );

        let err = compress_dimension(&[1, 3, 2], 5).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PreconditionViolated);
    }

    #[test]
    fn test_expand() {
        assert_eq!(
            expand_dimension(&[0, 2, 2, 5, 5, 6]).unwrap(),
            vec![0, 0, 2, 2, 2, 4]
        );
        assert_eq!(expand_dimension(&[0]).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_expand_rejects_bad_pointer() {
        let err = expand_dimension(&[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);

        let err = expand_dimension(&[1, 2]).unwrap_err();
        assert_eq!(
            err,
            GcrsError::from(PreconditionError::PointerStart { first: 1 })
        );

        let err = expand_dimension(&[0, 3, 2]).unwrap_err();
        assert_eq!(
            err,
            GcrsError::from(PreconditionError::PointerNotMonotonic {
                idx: 1,
                curr: 3,
                next: 2
            })
        );
    }

    #[test]
    fn test_round_trip_from_pointer() {
        let indptr = vec![0, 0, 1, 1, 4, 4];
        let coords = expand_dimension(&indptr).unwrap();
        assert_eq!(compress_dimension(&coords, 5).unwrap(), indptr);
    }
}
