//! Fancy-indexing selection over a GCRS matrix
//!
//! Chains range projection and sub-block extraction: a per-axis query on the
//! logical N-d shape is projected onto compressed rows and columns, and the
//! induced block is pulled out of the stored matrix.
//!
//! # Examples
//!
//! ```
//! use gcrs_core::Shape;
//! use gcrs_sparse::{select_block, CompressedMatrix};
//!
//! // 2x2x2 array stored as a 4x2 matrix
//! let shape = Shape::new(&[2, 2, 2]).unwrap();
//! let m = CompressedMatrix::from_triplets((4, 2), vec![(2, 1, 'a'), (3, 0, 'b')]).unwrap();
//!
//! // element (1, 0, 1) lives at row 2, col 1
//! let selected = select_block(&m, &shape, &[vec![1], vec![0], vec![1]]).unwrap();
//! assert_eq!(selected.rows, vec![2]);
//! assert_eq!(selected.cols, vec![1]);
//! assert_eq!(selected.block.get(0, 0), Some(&'a'));
//! ```

use gcrs_core::error::GcrsResult;
use gcrs_core::projection::{prepare_query, ProjectedRanges};
use gcrs_core::{project_ranges_with_hints, IndexHints, Shape};

use crate::csc::CompressedMatrix;
use crate::extract::extract_block;
use crate::parallel::{par_extract_block, par_project_ranges};

/// Result of a selection: the compressed rows and columns touched by the
/// query, and the block they induce (indexed by position in `rows`/`cols`)
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedBlock<T> {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
    pub block: CompressedMatrix<T>,
}

/// Select the block touched by a per-axis query.
///
/// # Errors
///
/// - `ShapeMismatch` if `matrix` cannot hold `shape`'s compressed shape, or the
///   query does not have one index set per axis
/// - `OutOfBounds` / `PreconditionViolated` as for
///   [`project_ranges`](gcrs_core::project_ranges)
pub fn select_block<T, S>(
    matrix: &CompressedMatrix<T>,
    shape: &Shape,
    axis_sets: &[S],
) -> GcrsResult<SelectedBlock<T>>
where
    T: Clone + Send + Sync,
    S: AsRef<[usize]> + Sync,
{
    select_block_with_hints(matrix, shape, axis_sets, &IndexHints::default())
}

/// [`select_block`] with explicit hints.
///
/// Large queries and wide blocks take the parallel path when the `parallel`
/// feature is enabled; results are identical either way.
pub fn select_block_with_hints<T, S>(
    matrix: &CompressedMatrix<T>,
    shape: &Shape,
    axis_sets: &[S],
    hints: &IndexHints,
) -> GcrsResult<SelectedBlock<T>>
where
    T: Clone + Send + Sync,
    S: AsRef<[usize]> + Sync,
{
    let compressed = matrix.compressed_shape();

    let partitions = axis_sets.first().map_or(0, |s| s.as_ref().len());
    let ProjectedRanges { rows, cols } = if hints.prefers_parallel(partitions) {
        log::debug!("projecting {} partitions in parallel", partitions);
        par_project_ranges(axis_sets, shape, &compressed, hints)?
    } else {
        project_ranges_with_hints(axis_sets, shape, &compressed, hints)?
    };

    let block = if hints.prefers_parallel(cols.len()) {
        log::debug!("extracting {} columns in parallel", cols.len());
        par_extract_block(matrix, &rows, &cols)?
    } else {
        extract_block(matrix, &rows, &cols)?
    };

    Ok(SelectedBlock { rows, cols, block })
}

/// Count the combinations a query would walk, without walking it.
///
/// Useful to reject oversized queries before touching any matrix.
pub fn query_size<S: AsRef<[usize]>>(
    shape: &Shape,
    axis_sets: &[S],
    hints: &IndexHints,
) -> GcrsResult<usize> {
    prepare_query(axis_sets, shape, hints).map(|query| query.combinations())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcrs_core::ErrorKind;

    fn sample_3d() -> (Shape, CompressedMatrix<i64>) {
        // shape (2, 3, 4): rows = a*3 + b (6), cols = c (4)
        let shape = Shape::new(&[2, 3, 4]).unwrap();
        let mut triplets = Vec::new();
        for a in 0..2 {
            for b in 0..3 {
                for c in 0..4 {
                    if (a + b + c) % 3 == 0 {
                        let pos = shape.compressed_position(&[a, b, c]).unwrap();
                        triplets.push((pos.row, pos.col, (100 * a + 10 * b + c) as i64));
                    }
                }
            }
        }
        let m = CompressedMatrix::from_triplets(shape.compressed().as_tuple(), triplets).unwrap();
        (shape, m)
    }

    #[test]
    fn test_select_matches_dense() {
        let (shape, m) = sample_3d();
        let query = vec![vec![0, 1], vec![0, 2], vec![0, 3]];
        let selected = select_block(&m, &shape, &query).unwrap();

        assert_eq!(selected.rows, vec![0, 2, 3, 5]);
        assert_eq!(selected.cols, vec![0, 3]);

        let dense = m.to_dense();
        let sub = selected.block.to_dense();
        for (i, &r) in selected.rows.iter().enumerate() {
            for (j, &c) in selected.cols.iter().enumerate() {
                assert_eq!(sub[[i, j]], dense[[r, c]]);
            }
        }
    }

    #[test]
    fn test_parallel_threshold_gives_same_result() {
        let (shape, m) = sample_3d();
        let query = vec![vec![0, 1], vec![1, 2], vec![0, 1, 2, 3]];
        let sequential = select_block(&m, &shape, &query).unwrap();
        let hints = IndexHints::default().with_parallel_threshold(1);
        let forced = select_block_with_hints(&m, &shape, &query, &hints).unwrap();
        assert_eq!(sequential, forced);
    }

    #[test]
    fn test_matrix_too_small_for_shape() {
        let shape = Shape::new(&[4, 4]).unwrap();
        let m = CompressedMatrix::<i64>::zeros((2, 4)).unwrap();
        let err = select_block(&m, &shape, &[vec![0], vec![0]]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_query_size() {
        let shape = Shape::new(&[5, 5]).unwrap();
        let hints = IndexHints::default();
        assert_eq!(query_size(&shape, &[vec![0, 1, 2], vec![3, 4]], &hints).unwrap(), 6);

        let hints = hints.with_max_combinations(4);
        let err = query_size(&shape, &[vec![0, 1, 2], vec![3, 4]], &hints).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::PreconditionViolated);
    }
}
