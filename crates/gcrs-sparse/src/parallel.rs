//! Parallel projection and extraction
//!
//! Both operations split into independent pieces:
//!
//! - projection partitions the odometer walk by the positions of axis 0; each
//!   partition is walked on its own and the boundary values are merged as an
//!   unordered union before the final sort-and-dedup
//! - extraction gathers each requested column independently and concatenates
//!   the segments in column order
//!
//! Results are identical to the sequential functions. Without the `parallel`
//! feature these functions fall back to the sequential implementations.
//!
//! # Examples
//!
//! ```rust
//! use gcrs_core::{IndexHints, Shape};
//! use gcrs_sparse::parallel::par_project_ranges;
//!
//! let shape = Shape::new(&[8, 8, 8, 8]).unwrap();
//! let query = vec![vec![0, 3, 7], vec![1, 2], vec![0, 5], vec![4, 6, 7]];
//! let hints = IndexHints::default();
//! let ranges = par_project_ranges(&query, &shape, &shape.compressed(), &hints).unwrap();
//! assert_eq!(ranges.rows.len(), 6);
//! assert_eq!(ranges.cols.len(), 6);
//! ```

use gcrs_core::error::GcrsResult;
use gcrs_core::{CompressedShape, IndexHints, ProjectedRanges, Shape};

use crate::csc::CompressedMatrix;

#[cfg(feature = "parallel")]
use scirs2_core::parallel_ops::*;

/// Parallel [`project_ranges_with_hints`](gcrs_core::project_ranges_with_hints)
#[cfg(feature = "parallel")]
pub fn par_project_ranges<S>(
    axis_sets: &[S],
    shape: &Shape,
    compressed: &CompressedShape,
    hints: &IndexHints,
) -> GcrsResult<ProjectedRanges>
where
    S: AsRef<[usize]> + Sync,
{
    use gcrs_core::check_compressed;
    use gcrs_core::projection::prepare_query;

    check_compressed(shape, compressed)?;
    let query = prepare_query(axis_sets, shape, hints)?;
    if query.combinations() == 0 {
        return Ok(ProjectedRanges::default());
    }

    log::debug!(
        "projecting {} combinations over {} partitions",
        query.combinations(),
        query.partitions()
    );

    let (rows, cols) = (0..query.partitions())
        .into_par_iter()
        .map(|partition| {
            let mut rows = Vec::new();
            let mut cols = Vec::new();
            query.walk_partition(partition, &mut rows, &mut cols);
            (rows, cols)
        })
        .reduce(
            || (Vec::new(), Vec::new()),
            |(mut rows, mut cols), (r, c)| {
                rows.extend(r);
                cols.extend(c);
                (rows, cols)
            },
        );

    Ok(ProjectedRanges::from_unsorted(rows, cols))
}

/// Sequential fallback for par_project_ranges when parallel feature is disabled
#[cfg(not(feature = "parallel"))]
pub fn par_project_ranges<S>(
    axis_sets: &[S],
    shape: &Shape,
    compressed: &CompressedShape,
    hints: &IndexHints,
) -> GcrsResult<ProjectedRanges>
where
    S: AsRef<[usize]> + Sync,
{
    gcrs_core::project_ranges_with_hints(axis_sets, shape, compressed, hints)
}

/// Parallel [`extract_block`](crate::extract_block)
#[cfg(feature = "parallel")]
pub fn par_extract_block<T>(
    matrix: &CompressedMatrix<T>,
    rows: &[usize],
    cols: &[usize],
) -> GcrsResult<CompressedMatrix<T>>
where
    T: Clone + Send + Sync,
{
    use crate::extract::{gather_column, validate_request};

    validate_request(matrix, rows, cols)?;

    let segments: Vec<(Vec<usize>, Vec<T>)> = cols
        .par_iter()
        .map(|&col| {
            let mut indices = Vec::new();
            let mut data = Vec::new();
            gather_column(matrix, rows, col, &mut indices, &mut data);
            (indices, data)
        })
        .collect();

    let nnz = segments.iter().map(|(i, _)| i.len()).sum();
    let mut indptr = Vec::with_capacity(cols.len() + 1);
    let mut indices = Vec::with_capacity(nnz);
    let mut data = Vec::with_capacity(nnz);
    indptr.push(0);
    for (seg_indices, seg_data) in segments {
        indices.extend(seg_indices);
        data.extend(seg_data);
        indptr.push(indices.len());
    }

    Ok(CompressedMatrix::from_parts_unchecked(
        indptr,
        indices,
        data,
        (rows.len(), cols.len()),
    ))
}

/// Sequential fallback for par_extract_block when parallel feature is disabled
#[cfg(not(feature = "parallel"))]
pub fn par_extract_block<T>(
    matrix: &CompressedMatrix<T>,
    rows: &[usize],
    cols: &[usize],
) -> GcrsResult<CompressedMatrix<T>>
where
    T: Clone + Send + Sync,
{
    crate::extract::extract_block(matrix, rows, cols)
}
