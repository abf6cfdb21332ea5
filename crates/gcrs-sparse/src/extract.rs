//! Sub-block extraction from a column-compressed matrix
//!
//! Given explicit lists of rows and columns, build the induced sub-matrix. The
//! result is indexed by **request-local** positions: entry `(i, j)` of the
//! result is entry `(rows[i], cols[j])` of the source.
//!
//! Each requested row is located in each requested column's segment by binary
//! search, so the cost is O(len(cols) · len(rows) · log(segment size)).
//!
//! Requests need not be sorted and may repeat values; the result follows
//! request order and repeats entries accordingly.
//!
//! # Examples
//!
//! ```
//! use gcrs_sparse::{extract_block, CompressedMatrix};
//!
//! // col 0 holds rows {1, 3}, col 1 holds row {0}, col 2 is empty
//! let m =
//!     CompressedMatrix::new(vec![0, 2, 3, 3], vec![1, 3, 0], vec![10, 30, 7], (4, 3)).unwrap();
//!
//! let block = extract_block(&m, &[1, 3], &[0, 1]).unwrap();
//! assert_eq!(block.shape(), (2, 2));
//! assert_eq!(block.get(0, 0), Some(&10));
//! assert_eq!(block.get(1, 0), Some(&30));
//! assert_eq!(block.column(1).unwrap().0.len(), 0);
//! ```

use gcrs_core::error::{GcrsResult, IndexError};

use crate::csc::CompressedMatrix;

/// Extract the sub-matrix at the requested rows and columns.
///
/// # Errors
///
/// `OutOfBounds` if any requested row or column lies outside `matrix`. All
/// requests are checked before any output is built.
pub fn extract_block<T: Clone>(
    matrix: &CompressedMatrix<T>,
    rows: &[usize],
    cols: &[usize],
) -> GcrsResult<CompressedMatrix<T>> {
    validate_request(matrix, rows, cols)?;

    let mut indptr = Vec::with_capacity(cols.len() + 1);
    let mut indices = Vec::new();
    let mut data = Vec::new();
    indptr.push(0);

    for &col in cols {
        gather_column(matrix, rows, col, &mut indices, &mut data);
        indptr.push(indices.len());
    }

    log::trace!(
        "extracted {} entries from a {}x{} request",
        data.len(),
        rows.len(),
        cols.len()
    );

    Ok(CompressedMatrix::from_parts_unchecked(
        indptr,
        indices,
        data,
        (rows.len(), cols.len()),
    ))
}

/// Check every requested row and column against the matrix shape.
pub fn validate_request<T>(
    matrix: &CompressedMatrix<T>,
    rows: &[usize],
    cols: &[usize],
) -> GcrsResult<()> {
    let (nrows, ncols) = matrix.shape();
    if let Some(&row) = rows.iter().find(|&&r| r >= nrows) {
        return Err(IndexError::RowOutOfBounds { row, nrows }.into());
    }
    if let Some(&col) = cols.iter().find(|&&c| c >= ncols) {
        return Err(IndexError::ColOutOfBounds { col, ncols }.into());
    }
    Ok(())
}

/// Append the hits of `rows` in source column `col` as request-local entries.
///
/// `col` must be in bounds.
pub(crate) fn gather_column<T: Clone>(
    matrix: &CompressedMatrix<T>,
    rows: &[usize],
    col: usize,
    indices: &mut Vec<usize>,
    data: &mut Vec<T>,
) {
    let start = matrix.indptr()[col];
    let end = matrix.indptr()[col + 1];
    let segment = &matrix.indices()[start..end];

    for (local, row) in rows.iter().enumerate() {
        if let Ok(offset) = segment.binary_search(row) {
            indices.push(local);
            data.push(matrix.data()[start + offset].clone());
        }
    }
}
