//! Unified error types for GCRS indexing operations
//!
//! Every failure in this workspace is a caller contract violation detected
//! locally and reported immediately. Errors fall into three kinds:
//!
//! - **Out of bounds**: a coordinate, row or column exceeds its axis size
//! - **Precondition violated**: an input that must be ascending or monotonic
//!   is not, or a query is too large to walk
//! - **Shape mismatch**: shapes, ranks or parallel buffer lengths disagree
//!
//! # Examples
//!
//! ```
//! use gcrs_core::error::{ErrorKind, GcrsError, IndexError};
//!
//! let err: GcrsError = IndexError::AxisOutOfBounds { axis: 1, index: 7, size: 3 }.into();
//! assert_eq!(err.kind(), ErrorKind::OutOfBounds);
//! assert_eq!(
//!     err.to_string(),
//!     "Index error: index 7 out of bounds for axis 1 of size 3"
//! );
//! ```

use thiserror::Error;

/// Top-level error type for all GCRS operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GcrsError {
    /// Index errors (coordinates, rows, columns)
    #[error("Index error: {0}")]
    Index(#[from] IndexError),

    /// Ordering and monotonicity requirements
    #[error("Precondition violated: {0}")]
    Precondition(#[from] PreconditionError),

    /// Shape, rank and length disagreements
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(#[from] ShapeMismatchError),
}

/// Coarse classification of a [`GcrsError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    OutOfBounds,
    PreconditionViolated,
    ShapeMismatch,
}

/// Out-of-bounds errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("index {index} out of bounds for axis {axis} of size {size}")]
    AxisOutOfBounds {
        axis: usize,
        index: usize,
        size: usize,
    },

    #[error("coordinate {value} at position {position} out of bounds for axis size {size}")]
    CoordinateOutOfBounds {
        position: usize,
        value: usize,
        size: usize,
    },

    #[error("row {row} out of bounds for {nrows} rows")]
    RowOutOfBounds { row: usize, nrows: usize },

    #[error("column {col} out of bounds for {ncols} columns")]
    ColOutOfBounds { col: usize, ncols: usize },
}

/// Ordering, monotonicity and size requirements on inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("index set for axis {axis} is not ascending at position {position}: {prev} > {next}")]
    AxisSetNotAscending {
        axis: usize,
        position: usize,
        prev: usize,
        next: usize,
    },

    #[error("coordinates not ascending at position {position}: {prev} > {next}")]
    CoordinatesNotAscending {
        position: usize,
        prev: usize,
        next: usize,
    },

    #[error("pointer array must start at 0, found {first}")]
    PointerStart { first: usize },

    #[error("pointer array not monotonic at index {idx}: {curr} > {next}")]
    PointerNotMonotonic { idx: usize, curr: usize, next: usize },

    #[error("pointer array ends at {last} but {nnz} entries are stored")]
    PointerEnd { last: usize, nnz: usize },

    #[error("row indices of column {col} not strictly ascending at entry {position}")]
    UnsortedSegment { col: usize, position: usize },

    #[error("duplicate entry at ({row}, {col})")]
    DuplicateEntry { row: usize, col: usize },

    #[error("query spans {combinations} combinations, limit is {limit}")]
    TooManyCombinations { combinations: usize, limit: usize },

    #[error("query combination count overflows usize")]
    CombinationOverflow,
}

/// Shape mismatch errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeMismatchError {
    #[error("shape cannot be empty")]
    EmptyShape,

    #[error("axis {axis} has size zero")]
    ZeroAxis { axis: usize },

    #[error("size product of shape {dims:?} overflows usize")]
    Overflow { dims: Vec<usize> },

    #[error("expected {expected} coordinates, got {got}")]
    Rank { expected: usize, got: usize },

    #[error("expected one index set per axis ({expected}), got {got}")]
    AxisSetCount { expected: usize, got: usize },

    #[error("compressed shape {got:?} cannot hold derived shape {expected:?}")]
    Compressed {
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("pointer array length {got}, expected {expected}")]
    PointerLength { expected: usize, got: usize },

    #[error("{indices} indices but {data} data values")]
    LengthMismatch { indices: usize, data: usize },
}

/// Result type alias for GCRS operations
pub type GcrsResult<T> = Result<T, GcrsError>;

impl GcrsError {
    /// Classify this error into one of the three reported kinds
    pub fn kind(&self) -> ErrorKind {
        match self {
            GcrsError::Index(_) => ErrorKind::OutOfBounds,
            GcrsError::Precondition(_) => ErrorKind::PreconditionViolated,
            GcrsError::ShapeMismatch(_) => ErrorKind::ShapeMismatch,
        }
    }

    /// Create an axis out of bounds error
    pub fn out_of_bounds(axis: usize, index: usize, size: usize) -> Self {
        GcrsError::Index(IndexError::AxisOutOfBounds { axis, index, size })
    }

    /// Create a rank mismatch error
    pub fn rank_mismatch(expected: usize, got: usize) -> Self {
        GcrsError::ShapeMismatch(ShapeMismatchError::Rank { expected, got })
    }

    pub fn is_out_of_bounds(&self) -> bool {
        self.kind() == ErrorKind::OutOfBounds
    }
}
