//! Projection of fancy-indexing queries onto compressed rows and columns
//!
//! A query gives, for every axis, an ascending list of coordinate values. The
//! rows and columns it touches are the images of the Cartesian product of those
//! lists under [`map_to_compressed`](crate::map_to_compressed). The product can
//! be far too large to materialize, so it is walked in **odometer order** (last
//! axis fastest) and only the values at which the row or column changes are
//! kept.
//!
//! With ascending index sets the row is non-decreasing along the walk, so each
//! run of equal rows is contiguous. Columns cycle as the fast axes wrap around,
//! so the final sort-and-dedup step is what makes the column set exact.
//!
//! # Complexity
//!
//! O(product of index-set lengths) time, O(distinct rows + boundary columns)
//! space. Callers must bound the product; see
//! [`IndexHints::max_combinations`](crate::IndexHints).
//!
//! # Examples
//!
//! ```
//! use gcrs_core::{project_ranges, Shape};
//!
//! let shape = Shape::new(&[4, 5, 6]).unwrap();
//! let query = vec![vec![1, 3], vec![0, 4], vec![2, 5]];
//! let ranges = project_ranges(&query, &shape, &shape.compressed()).unwrap();
//!
//! // rows flatten axes 0 and 1 (radix 5), cols are axis 2
//! assert_eq!(ranges.rows, vec![5, 9, 15, 19]);
//! assert_eq!(ranges.cols, vec![2, 5]);
//! ```

use smallvec::SmallVec;

use crate::error::{GcrsResult, IndexError, PreconditionError, ShapeMismatchError};
use crate::hints::IndexHints;
use crate::mapping::{check_compressed, flatten_group};
use crate::shape::{CompressedShape, Shape};

/// Distinct compressed rows and columns touched by a query, both ascending
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectedRanges {
    pub rows: Vec<usize>,
    pub cols: Vec<usize>,
}

impl ProjectedRanges {
    /// Sort and deduplicate raw boundary values
    pub fn from_unsorted(mut rows: Vec<usize>, mut cols: Vec<usize>) -> Self {
        rows.sort_unstable();
        rows.dedup();
        cols.sort_unstable();
        cols.dedup();
        Self { rows, cols }
    }

    /// True when the query selects nothing
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.cols.is_empty()
    }

    /// Shape of the sub-block spanned by these ranges
    pub fn block_shape(&self) -> CompressedShape {
        CompressedShape::new(self.rows.len(), self.cols.len())
    }
}

/// Mixed-radix counter over per-axis positions, last axis fastest.
///
/// Each digit is a position inside that axis's index set, not a coordinate.
///
/// ```
/// use gcrs_core::projection::Odometer;
///
/// let mut odo = Odometer::new(&[2, 3]);
/// assert_eq!(odo.digits(), &[0, 0]);
/// assert_eq!(odo.advance(), Some(1));
/// assert_eq!(odo.digits(), &[0, 1]);
/// odo.advance();
/// assert_eq!(odo.advance(), Some(0)); // carry into axis 0
/// assert_eq!(odo.digits(), &[1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Odometer {
    digits: SmallVec<[usize; 6]>,
    radices: SmallVec<[usize; 6]>,
    exhausted: bool,
}

impl Odometer {
    /// Start at all-zero digits. A zero radix yields an exhausted counter.
    pub fn new(radices: &[usize]) -> Self {
        Self {
            digits: SmallVec::from_elem(0, radices.len()),
            radices: SmallVec::from_slice(radices),
            exhausted: radices.contains(&0),
        }
    }

    pub fn digits(&self) -> &[usize] {
        &self.digits
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Step to the next state.
    ///
    /// Returns the slowest axis whose digit changed (every faster axis was
    /// reset to zero), or `None` once all states have been visited.
    pub fn advance(&mut self) -> Option<usize> {
        if self.exhausted {
            return None;
        }
        for axis in (0..self.digits.len()).rev() {
            self.digits[axis] += 1;
            if self.digits[axis] < self.radices[axis] {
                return Some(axis);
            }
            self.digits[axis] = 0;
        }
        self.exhausted = true;
        None
    }
}

/// Project a query onto the compressed rows and columns it touches.
///
/// # Errors
///
/// - `ShapeMismatch` if there is not exactly one index set per axis, or
///   `compressed` cannot hold the shape's derived compressed shape
/// - `OutOfBounds` if an index set holds a value outside its axis
/// - `PreconditionViolated` if an index set is not ascending
///
/// An empty index set on any axis yields empty ranges.
pub fn project_ranges<S: AsRef<[usize]>>(
    axis_sets: &[S],
    shape: &Shape,
    compressed: &CompressedShape,
) -> GcrsResult<ProjectedRanges> {
    project_ranges_with_hints(axis_sets, shape, compressed, &IndexHints::default())
}

/// [`project_ranges`] with an optional bound on the walked product size.
///
/// # Errors
///
/// In addition to [`project_ranges`]: `PreconditionViolated` if the product of
/// index-set lengths exceeds `hints.max_combinations` or overflows.
pub fn project_ranges_with_hints<S: AsRef<[usize]>>(
    axis_sets: &[S],
    shape: &Shape,
    compressed: &CompressedShape,
    hints: &IndexHints,
) -> GcrsResult<ProjectedRanges> {
    check_compressed(shape, compressed)?;
    let query = prepare_query(axis_sets, shape, hints)?;
    if query.combinations() == 0 {
        return Ok(ProjectedRanges::default());
    }

    log::debug!(
        "projecting {} combinations onto shape {}",
        query.combinations(),
        shape
    );

    let mut rows = Vec::new();
    let mut cols = Vec::new();
    query.walk_boundaries(&mut rows, &mut cols);

    let ranges = ProjectedRanges::from_unsorted(rows, cols);
    log::trace!(
        "projection kept {} rows and {} cols",
        ranges.rows.len(),
        ranges.cols.len()
    );
    Ok(ranges)
}

/// Query that passed [`prepare_query`]: one ascending, in-bounds index set
/// per axis of `shape`, with a combination count within the hinted limit.
///
/// Walking is only possible through this type.
#[derive(Debug)]
pub struct ValidatedQuery<'a, S> {
    axis_sets: &'a [S],
    shape: &'a Shape,
    combinations: usize,
}

impl<'a, S: AsRef<[usize]>> ValidatedQuery<'a, S> {
    /// Size of the Cartesian product of the index sets
    pub fn combinations(&self) -> usize {
        self.combinations
    }

    pub fn shape(&self) -> &'a Shape {
        self.shape
    }

    /// Number of values in the axis-0 index set; each one heads an
    /// independent partition of the walk.
    pub fn partitions(&self) -> usize {
        self.axis_sets[0].as_ref().len()
    }

    /// Walk the whole query in odometer order.
    ///
    /// Appends a row (col) each time it differs from the last one this walk
    /// appended. The output is unsorted and may repeat columns; pass it
    /// through [`ProjectedRanges::from_unsorted`].
    pub fn walk_boundaries(&self, rows: &mut Vec<usize>, cols: &mut Vec<usize>) {
        let sets: SmallVec<[&[usize]; 6]> = self.axis_sets.iter().map(|s| s.as_ref()).collect();
        walk_sets(&sets, self.shape, rows, cols);
    }

    /// Walk only the combinations whose axis-0 value is the `partition`-th
    /// entry of the axis-0 index set. Out-of-range partitions append nothing.
    pub fn walk_partition(
        &self,
        partition: usize,
        rows: &mut Vec<usize>,
        cols: &mut Vec<usize>,
    ) {
        let Some(head) = self.axis_sets[0].as_ref().get(partition) else {
            return;
        };
        let mut sets: SmallVec<[&[usize]; 6]> = SmallVec::with_capacity(self.axis_sets.len());
        sets.push(std::slice::from_ref(head));
        sets.extend(self.axis_sets[1..].iter().map(|s| s.as_ref()));
        walk_sets(&sets, self.shape, rows, cols);
    }
}

/// Validate a query against `shape` and `hints`.
///
/// Shared by the sequential and parallel projectors.
///
/// # Errors
///
/// As [`project_ranges_with_hints`], apart from the compressed-shape check.
pub fn prepare_query<'a, S: AsRef<[usize]>>(
    axis_sets: &'a [S],
    shape: &'a Shape,
    hints: &IndexHints,
) -> GcrsResult<ValidatedQuery<'a, S>> {
    validate_axis_sets(axis_sets, shape)?;
    let combinations = combination_count(axis_sets)?;
    if let Some(limit) = hints.max_combinations {
        if combinations > limit {
            log::warn!(
                "query spans {} combinations, above the configured limit of {}",
                combinations,
                limit
            );
            return Err(PreconditionError::TooManyCombinations {
                combinations,
                limit,
            }
            .into());
        }
    }
    Ok(ValidatedQuery {
        axis_sets,
        shape,
        combinations,
    })
}

/// Check rank, bounds and ordering of every index set.
fn validate_axis_sets<S: AsRef<[usize]>>(axis_sets: &[S], shape: &Shape) -> GcrsResult<()> {
    if axis_sets.len() != shape.ndim() {
        return Err(ShapeMismatchError::AxisSetCount {
            expected: shape.ndim(),
            got: axis_sets.len(),
        }
        .into());
    }

    for (axis, (set, &size)) in axis_sets.iter().zip(shape.dims()).enumerate() {
        let set = set.as_ref();
        if let Some(&index) = set.iter().find(|&&v| v >= size) {
            return Err(IndexError::AxisOutOfBounds { axis, index, size }.into());
        }
        if let Some(position) = set.windows(2).position(|w| w[0] > w[1]) {
            return Err(PreconditionError::AxisSetNotAscending {
                axis,
                position: position + 1,
                prev: set[position],
                next: set[position + 1],
            }
            .into());
        }
    }
    Ok(())
}

/// Size of the Cartesian product of the index sets.
fn combination_count<S: AsRef<[usize]>>(axis_sets: &[S]) -> GcrsResult<usize> {
    if axis_sets.iter().any(|s| s.as_ref().is_empty()) {
        return Ok(0);
    }
    axis_sets
        .iter()
        .try_fold(1usize, |acc, s| acc.checked_mul(s.as_ref().len()))
        .ok_or_else(|| PreconditionError::CombinationOverflow.into())
}

// `sets` has one in-bounds, ascending set per axis of `shape`
fn walk_sets(sets: &[&[usize]], shape: &Shape, rows: &mut Vec<usize>, cols: &mut Vec<usize>) {
    let radices: SmallVec<[usize; 6]> = sets.iter().map(|s| s.len()).collect();
    let mut odometer = Odometer::new(&radices);
    if odometer.is_exhausted() {
        return;
    }

    let split = shape.split_point();
    let mut coord: SmallVec<[usize; 6]> = sets.iter().map(|s| s[0]).collect();

    let mut row = flatten_group(&coord[..split], shape.row_dims());
    let mut col = flatten_group(&coord[split..], shape.col_dims());
    rows.push(row);
    cols.push(col);

    while let Some(changed) = odometer.advance() {
        for axis in changed..coord.len() {
            coord[axis] = sets[axis][odometer.digits()[axis]];
        }

        if changed < split {
            let next_row = flatten_group(&coord[..split], shape.row_dims());
            if next_row != row {
                rows.push(next_row);
                row = next_row;
            }
        }

        let next_col = flatten_group(&coord[split..], shape.col_dims());
        if next_col != col {
            cols.push(next_col);
            col = next_col;
        }
    }
}
