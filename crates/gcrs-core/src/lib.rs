//! # gcrs-core
//!
//! Shape model, coordinate mapping and query projection for
//! **Generalized Compressed Row/Column Storage** (GCRS).
//!
//! GCRS stores a sparse N-dimensional array as one 2-D compressed matrix. The
//! leading ⌈N/2⌉ axes are flattened into a synthetic row axis and the remaining
//! axes into a synthetic column axis, both with mixed-radix arithmetic.
//!
//! This crate provides:
//!
//! - **Shapes** ([`Shape`], [`CompressedShape`]) with validated construction
//! - **Coordinate mapping** ([`map_to_compressed`], [`map_from_compressed`])
//! - **Range projection** ([`project_ranges`]): the distinct rows and columns
//!   touched by a per-axis fancy-indexing query, without materializing the
//!   Cartesian product
//! - **Hints** ([`IndexHints`]) bounding query size and parallelism
//! - **Errors** ([`GcrsError`]) shared by the whole workspace
//!
//! Storage of the nonzeros themselves (pointer arrays, compressed matrices,
//! sub-block extraction) lives in `gcrs-sparse`.
//!
//! ## Quick Start
//!
//! ```
//! use gcrs_core::{project_ranges, CompressedPosition, Shape};
//!
//! let shape = Shape::new(&[2, 3]).unwrap();
//! assert_eq!(
//!     shape.compressed_position(&[1, 2]).unwrap(),
//!     CompressedPosition::new(1, 2)
//! );
//!
//! let ranges = project_ranges(&[vec![0, 1], vec![2]], &shape, &shape.compressed()).unwrap();
//! assert_eq!(ranges.rows, vec![0, 1]);
//! assert_eq!(ranges.cols, vec![2]);
//! ```

#![deny(warnings)]

pub mod error;
pub mod hints;
pub mod mapping;
pub mod projection;
pub mod shape;

mod property_tests;

pub use error::{ErrorKind, GcrsError, GcrsResult};
pub use hints::IndexHints;
pub use mapping::{check_compressed, map_from_compressed, map_to_compressed};
pub use projection::{project_ranges, project_ranges_with_hints, ProjectedRanges};
pub use shape::{CompressedPosition, CompressedShape, Coordinate, Dims, Shape};
