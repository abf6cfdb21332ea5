//! # GCRS - Generalized Compressed Row/Column Storage
//!
//! Indexing core for sparse N-dimensional arrays stored as a single 2-D
//! compressed matrix.
//!
//! This is the **meta crate** that re-exports the GCRS components for
//! convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use gcrs::prelude::*;
//!
//! // 2x2x2 array: rows flatten axes (0, 1), cols are axis 2
//! let shape = Shape::new(&[2, 2, 2])?;
//! assert_eq!(shape.compressed(), CompressedShape::new(4, 2));
//! assert_eq!(shape.compressed_position(&[1, 0, 1])?, CompressedPosition::new(2, 1));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Shapes and Mapping ([`core`])
//!
//! Validated shapes, the N-d ⇄ 2-D coordinate map, and projection of
//! per-axis queries onto compressed rows and columns.
//!
//! ```
//! use gcrs::core::{project_ranges, Shape};
//!
//! let shape = Shape::new(&[3, 4])?;
//! let ranges = project_ranges(&[vec![0, 2], vec![1, 3]], &shape, &shape.compressed())?;
//! assert_eq!(ranges.rows, vec![0, 2]);
//! assert_eq!(ranges.cols, vec![1, 3]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ### Storage ([`sparse`])
//!
//! Pointer-array codec, column-compressed matrices and sub-block extraction.
//!
//! ```
//! use gcrs::sparse::{compress_dimension, expand_dimension};
//!
//! let indptr = compress_dimension(&[0, 0, 2, 2, 2, 4], 5)?;
//! assert_eq!(indptr, vec![0, 2, 2, 5, 5, 6]);
//! assert_eq!(expand_dimension(&indptr)?, vec![0, 0, 2, 2, 2, 4]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Features
//!
//! - `parallel`: data-parallel projection and extraction via SciRS2-core
//! - `serde`: (de)serialization of [`IndexHints`](crate::core::IndexHints)
//! - `full`: Enable all features

#![deny(warnings)]

// Re-export all components
pub use gcrs_core as core;
pub use gcrs_sparse as sparse;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use gcrs::prelude::*;
    //!
    //! let m = CompressedMatrix::<f64>::zeros((4, 4)).unwrap();
    //! assert_eq!(m.nnz(), 0);
    //! ```

    // Shapes and mapping
    pub use crate::core::{
        map_from_compressed, map_to_compressed, project_ranges, CompressedPosition,
        CompressedShape, ErrorKind, GcrsError, GcrsResult, IndexHints, ProjectedRanges, Shape,
    };

    // Storage
    pub use crate::sparse::{
        compress_dimension, compress_dimension_into, expand_dimension, extract_block,
        select_block, CompressedMatrix, SelectedBlock,
    };
}
