//! # gcrs-sparse
//!
//! Storage side of GCRS sparse arrays.
//!
//! This crate provides:
//! - Pointer-array codec ([`codec`]): sorted coordinates ⇄ `indptr`
//! - Column-compressed matrix ([`CompressedMatrix`]) holding the nonzeros
//! - Sub-block extraction ([`extract_block`]) at explicit rows and columns
//! - Fancy-indexing selection ([`select_block`]) chaining projection and extraction
//! - Parallel variants ([`parallel`]) - feature-gated
//!
//! Shapes, coordinate mapping and range projection come from `gcrs-core`.

#![deny(warnings)]

pub mod codec;
pub mod csc;
pub mod extract;
pub mod parallel;
pub mod select;

// Re-exports
pub use codec::{compress_dimension, compress_dimension_into, expand_dimension};
pub use csc::CompressedMatrix;
pub use extract::extract_block;
pub use parallel::{par_extract_block, par_project_ranges};
pub use select::{select_block, select_block_with_hints, SelectedBlock};
