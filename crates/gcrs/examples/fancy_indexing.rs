//! Fancy indexing on a sparse 4-D array stored in GCRS form
//!
//! Builds a sparse (6, 5, 4, 3) array, stores it as a 30x12 compressed matrix,
//! then selects a non-contiguous block with per-axis index lists.

use anyhow::{ensure, Result};
use gcrs::prelude::*;

fn main() -> Result<()> {
    println!("=== GCRS Fancy Indexing ===\n");

    let shape = Shape::new(&[6, 5, 4, 3])?;
    let compressed = shape.compressed();
    println!("Logical shape:    {}", shape);
    println!(
        "Compressed shape: {} x {}",
        compressed.nrows, compressed.ncols
    );

    // Store every element whose coordinate sum is divisible by 4
    let mut triplets = Vec::new();
    for a in 0..6 {
        for b in 0..5 {
            for c in 0..4 {
                for d in 0..3 {
                    if (a + b + c + d) % 4 == 0 {
                        let pos = shape.compressed_position(&[a, b, c, d])?;
                        triplets.push((pos.row, pos.col, format!("{}{}{}{}", a, b, c, d)));
                    }
                }
            }
        }
    }
    let matrix = CompressedMatrix::from_triplets(compressed.as_tuple(), triplets)?;
    println!(
        "Stored entries:   {} (density {:.3})\n",
        matrix.nnz(),
        matrix.density()
    );

    // arr[[1, 4], [0, 2], [1, 3], [0, 2]]
    let query = vec![vec![1, 4], vec![0, 2], vec![1, 3], vec![0, 2]];
    let selected = select_block(&matrix, &shape, &query)?;
    println!("Query:            {:?}", query);
    println!("Projected rows:   {:?}", selected.rows);
    println!("Projected cols:   {:?}", selected.cols);
    println!(
        "Block:            {} x {} with {} entries\n",
        selected.block.nrows(),
        selected.block.ncols(),
        selected.block.nnz()
    );

    for (i, j, label) in selected.block.iter() {
        let row = selected.rows[i];
        let col = selected.cols[j];
        let coord = map_from_compressed(CompressedPosition::new(row, col), &shape)?;
        ensure!(
            matrix.get(row, col) == Some(label),
            "block entry ({}, {}) does not match source",
            i,
            j
        );
        println!("  block ({}, {}) <- coordinate {:?} = {}", i, j, coord.as_slice(), label);
    }

    // The pointer codec on its own
    let cols: Vec<usize> = matrix.iter().map(|(_, col, _)| col).collect();
    let indptr = compress_dimension(&cols, compressed.ncols)?;
    ensure!(indptr.as_slice() == matrix.indptr(), "codec disagrees with storage");
    ensure!(expand_dimension(&indptr)? == cols, "codec round trip failed");
    println!("\nColumn pointer:   {:?}", indptr);

    Ok(())
}
