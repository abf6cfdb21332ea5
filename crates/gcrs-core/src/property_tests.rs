//! Property-based tests for coordinate mapping and range projection
//!
//! Projection is checked against a brute-force oracle that materializes the
//! full Cartesian product, so shapes and queries are kept small.

#[cfg(test)]
mod tests {
    use crate::{map_from_compressed, project_ranges, Shape};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    // 1-5D shapes with small axes
    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..6, 1..=5)
    }

    fn shape_and_coord() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
        shape_strategy().prop_flat_map(|dims| {
            let coord = dims.iter().map(|&d| 0..d).collect::<Vec<_>>();
            (Just(dims), coord)
        })
    }

    // Per-axis ascending index sets, each possibly empty
    fn shape_and_query() -> impl Strategy<Value = (Vec<usize>, Vec<Vec<usize>>)> {
        prop::collection::vec(1usize..5, 1..=4).prop_flat_map(|dims| {
            let sets = dims
                .iter()
                .map(|&d| {
                    prop::collection::vec(0..d, 0..=d).prop_map(|mut v| {
                        v.sort_unstable();
                        v.dedup();
                        v
                    })
                })
                .collect::<Vec<_>>();
            (Just(dims), sets)
        })
    }

    fn cartesian(sets: &[Vec<usize>]) -> Vec<Vec<usize>> {
        sets.iter().fold(vec![vec![]], |acc, set| {
            acc.into_iter()
                .flat_map(|prefix| {
                    set.iter().map(move |&v| {
                        let mut next = prefix.clone();
                        next.push(v);
                        next
                    })
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_mapping_within_compressed_shape((dims, coord) in shape_and_coord()) {
            let shape = Shape::new(&dims).unwrap();
            let pos = shape.compressed_position(&coord).unwrap();
            prop_assert!(shape.compressed().contains(pos));
        }

        #[test]
        fn prop_mapping_inverse_round_trip((dims, coord) in shape_and_coord()) {
            let shape = Shape::new(&dims).unwrap();
            let pos = shape.compressed_position(&coord).unwrap();
            let back = map_from_compressed(pos, &shape).unwrap();
            prop_assert_eq!(back.as_slice(), coord.as_slice());
        }

        #[test]
        fn prop_mapping_is_injective(dims in shape_strategy()) {
            let shape = Shape::new(&dims).unwrap();
            let all: Vec<Vec<usize>> = dims.iter().map(|&d| (0..d).collect()).collect();
            let mut seen = BTreeSet::new();
            for coord in cartesian(&all) {
                let pos = shape.compressed_position(&coord).unwrap();
                prop_assert!(seen.insert(pos));
            }
        }

        #[test]
        fn prop_projection_matches_oracle((dims, query) in shape_and_query()) {
            let shape = Shape::new(&dims).unwrap();
            let ranges = project_ranges(&query, &shape, &shape.compressed()).unwrap();

            let mut rows = BTreeSet::new();
            let mut cols = BTreeSet::new();
            for coord in cartesian(&query) {
                let pos = shape.compressed_position(&coord).unwrap();
                rows.insert(pos.row);
                cols.insert(pos.col);
            }

            prop_assert_eq!(ranges.rows, rows.into_iter().collect::<Vec<_>>());
            prop_assert_eq!(ranges.cols, cols.into_iter().collect::<Vec<_>>());
        }
    }
}
