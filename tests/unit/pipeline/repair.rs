//! Tests for single-pass border repair

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use spriteforge::pipeline::classify::classify_template;
    use spriteforge::pipeline::repair::repair_borders;
    use spriteforge::pipeline::resolve::{ResolvedRole, resolve_grid};
    use spriteforge::spatial::grid::{is_interior, orthogonal_neighbors};

    use crate::fixtures::template;

    fn roles(rows: &[&str]) -> Array2<ResolvedRole> {
        resolve_grid(
            &classify_template(&template(rows)),
            &mut StdRng::seed_from_u64(0),
        )
    }

    // Tests an interior body pixel gains a full border ring
    // Verified by skipping the downward neighbour
    #[test]
    fn test_interior_body_is_enclosed() {
        let mut grid = roles(&["...", ".G.", "..."]);

        let promoted = repair_borders(&mut grid);

        assert_eq!(promoted, 4);
        assert_eq!(grid[[0, 1]], ResolvedRole::Border);
        assert_eq!(grid[[1, 0]], ResolvedRole::Border);
        assert_eq!(grid[[1, 2]], ResolvedRole::Border);
        assert_eq!(grid[[2, 1]], ResolvedRole::Border);
        assert_eq!(grid[[0, 0]], ResolvedRole::Empty);
        assert_eq!(grid[[1, 1]], ResolvedRole::Body);
    }

    // Tests body pixels on the outer edge are never inspected
    // Verified by comparing against width instead of the last index
    #[test]
    fn test_edge_body_is_not_repaired() {
        let mut grid = roles(&["...", "G..", "..G"]);

        assert_eq!(repair_borders(&mut grid), 0);
        assert_eq!(grid[[1, 1]], ResolvedRole::Empty);
    }

    // Tests shared neighbours are promoted once
    #[test]
    fn test_shared_neighbors_counted_once() {
        let mut grid = roles(&["....", ".GG.", "...."]);

        assert_eq!(repair_borders(&mut grid), 6);
    }

    // Tests existing border and body neighbours are left alone
    #[test]
    fn test_non_empty_neighbors_unchanged() {
        let mut grid = roles(&[".R.", "RGG", ".R."]);

        assert_eq!(repair_borders(&mut grid), 0);
        assert_eq!(grid[[1, 2]], ResolvedRole::Body);
    }

    // Tests no interior body pixel is left touching empty after repair
    // Verified by breaking out of the pass after the first column
    #[test]
    fn test_repair_invariant_on_random_template() {
        let rows = [
            "CCYCMCCYC",
            "CYCCMMCCC",
            "MCCYCCGCC",
            "CCMCYCCMC",
            "YCCCCMCCY",
            "CCGCCCYCC",
            "CMCCYCCCM",
        ];
        for seed in 0..20 {
            let mut grid = resolve_grid(
                &classify_template(&template(&rows)),
                &mut StdRng::seed_from_u64(seed),
            );
            repair_borders(&mut grid);

            let (height, width) = grid.dim();
            for ((y, x), role) in grid.indexed_iter() {
                if *role != ResolvedRole::Body || !is_interior(x, y, width, height) {
                    continue;
                }
                for (nx, ny) in orthogonal_neighbors(x, y) {
                    assert_ne!(
                        grid[[ny, nx]],
                        ResolvedRole::Empty,
                        "seed {seed}: body at ({x}, {y}) touches empty ({nx}, {ny})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_degenerate_grids() {
        let mut single = roles(&["G"]);
        assert_eq!(repair_borders(&mut single), 0);

        let mut empty: Array2<ResolvedRole> = Array2::default((0, 0));
        assert_eq!(repair_borders(&mut empty), 0);
    }
}
