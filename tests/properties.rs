//! Property-based tests shared by every generator.

use proptest::prelude::*;

use pmaze::{
    algorithms::Algorithm,
    dims::Dims,
    disjoint_set::DisjointSet,
    gameboard::{Cell, CellWall, Grid},
    solver,
};

fn algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

/// Walls every cell of `goal` off from the rest of the maze.
fn wall_off(grid: &Grid, goal: Dims) -> Grid {
    let mut masks = grid.wall_masks();
    masks[goal] = Cell::ALL_WALLS;
    for (wall, next) in grid.neighbors(goal) {
        masks[next] |= wall.reverse_wall().bit();
    }

    Grid::from_wall_masks(grid.rows() as i32, grid.cols() as i32, masks.as_slice()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_spanning_tree(
        algorithm in algorithm(),
        rows in 1i32..14,
        cols in 1i32..14,
        seed in any::<u64>(),
    ) {
        let grid = algorithm.produce(rows, cols, seed).unwrap();
        let cells = (rows * cols) as usize;

        prop_assert_eq!(grid.passage_count(), cells - 1, "{} produced:\n{}", algorithm, grid);
        for from in [Dims(0, 0), Dims(cols - 1, rows - 1)] {
            prop_assert_eq!(grid.reachable_count(from), cells);
        }
    }

    #[test]
    fn prop_wall_symmetry(
        algorithm in algorithm(),
        rows in 1i32..14,
        cols in 1i32..14,
        seed in any::<u64>(),
    ) {
        let grid = algorithm.produce(rows, cols, seed).unwrap();

        for pos in Dims::iter_fill(Dims::ZERO, grid.size()) {
            for wall in CellWall::get_in_order() {
                match grid.neighbor(pos, wall) {
                    Some(next) => prop_assert_eq!(
                        grid.is_open(pos, wall),
                        grid.is_open(next, wall.reverse_wall())
                    ),
                    None => prop_assert!(!grid.is_open(pos, wall)),
                }
            }
        }
    }

    #[test]
    fn prop_deterministic(
        algorithm in algorithm(),
        rows in 1i32..14,
        cols in 1i32..14,
        seed in any::<u64>(),
    ) {
        let first = algorithm.produce(rows, cols, seed).unwrap();
        let second = algorithm.produce(rows, cols, seed).unwrap();
        prop_assert_eq!(first.wall_masks(), second.wall_masks());
    }

    #[test]
    fn prop_astar_matches_bfs(
        algorithm in algorithm(),
        rows in 1i32..14,
        cols in 1i32..14,
        seed in any::<u64>(),
        start in any::<(prop::sample::Index, prop::sample::Index)>(),
        goal in any::<(prop::sample::Index, prop::sample::Index)>(),
    ) {
        let grid = algorithm.produce(rows, cols, seed).unwrap();
        let start = Dims(start.0.index(cols as usize) as i32, start.1.index(rows as usize) as i32);
        let goal = Dims(goal.0.index(cols as usize) as i32, goal.1.index(rows as usize) as i32);

        let path = solver::solve(&grid, start, goal).unwrap().unwrap();
        let dist = solver::distances(&grid, start).unwrap();

        prop_assert_eq!(Some(path.steps()), dist[goal]);
        prop_assert_eq!(path.start(), Some(start));
        prop_assert_eq!(path.goal(), Some(goal));
        prop_assert!(path.is_valid_in(&grid));

        // only one simple path exists in a perfect maze
        let bfs = solver::solve_bfs(&grid, start, goal).unwrap().unwrap();
        prop_assert_eq!(path, bfs);
    }

    #[test]
    fn prop_walled_off_goal_is_not_found(
        algorithm in algorithm(),
        rows in 1i32..10,
        cols in 2i32..10,
        seed in any::<u64>(),
    ) {
        let grid = algorithm.produce(rows, cols, seed).unwrap();
        let goal = Dims(cols - 1, rows - 1);
        let corrupted = wall_off(&grid, goal);

        prop_assert!(!corrupted.is_connected());
        prop_assert_eq!(solver::solve(&corrupted, Dims(0, 0), goal), Ok(None));
    }

    #[test]
    fn prop_union_twice_is_idempotent(
        n in 2usize..64,
        pairs in prop::collection::vec((any::<prop::sample::Index>(), any::<prop::sample::Index>()), 0..32),
        x in any::<prop::sample::Index>(),
        y in any::<prop::sample::Index>(),
    ) {
        let mut set = DisjointSet::new(n);
        for (a, b) in pairs {
            set.union(a.index(n), b.index(n));
        }

        let (x, y) = (x.index(n), y.index(n));
        set.union(x, y);
        let roots: Vec<_> = (0..n).map(|i| set.find(i)).collect();
        let components = set.component_count();

        prop_assert!(!set.union(x, y));
        prop_assert!(set.connected(x, y));
        prop_assert_eq!(set.component_count(), components);
        prop_assert_eq!((0..n).map(|i| set.find(i)).collect::<Vec<_>>(), roots);
    }
}
