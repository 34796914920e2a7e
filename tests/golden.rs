use pmaze::{
    algorithms::{candidate_edges, Algorithm},
    dims::Dims,
    gameboard::Grid,
    solver,
};

/// Wall masks of the 5x5 depth-first maze for seed 42, row-major.
const DFS_5X5_SEED_42: [u8; 25] = [
    11, 9, 3, 9, 7, //
    12, 6, 10, 12, 3, //
    13, 3, 12, 3, 10, //
    9, 4, 7, 12, 2, //
    12, 5, 5, 5, 6, //
];

#[test]
fn depth_first_seed_42_matches_fixture() {
    let grid = Algorithm::DepthFirstSearch.produce(5, 5, 42).unwrap();
    assert_eq!(grid.wall_masks().as_slice(), &DFS_5X5_SEED_42, "\n{}", grid);

    let again = Algorithm::DepthFirstSearch.produce(5, 5, 42).unwrap();
    assert_eq!(grid, again);
}

#[test]
fn depth_first_seed_42_solution() {
    let grid = Grid::from_wall_masks(5, 5, &DFS_5X5_SEED_42).unwrap();
    assert!(grid.is_perfect());

    let path = solver::solve(&grid, Dims(0, 0), Dims(4, 4))
        .unwrap()
        .unwrap();
    let bfs = solver::distances(&grid, Dims(0, 0)).unwrap();

    assert_eq!(bfs[Dims(4, 4)], Some(10));
    assert_eq!(path.steps(), 10);
    assert_eq!(path.len(), 11);
    assert_eq!(path.start(), Some(Dims(0, 0)));
    assert_eq!(path.goal(), Some(Dims(4, 4)));
    assert!(path.is_valid_in(&grid));

    let again = solver::solve(&grid, Dims(0, 0), Dims(4, 4))
        .unwrap()
        .unwrap();
    assert_eq!(path, again);
}

#[test]
fn single_cell_maze() {
    for algorithm in Algorithm::ALL {
        let grid = algorithm.produce(1, 1, 0).unwrap();
        assert_eq!(grid.passage_count(), 0);
        assert!(candidate_edges(&grid).is_empty());

        let path = solver::solve(&grid, Dims(0, 0), Dims(0, 0))
            .unwrap()
            .unwrap();
        assert_eq!(path.cells(), &[Dims(0, 0)]);
    }
}
