use super::{start_cell, GenerationError, MazeGenerator, Params, Random};
use crate::{
    dims::*,
    gameboard::{CellWall, Grid},
    random,
};

/// Randomized Prim's algorithm, growing the maze from a frontier of walls.
///
/// Starts at a random cell unless `start_x`/`start_y` are given.
#[derive(Debug)]
pub struct RndPrims;

impl MazeGenerator for RndPrims {
    fn generate(
        &self,
        size: Dims,
        rng: &mut Random,
        params: &Params,
    ) -> Result<Grid, GenerationError> {
        let mut grid = Grid::from_size(size)?;
        let start = start_cell(params, &grid, rng, None)?;

        let mut frontier = Vec::new();
        grid.visit(start);
        extend_frontier(&grid, start, &mut frontier);

        while !frontier.is_empty() {
            let (from, wall) = frontier.swap_remove(random::index(rng, frontier.len()));
            let Some(next) = grid.neighbor(from, wall) else {
                continue;
            };

            // reached from another side in the meantime
            if grid.is_visited(next) {
                continue;
            }

            grid.open_passage(from, wall);
            grid.visit(next);
            extend_frontier(&grid, next, &mut frontier);
        }

        Ok(grid)
    }
}

fn extend_frontier(grid: &Grid, pos: Dims, frontier: &mut Vec<(Dims, CellWall)>) {
    frontier.extend(
        grid.neighbors(pos)
            .into_iter()
            .filter(|&(_, next)| !grid.is_visited(next))
            .map(|(wall, _)| (pos, wall)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random;

    #[test]
    fn builds_spanning_tree() {
        let grid = RndPrims
            .generate(Dims(8, 8), &mut random::seeded(13), &Params::new())
            .unwrap();
        assert!(grid.is_perfect());
        assert!(Dims::iter_fill(Dims::ZERO, grid.size()).all(|pos| grid.is_visited(pos)));
    }

    #[test]
    fn honours_start_cell() {
        let params = Params::new().with("start_x", 4).with("start_y", 0);
        let grid = RndPrims
            .generate(Dims(5, 2), &mut random::seeded(3), &params)
            .unwrap();
        assert!(grid.is_perfect());

        let params = Params::new().with("start_x", 5);
        assert_eq!(
            RndPrims.generate(Dims(5, 2), &mut random::seeded(3), &params),
            Err(GenerationError::InvalidStart(Dims(5, 0)))
        );
    }
}
