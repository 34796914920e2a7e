use rand::seq::SliceRandom as _;

use super::{start_cell, GenerationError, MazeGenerator, Params, Random};
use crate::{
    dims::*,
    gameboard::{CellWall, Grid},
};

/// Randomized depth-first search with an explicit stack (recursive backtracker).
///
/// Starts at `(0, 0)` unless `start_x`/`start_y` are given.
#[derive(Debug)]
pub struct DepthFirstSearch;

impl MazeGenerator for DepthFirstSearch {
    fn generate(
        &self,
        size: Dims,
        rng: &mut Random,
        params: &Params,
    ) -> Result<Grid, GenerationError> {
        let mut grid = Grid::from_size(size)?;
        let start = start_cell(params, &grid, rng, Some(Dims::ZERO))?;

        let mut stack = Vec::with_capacity(grid.cell_count());
        grid.visit(start);
        stack.push(start);

        while let Some(&current) = stack.last() {
            let mut walls = CellWall::get_in_order();
            walls.shuffle(rng);

            let next = walls.into_iter().find_map(|wall| {
                grid.neighbor(current, wall)
                    .filter(|&next| !grid.is_visited(next))
                    .map(|next| (wall, next))
            });

            match next {
                Some((wall, next)) => {
                    grid.open_passage(current, wall);
                    grid.visit(next);
                    stack.push(next);
                }
                None => {
                    stack.pop();
                }
            }
        }

        Ok(grid)
    }
}
