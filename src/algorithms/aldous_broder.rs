use super::{start_cell, GenerationError, MazeGenerator, Params, Random};
use crate::{
    dims::*,
    gameboard::{CellWall, Grid},
    random,
};

/// Aldous-Broder random walk, samples uniformly among all spanning trees.
///
/// The walk has no step bound by default, its expected length grows faster than the cell
/// count. Set `max_steps` to fail with [`GenerationError::StepLimitExceeded`] instead.
#[derive(Debug)]
pub struct AldousBroder;

impl MazeGenerator for AldousBroder {
    fn generate(
        &self,
        size: Dims,
        rng: &mut Random,
        params: &Params,
    ) -> Result<Grid, GenerationError> {
        let mut grid = Grid::from_size(size)?;
        let cell_count = grid.cell_count();
        let max_steps = params
            .parsed_opt_or_warn::<usize>("max_steps")
            .map(|steps| steps.max(cell_count));

        let mut current = start_cell(params, &grid, rng, None)?;
        grid.visit(current);

        let walls = CellWall::get_in_order();
        let mut visited = 1;
        let mut steps = 0usize;

        while visited < cell_count {
            if max_steps.is_some_and(|max| steps >= max) {
                log::warn!(
                    "Random walk gave up after {} steps, {} cells left",
                    steps,
                    cell_count - visited
                );
                return Err(GenerationError::StepLimitExceeded(steps));
            }
            steps += 1;

            let wall = walls[random::index(rng, walls.len())];
            let Some(next) = grid.neighbor(current, wall) else {
                continue;
            };

            if !grid.is_visited(next) {
                grid.open_passage(current, wall);
                grid.visit(next);
                visited += 1;
            }

            current = next;
        }

        log::trace!("Random walk covered {} cells in {} steps", cell_count, steps);

        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random;

    #[test]
    fn builds_spanning_tree() {
        let grid = AldousBroder
            .generate(Dims(6, 5), &mut random::seeded(21), &Params::new())
            .unwrap();
        assert!(grid.is_perfect());
    }

    #[test]
    fn step_limit_is_enforced() {
        // limit is raised to the cell count, which a walk from the corner never covers in time
        let params = Params::new()
            .with("max_steps", 1)
            .with("start_x", 0)
            .with("start_y", 0);
        let result = AldousBroder.generate(Dims(20, 20), &mut random::seeded(4), &params);
        assert_eq!(result, Err(GenerationError::StepLimitExceeded(400)));
    }

    #[test]
    fn generous_step_limit_is_fine() {
        let params = Params::new().with("max_steps", 1_000_000);
        let grid = AldousBroder
            .generate(Dims(4, 4), &mut random::seeded(4), &params)
            .unwrap();
        assert!(grid.is_perfect());
    }
}
