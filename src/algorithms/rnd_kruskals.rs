use rand::seq::SliceRandom as _;

use super::{GenerationError, MazeGenerator, Params, Random};
use crate::{
    dims::*,
    disjoint_set::DisjointSet,
    gameboard::{CellWall, Grid},
};

use CellWall::*;

/// Unordered pair of adjacent cell ids, the lower id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge(pub usize, pub usize);

/// Every wall between two in-bounds cells, each exactly once.
pub fn candidate_edges(grid: &Grid) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(grid.cell_count() * 2);
    for pos in Dims::iter_fill(Dims::ZERO, grid.size()) {
        for wall in [East, South] {
            if let (Some(from), Some(to)) = (
                grid.index_of(pos),
                grid.neighbor(pos, wall).and_then(|next| grid.index_of(next)),
            ) {
                edges.push(Edge(from, to));
            }
        }
    }

    edges
}

/// Randomized Kruskal's algorithm over a shuffled edge list.
#[derive(Debug)]
pub struct RndKruskals;

impl MazeGenerator for RndKruskals {
    fn generate(
        &self,
        size: Dims,
        rng: &mut Random,
        _params: &Params,
    ) -> Result<Grid, GenerationError> {
        let mut grid = Grid::from_size(size)?;

        let mut edges = candidate_edges(&grid);
        edges.shuffle(rng);

        let mut sets = DisjointSet::new(grid.cell_count());
        for Edge(from, to) in edges {
            if sets.component_count() == 1 {
                break;
            }

            if !sets.union(from, to) {
                continue;
            }

            let (Some(from), Some(to)) = (grid.pos_of(from), grid.pos_of(to)) else {
                continue;
            };
            if let Some(wall) = Grid::which_wall_between(from, to) {
                grid.open_passage(from, wall);
            }
        }

        Ok(grid)
    }
}
