//! Shortest path search over a carved [`Grid`].
//!
//! [`solve`] is an A* search with the Manhattan distance as heuristic. Since every move costs
//! one step and changes the Manhattan distance by at most one, the heuristic is consistent and
//! the first time the goal is taken from the queue its path is a shortest one.
//!
//! Parents are kept in a flat array indexed by cell id, the path is rebuilt from it at the end.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, VecDeque},
    slice,
};

use thiserror::Error;

use crate::{array::Array2D, dims::Dims, gameboard::Grid};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    #[error("cell {0:?} is outside of the maze")]
    OutOfBounds(Dims),
}

/// Cells from start to goal, both included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Path {
    cells: Vec<Dims>,
}

impl Path {
    pub fn cells(&self) -> &[Dims] {
        &self.cells
    }

    /// Number of cells on the path.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves needed to walk the path.
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Dims> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<Dims> {
        self.cells.last().copied()
    }

    pub fn iter(&self) -> slice::Iter<'_, Dims> {
        self.cells.iter()
    }

    /// Checks that consecutive cells are adjacent and joined by an open passage.
    pub fn is_valid_in(&self, grid: &Grid) -> bool {
        self.cells.iter().all(|&pos| grid.is_in_bounds(pos))
            && self.cells.windows(2).all(|pair| {
                Grid::which_wall_between(pair[0], pair[1])
                    .is_some_and(|wall| grid.is_open(pair[0], wall))
            })
    }

    pub fn into_vec(self) -> Vec<Dims> {
        self.cells
    }

    fn from_parents(grid: &Grid, parents: &[Option<usize>], goal: usize) -> Self {
        let mut cells = Vec::new();
        let mut current = Some(goal);
        while let Some(idx) = current {
            cells.extend(grid.pos_of(idx));
            current = parents[idx];
        }

        cells.reverse();
        Path { cells }
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Dims;
    type IntoIter = slice::Iter<'a, Dims>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn endpoint(grid: &Grid, pos: Dims) -> Result<usize, SolveError> {
    grid.index_of(pos).ok_or(SolveError::OutOfBounds(pos))
}

/// Finds a shortest path from `start` to `goal` using A*.
///
/// Returns `Ok(None)` if the goal can't be reached. Neighbours are expanded in N, E, S, W
/// order and ties on the estimated cost are settled first in, first out, so the result is
/// deterministic.
pub fn solve(grid: &Grid, start: Dims, goal: Dims) -> Result<Option<Path>, SolveError> {
    let start_idx = endpoint(grid, start)?;
    let goal_idx = endpoint(grid, goal)?;

    let cell_count = grid.cell_count();
    let mut cost = vec![u32::MAX; cell_count];
    let mut parents = vec![None; cell_count];
    let mut closed = vec![false; cell_count];

    // (estimate, insertion order, cell id)
    let mut open = BinaryHeap::new();
    let mut pushed = 0u64;

    cost[start_idx] = 0;
    open.push(Reverse((start.manhattan(goal), pushed, start_idx)));

    while let Some(Reverse((_, _, current))) = open.pop() {
        if closed[current] {
            continue;
        }
        closed[current] = true;

        if current == goal_idx {
            log::trace!("Goal reached at cost {}", cost[goal_idx]);
            return Ok(Some(Path::from_parents(grid, &parents, goal_idx)));
        }

        let Some(pos) = grid.pos_of(current) else {
            continue;
        };

        for next in grid.open_neighbors(pos) {
            let Some(next_idx) = grid.index_of(next) else {
                continue;
            };
            if closed[next_idx] {
                continue;
            }

            let new_cost = cost[current] + 1;
            if new_cost < cost[next_idx] {
                cost[next_idx] = new_cost;
                parents[next_idx] = Some(current);
                pushed += 1;
                open.push(Reverse((new_cost + next.manhattan(goal), pushed, next_idx)));
            }
        }
    }

    Ok(None)
}

/// Breadth-first step counts from `from` to every cell, `None` for unreachable ones.
pub fn distances(grid: &Grid, from: Dims) -> Result<Array2D<Option<usize>>, SolveError> {
    let (dist, _) = breadth_first(grid, from)?;

    let mut out = Array2D::new(None, grid.cols(), grid.rows());
    for (idx, steps) in dist.into_iter().enumerate() {
        out[idx] = steps;
    }

    Ok(out)
}

/// Reference solver, breadth-first instead of A*.
pub fn solve_bfs(grid: &Grid, start: Dims, goal: Dims) -> Result<Option<Path>, SolveError> {
    let goal_idx = endpoint(grid, goal)?;
    let (dist, parents) = breadth_first(grid, start)?;

    Ok(dist[goal_idx].map(|_| Path::from_parents(grid, &parents, goal_idx)))
}

/// Step counts and parents of every cell, both indexed by cell id.
#[allow(clippy::type_complexity)]
fn breadth_first(
    grid: &Grid,
    from: Dims,
) -> Result<(Vec<Option<usize>>, Vec<Option<usize>>), SolveError> {
    let from_idx = endpoint(grid, from)?;

    let mut dist = vec![None; grid.cell_count()];
    let mut parents = vec![None; grid.cell_count()];
    let mut queue = VecDeque::from([(from_idx, 0)]);
    dist[from_idx] = Some(0);

    while let Some((current, here)) = queue.pop_front() {
        let Some(pos) = grid.pos_of(current) else {
            continue;
        };

        for next in grid.open_neighbors(pos) {
            let Some(next_idx) = grid.index_of(next) else {
                continue;
            };
            if dist[next_idx].is_none() {
                dist[next_idx] = Some(here + 1);
                parents[next_idx] = Some(current);
                queue.push_back((next_idx, here + 1));
            }
        }
    }

    Ok((dist, parents))
}
