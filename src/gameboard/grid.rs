use std::{collections::VecDeque, fmt};

use smallvec::SmallVec;

use super::{Cell, CellWall, GridError};
use crate::{array::Array2D, dims::Dims};

use CellWall::*;

/// Rectangular board of cells.
///
/// Every grid starts with all walls closed. Passages are only ever opened, and always on both
/// sides at once, so the wall masks of two neighbouring cells never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: Array2D<Cell>,
}

impl Grid {
    pub fn new(rows: i32, cols: i32) -> Result<Grid, GridError> {
        Self::from_size(Dims(cols, rows))
    }

    /// Creates a closed grid of `size.0` columns and `size.1` rows.
    pub fn from_size(size: Dims) -> Result<Grid, GridError> {
        if !size.all_positive() {
            return Err(GridError::InvalidSize(size));
        }

        let cells = Array2D::new_dims(Cell::new(), size).ok_or(GridError::InvalidSize(size))?;
        Ok(Grid { cells })
    }

    /// Rebuilds a grid from a row-major table of wall masks, as returned by [`Grid::wall_masks`].
    ///
    /// The table must describe a consistent board: no passage may lead outside of the grid and
    /// both sides of every passage must be open.
    pub fn from_wall_masks(rows: i32, cols: i32, masks: &[u8]) -> Result<Grid, GridError> {
        let mut grid = Self::new(rows, cols)?;
        if masks.len() != grid.cell_count() {
            return Err(GridError::MaskCountMismatch {
                expected: grid.cell_count(),
                got: masks.len(),
            });
        }

        for (idx, &mask) in masks.iter().enumerate() {
            for wall in CellWall::get_in_order() {
                if mask & wall.bit() == 0 {
                    grid.cells[idx].remove_wall(wall);
                }
            }
        }

        for pos in Dims::iter_fill(Dims::ZERO, grid.size()) {
            for wall in CellWall::get_in_order() {
                if !grid.is_open(pos, wall) {
                    continue;
                }

                match grid.neighbor(pos, wall) {
                    None => return Err(GridError::OpenBoundary { pos, wall }),
                    Some(other) if !grid.is_open(other, wall.reverse_wall()) => {
                        return Err(GridError::AsymmetricWall { pos, wall })
                    }
                    Some(_) => {}
                }
            }
        }

        Ok(grid)
    }

    /// Size as `Dims(cols, rows)`.
    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn rows(&self) -> usize {
        self.cells.height()
    }

    pub fn cols(&self) -> usize {
        self.cells.width()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        self.cells.dim_to_idx(pos).is_some()
    }

    /// Flattened cell id, `y * cols + x`.
    pub fn index_of(&self, pos: Dims) -> Option<usize> {
        self.cells.dim_to_idx(pos)
    }

    pub fn pos_of(&self, idx: usize) -> Option<Dims> {
        self.cells.idx_to_dim(idx)
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn wall_mask(&self, pos: Dims) -> Option<u8> {
        self.get_cell(pos).map(Cell::walls)
    }

    /// Read-only snapshot of every wall mask, row-major.
    pub fn wall_masks(&self) -> Array2D<u8> {
        self.cells.map(Cell::walls)
    }

    /// Returns `true` if there is a passage from `pos` in direction `wall`.
    ///
    /// Cells outside of the grid have no passages.
    pub fn is_open(&self, pos: Dims, wall: CellWall) -> bool {
        self.get_cell(pos).is_some_and(|cell| cell.is_open(wall))
    }

    /// Neighbouring position in direction `wall`, if it lies inside the grid.
    pub fn neighbor(&self, pos: Dims, wall: CellWall) -> Option<Dims> {
        let next = pos + wall.to_coord();
        (self.is_in_bounds(pos) && self.is_in_bounds(next)).then_some(next)
    }

    /// All in-bounds neighbours, walls or not, in N, E, S, W order.
    pub fn neighbors(&self, pos: Dims) -> SmallVec<[(CellWall, Dims); 4]> {
        CellWall::get_in_order()
            .into_iter()
            .filter_map(|wall| self.neighbor(pos, wall).map(|next| (wall, next)))
            .collect()
    }

    /// Neighbours reachable through an open passage, in N, E, S, W order.
    pub fn open_neighbors(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        CellWall::get_in_order()
            .into_iter()
            .filter(|&wall| self.is_open(pos, wall))
            .filter_map(|wall| self.neighbor(pos, wall))
            .collect()
    }

    /// Returns the wall between two cells, `None` if they are not adjacent.
    pub fn which_wall_between(cell: Dims, cell2: Dims) -> Option<CellWall> {
        match (cell2.0 - cell.0, cell2.1 - cell.1) {
            (0, -1) => Some(North),
            (1, 0) => Some(East),
            (0, 1) => Some(South),
            (-1, 0) => Some(West),
            _ => None,
        }
    }

    /// Number of open passages, each counted once.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| cell.open_count() as usize)
            .sum::<usize>()
            / 2
    }

    /// Number of cells reachable from `from`, including `from` itself.
    pub fn reachable_count(&self, from: Dims) -> usize {
        let Some(start) = self.index_of(from) else {
            return 0;
        };

        let mut seen = vec![false; self.cell_count()];
        let mut queue = VecDeque::from([from]);
        seen[start] = true;
        let mut count = 0;

        while let Some(pos) = queue.pop_front() {
            count += 1;
            for next in self.open_neighbors(pos) {
                let Some(idx) = self.index_of(next) else {
                    continue;
                };
                if !seen[idx] {
                    seen[idx] = true;
                    queue.push_back(next);
                }
            }
        }

        count
    }

    pub fn is_connected(&self) -> bool {
        self.reachable_count(Dims::ZERO) == self.cell_count()
    }

    /// Connected and acyclic, i.e. the passages form a spanning tree.
    pub fn is_perfect(&self) -> bool {
        self.passage_count() + 1 == self.cell_count() && self.is_connected()
    }

    /// Opens the passage from `pos` in direction `wall` on both sides.
    ///
    /// Returns `false` and leaves the grid untouched if the neighbour is out of bounds.
    pub(crate) fn open_passage(&mut self, pos: Dims, wall: CellWall) -> bool {
        let Some(next) = self.neighbor(pos, wall) else {
            return false;
        };

        self.cells[pos].remove_wall(wall);
        self.cells[next].remove_wall(wall.reverse_wall());
        true
    }

    pub(crate) fn visit(&mut self, pos: Dims) {
        self.cells[pos].visit();
    }

    pub fn is_visited(&self, pos: Dims) -> bool {
        self.get_cell(pos).is_some_and(Cell::is_visited)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Dims(w, h) = self.size();

        for _ in 0..w {
            f.write_str("+---")?;
        }
        writeln!(f, "+")?;

        for y in 0..h {
            f.write_str("|")?;
            for x in 0..w {
                let east = if self.is_open(Dims(x, y), East) { " " } else { "|" };
                write!(f, "   {}", east)?;
            }
            writeln!(f)?;

            for x in 0..w {
                let south = if self.is_open(Dims(x, y), South) { "   " } else { "---" };
                write!(f, "+{}", south)?;
            }
            writeln!(f, "+")?;
        }

        Ok(())
    }
}
