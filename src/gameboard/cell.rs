use std::fmt;

use crate::dims::Dims;

use CellWall::*;

/// One of the four walls of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWall {
    North,
    East,
    South,
    West,
}

impl CellWall {
    /// All walls in the enumeration order used across the crate.
    pub const fn get_in_order() -> [CellWall; 4] {
        [North, East, South, West]
    }

    /// Bit of this wall in a [`Cell`] wall mask.
    pub const fn bit(self) -> u8 {
        match self {
            North => 0b0001,
            East => 0b0010,
            South => 0b0100,
            West => 0b1000,
        }
    }

    pub const fn to_coord(self) -> Dims {
        match self {
            North => Dims(0, -1),
            East => Dims(1, 0),
            South => Dims(0, 1),
            West => Dims(-1, 0),
        }
    }

    pub const fn reverse_wall(self) -> CellWall {
        match self {
            North => South,
            East => West,
            South => North,
            West => East,
        }
    }
}

impl fmt::Display for CellWall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            North => "north",
            East => "east",
            South => "south",
            West => "west",
        };
        f.write_str(name)
    }
}

/// Single maze cell.
///
/// Walls are kept in a 4-bit mask, a set bit means the wall is still standing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    walls: u8,
    visited: bool,
}

impl Cell {
    pub const ALL_WALLS: u8 = 0b1111;

    pub fn new() -> Cell {
        Cell {
            walls: Self::ALL_WALLS,
            visited: false,
        }
    }

    pub fn walls(&self) -> u8 {
        self.walls
    }

    pub fn get_wall(&self, wall: CellWall) -> bool {
        self.walls & wall.bit() != 0
    }

    pub fn is_open(&self, wall: CellWall) -> bool {
        !self.get_wall(wall)
    }

    pub fn is_closed(&self, wall: CellWall) -> bool {
        self.get_wall(wall)
    }

    /// Number of open passages leading out of this cell.
    pub fn open_count(&self) -> u32 {
        (Self::ALL_WALLS & !self.walls).count_ones()
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn remove_wall(&mut self, wall: CellWall) {
        self.walls &= !wall.bit();
    }

    pub(crate) fn visit(&mut self) {
        self.visited = true;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new()
    }
}
