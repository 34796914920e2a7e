pub mod cell;
pub mod grid;

pub use cell::{Cell, CellWall};
pub use grid::Grid;

use thiserror::Error;

use crate::dims::Dims;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid size {0:?}, both dimensions must be positive")]
    InvalidSize(Dims),
    #[error("expected {expected} wall masks, got {got}")]
    MaskCountMismatch { expected: usize, got: usize },
    #[error("passage {wall} of cell {pos:?} leads outside of the grid")]
    OpenBoundary { pos: Dims, wall: CellWall },
    #[error("passage {wall} of cell {pos:?} is closed on the other side")]
    AsymmetricWall { pos: Dims, wall: CellWall },
}
