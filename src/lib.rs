//! Perfect maze generation and solving.
//!
//! A maze is a [`Grid`](gameboard::Grid) of cells whose passages form a spanning tree. It is
//! carved by one of the generators in [`algorithms`] from an explicitly seeded
//! [`Random`](random::Random), and solved with the A* search in [`solver`].
//!
//! ```
//! use pmaze::{algorithms::Algorithm, dims::Dims, solver};
//!
//! let grid = Algorithm::RndKruskals.produce(8, 12, 42).unwrap();
//! assert!(grid.is_perfect());
//!
//! let path = solver::solve(&grid, Dims(0, 0), Dims(11, 7)).unwrap().unwrap();
//! assert_eq!(path.goal(), Some(Dims(11, 7)));
//! ```

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod disjoint_set;
pub mod gameboard;
pub mod random;
pub mod solver;
