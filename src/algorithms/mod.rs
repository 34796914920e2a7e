mod aldous_broder;
mod depth_first_search;
mod ellers;
mod rnd_kruskals;
mod rnd_prims;
pub mod types;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    dims::Dims,
    gameboard::{Grid, GridError},
    random::{self, Random},
};

pub use aldous_broder::AldousBroder;
pub use depth_first_search::DepthFirstSearch;
pub use ellers::Ellers;
pub use rnd_kruskals::{candidate_edges, Edge, RndKruskals};
pub use rnd_prims::RndPrims;
pub use types::*;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("start cell {0:?} is outside of the maze")]
    InvalidStart(Dims),
    #[error("random walk did not visit every cell within {0} steps")]
    StepLimitExceeded(usize),
}

/// Carves a perfect maze into a fresh grid.
///
/// Implementations must only draw randomness from `rng`, so that equal seeds produce equal
/// mazes.
pub trait MazeGenerator: fmt::Debug + Sync + Send {
    fn generate(&self, size: Dims, rng: &mut Random, params: &Params)
        -> Result<Grid, GenerationError>;
}

/// All available generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[default]
    DepthFirstSearch,
    RndKruskals,
    RndPrims,
    Ellers,
    AldousBroder,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::DepthFirstSearch,
        Algorithm::RndKruskals,
        Algorithm::RndPrims,
        Algorithm::Ellers,
        Algorithm::AldousBroder,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::DepthFirstSearch => "depth-first-search",
            Algorithm::RndKruskals => "rnd-kruskals",
            Algorithm::RndPrims => "rnd-prims",
            Algorithm::Ellers => "ellers",
            Algorithm::AldousBroder => "aldous-broder",
        }
    }

    pub fn generator(self) -> Box<dyn MazeGenerator> {
        match self {
            Algorithm::DepthFirstSearch => Box::new(DepthFirstSearch),
            Algorithm::RndKruskals => Box::new(RndKruskals),
            Algorithm::RndPrims => Box::new(RndPrims),
            Algorithm::Ellers => Box::new(Ellers),
            Algorithm::AldousBroder => Box::new(AldousBroder),
        }
    }

    pub fn generate(
        self,
        size: Dims,
        rng: &mut Random,
        params: &Params,
    ) -> Result<Grid, GenerationError> {
        log::debug!("Generating {}x{} maze with {}", size.0, size.1, self);
        let grid = self.generator().generate(size, rng, params)?;
        log::debug!(
            "Generated maze with {} passages over {} cells",
            grid.passage_count(),
            grid.cell_count()
        );

        Ok(grid)
    }

    /// Generates a `rows` x `cols` maze with default parameters.
    pub fn produce(self, rows: i32, cols: i32, seed: u64) -> Result<Grid, GenerationError> {
        self.generate(Dims(cols, rows), &mut random::seeded(seed), &Params::default())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown maze algorithm '{0}'")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let algorithm = match s.to_ascii_lowercase().as_str() {
            "depth-first-search" | "dfs" | "backtracker" => Algorithm::DepthFirstSearch,
            "rnd-kruskals" | "kruskal" | "kruskals" => Algorithm::RndKruskals,
            "rnd-prims" | "prim" | "prims" => Algorithm::RndPrims,
            "ellers" | "eller" => Algorithm::Ellers,
            "aldous-broder" | "aldous" => Algorithm::AldousBroder,
            _ => return Err(UnknownAlgorithm(s.to_owned())),
        };

        Ok(algorithm)
    }
}

/// Start cell from the `start_x` and `start_y` params.
///
/// Falls back to `default`, or to a random cell if there is no default.
pub(crate) fn start_cell(
    params: &Params,
    grid: &Grid,
    rng: &mut Random,
    default: Option<Dims>,
) -> Result<Dims, GenerationError> {
    let x = params.parsed_opt_or_warn::<i32>("start_x");
    let y = params.parsed_opt_or_warn::<i32>("start_y");

    let start = match (x, y, default) {
        (None, None, Some(default)) => default,
        (None, None, None) => Dims(
            random::index(rng, grid.cols()) as i32,
            random::index(rng, grid.rows()) as i32,
        ),
        (x, y, _) => Dims(x.unwrap_or(0), y.unwrap_or(0)),
    };

    if !grid.is_in_bounds(start) {
        return Err(GenerationError::InvalidStart(start));
    }

    Ok(start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!("DFS".parse::<Algorithm>(), Ok(Algorithm::DepthFirstSearch));
        assert_eq!(
            "wilson".parse::<Algorithm>(),
            Err(UnknownAlgorithm("wilson".to_owned()))
        );
    }

    #[test]
    fn invalid_size_is_reported() {
        for algorithm in Algorithm::ALL {
            assert_eq!(
                algorithm.produce(0, 4, 1),
                Err(GenerationError::Grid(GridError::InvalidSize(Dims(4, 0))))
            );
            assert!(algorithm.produce(3, -2, 1).is_err());
        }
    }

    #[test]
    fn single_cell_has_no_passages() {
        for algorithm in Algorithm::ALL {
            let grid = algorithm.produce(1, 1, 3).unwrap();
            assert_eq!(grid.passage_count(), 0);
            assert!(grid.is_perfect());
        }
    }

    #[test]
    fn start_cell_from_params() {
        let grid = Grid::new(3, 3).unwrap();
        let mut rng = random::seeded(0);

        let mut params = Params::new();
        params.set("start_x", 2);
        params.set("start_y", 1);
        assert_eq!(start_cell(&params, &grid, &mut rng, None), Ok(Dims(2, 1)));

        params.set("start_y", 5);
        assert_eq!(
            start_cell(&params, &grid, &mut rng, None),
            Err(GenerationError::InvalidStart(Dims(2, 5)))
        );

        let params = Params::new();
        assert_eq!(
            start_cell(&params, &grid, &mut rng, Some(Dims(1, 1))),
            Ok(Dims(1, 1))
        );
        let random = start_cell(&params, &grid, &mut rng, None).unwrap();
        assert!(grid.is_in_bounds(random));
    }
}
