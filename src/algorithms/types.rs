use std::{fmt::Display, str::FromStr};

use hashbrown::HashMap;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::{Algorithm, GenerationError};
use crate::{dims::Dims, gameboard::Grid, random};

/// Parameters for the generators, stored as strings and parsed on use.
///
/// In config files, numbers and booleans are accepted as well and kept in their string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params {
    #[serde(deserialize_with = "stringify_values")]
    map: HashMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Display) {
        self.map.insert(key.into(), value.to_string());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(|s| s.as_str())
    }

    pub fn parsed<T: FromStr>(&self, key: &str) -> Option<Result<T, T::Err>> {
        self.get(key).map(|s| s.parse())
    }

    pub fn parsed_or_warn<T: FromStr>(&self, key: &str, default: T) -> T {
        self.parsed_opt_or_warn(key).unwrap_or(default)
    }

    /// Like [`Params::parsed`], but an unparsable value is logged and treated as missing.
    pub fn parsed_opt_or_warn<T: FromStr>(&self, key: &str) -> Option<T> {
        match self.parsed(key) {
            None => None,
            Some(Ok(v)) => Some(v),
            Some(Err(_)) => {
                log::warn!("Invalid value for parameter '{}', using default value", key);
                None
            }
        }
    }
}

fn stringify_values<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Value {
        Str(String),
        Int(i64),
        Float(f64),
        Bool(bool),
    }

    let raw = HashMap::<String, Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Str(s) => s,
                Value::Int(i) => i.to_string(),
                Value::Float(f) => f.to_string(),
                Value::Bool(b) => b.to_string(),
            };
            (key, value)
        })
        .collect())
}

#[derive(Debug, Error)]
pub enum SpecError {
    #[error("failed to parse maze spec: {0}")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Everything needed to generate one maze.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeSpec {
    pub rows: i32,
    pub cols: i32,

    /// Seed of the maze.
    ///
    /// Used for deterministic generation, a random one is picked if missing.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub algorithm: Algorithm,

    #[serde(default)]
    pub params: Params,
}

impl MazeSpec {
    pub fn new(rows: i32, cols: i32, algorithm: Algorithm) -> Self {
        Self {
            rows,
            cols,
            seed: None,
            algorithm,
            params: Params::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_toml(src: &str) -> Result<Self, SpecError> {
        let spec: MazeSpec = toml::from_str(src)?;
        spec.validate()?;
        Ok(spec)
    }

    pub fn size(&self) -> Dims {
        Dims(self.cols, self.rows)
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        Grid::from_size(self.size())?;
        Ok(())
    }

    /// Generates the maze, returning it together with the seed that was used.
    pub fn generate(&self) -> Result<(Grid, u64), GenerationError> {
        let (mut rng, seed) = random::from_optional_seed(self.seed);
        let grid = self.algorithm.generate(self.size(), &mut rng, &self.params)?;
        Ok((grid, seed))
    }
}
