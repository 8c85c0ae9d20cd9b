//! Maze generation configuration.
//!
//! An explicitly constructed value that callers create, pass around and
//! persist themselves. Loading and saving go through TOML so a frontend can
//! keep its last-used maze parameters between sessions without any global
//! settings store.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Parameters for generating a [MazeGrid](crate::MazeGrid).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Grid width in cells.
    #[serde(default = "default_side")]
    pub width: usize,

    /// Grid height in cells.
    #[serde(default = "default_side")]
    pub height: usize,

    /// Probability that a cell is generated blocked. Nominal: the exact
    /// per-cell distribution is a generation policy, not a contract.
    #[serde(default = "default_density")]
    pub density: f64,
}

fn default_side() -> usize {
    150
}

fn default_density() -> f64 {
    crate::maze_grid::DEFAULT_DENSITY
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: default_side(),
            height: default_side(),
            density: default_density(),
        }
    }
}

impl MazeConfig {
    /// Loads a configuration from a TOML file. Missing fields fall back to
    /// their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves the configuration as TOML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}
