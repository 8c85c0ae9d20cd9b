use core::fmt;

use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;
use log::info;
use rand::Rng;

use crate::config::MazeConfig;
use crate::error::{MazeError, Result};

/// Smallest supported side length of a generated grid.
pub const MIN_SIDE: usize = 10;
/// Largest supported side length of a generated grid.
pub const MAX_SIDE: usize = 150;
/// Default probability that a generated cell is blocked.
pub const DEFAULT_DENSITY: f64 = 0.3;

/// [MazeGrid] holds the obstacle occupancy of one maze generation as a
/// [BoolGrid] in which [true] marks a blocked cell and [false] a free one.
///
/// A grid is immutable once constructed: regenerating the maze produces a
/// brand-new value, so a search that still holds a reference to the old grid
/// keeps reading consistent state until it is torn down.
#[derive(Clone, Debug)]
pub struct MazeGrid {
    grid: BoolGrid,
}

impl MazeGrid {
    /// Generates a `width` x `height` grid in which each cell is
    /// independently blocked with probability `density`, drawing randomness
    /// from [rand::thread_rng].
    ///
    /// Fails with [MazeError::InvalidDimensions] if either side falls outside
    /// [MIN_SIDE]..=[MAX_SIDE] and with [MazeError::InvalidDensity] if
    /// `density` is not a probability.
    pub fn generate(width: usize, height: usize, density: f64) -> Result<MazeGrid> {
        Self::generate_with_rng(width, height, density, &mut rand::thread_rng())
    }

    /// Same as [generate](Self::generate) with a caller-supplied random
    /// number generator, which makes seeded generation possible in tests.
    pub fn generate_with_rng<R: Rng>(
        width: usize,
        height: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<MazeGrid> {
        Self::validate_dimensions(width, height)?;
        if !(0.0..=1.0).contains(&density) {
            return Err(MazeError::InvalidDensity(density));
        }
        let mut grid = BoolGrid::new(width, height, false);
        for y in 0..height {
            for x in 0..width {
                grid.set(x, y, rng.gen_bool(density));
            }
        }
        info!("Generated {}x{} grid with density {}", width, height, density);
        Ok(MazeGrid { grid })
    }

    /// Generates a grid from a [MazeConfig].
    pub fn from_config(config: &MazeConfig) -> Result<MazeGrid> {
        Self::generate(config.width, config.height, config.density)
    }

    /// Builds a grid from rows of `'#'` (blocked) and `'.'` (free)
    /// characters. All rows must have the same length and the resulting
    /// dimensions are validated like generated ones.
    pub fn from_rows(rows: &[&str]) -> Result<MazeGrid> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        Self::validate_dimensions(width, height)?;
        if rows.iter().any(|row| row.chars().count() != width) {
            return Err(MazeError::RaggedRows);
        }
        let mut grid = BoolGrid::new(width, height, false);
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.chars().enumerate() {
                grid.set(x, y, cell == '#');
            }
        }
        Ok(MazeGrid { grid })
    }

    fn validate_dimensions(width: usize, height: usize) -> Result<()> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&width) || !(MIN_SIDE..=MAX_SIDE).contains(&height) {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(())
    }

    /// Checks that a cell is inside the grid and not blocked. Out-of-bounds
    /// cells count as blocked.
    pub fn is_free(&self, cell: Point) -> bool {
        self.in_bounds(cell) && !self.grid.get(cell.x as usize, cell.y as usize)
    }

    pub fn in_bounds(&self, cell: Point) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && self.grid.index_in_bounds(cell.x as usize, cell.y as usize)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Number of free cells, mostly of interest for density checks and demos.
    pub fn free_count(&self) -> usize {
        let mut count = 0;
        for y in 0..self.height() {
            for x in 0..self.width() {
                if !self.grid.get(x, y) {
                    count += 1;
                }
            }
        }
        count
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                write!(f, "{}", if self.grid.get(x, y) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
