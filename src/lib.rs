//! # maze_search
//!
//! A cancellable shortest-path search over randomly generated obstacle
//! grids, built for interactive use: as endpoints move around (clicked or
//! merely hovered), every new query supersedes the previous one and the
//! superseded search winds down before its successor starts.
//!
//! The crate has three parts:
//! - [MazeGrid]: an immutable obstacle matrix, regenerated as a whole.
//! - [shortest_path]: an unweighted breadth-first search with a fixed
//!   neighbour order and a cooperative [CancelToken], so equal-length paths
//!   resolve deterministically and an obsolete search stops mid-run.
//! - [SearchSupervisor]: single-flight sequencing of search executions with
//!   cancel-and-wait semantics and a single outcome channel.
//!
//! ```no_run
//! use grid_util::point::Point;
//! use maze_search::{MazeConfig, MazeGrid, SearchOutcome, SearchSupervisor};
//!
//! let (mut supervisor, outcomes) = SearchSupervisor::new();
//! supervisor.install_grid(MazeGrid::from_config(&MazeConfig::default()).unwrap());
//! supervisor.request(Point::new(0, 0), Point::new(9, 9));
//! match outcomes.recv().unwrap() {
//!     SearchOutcome::PathFound(path) => println!("{} cells", path.len()),
//!     SearchOutcome::NoPathExists => println!("walled off"),
//!     SearchOutcome::Cancelled => unreachable!("never delivered"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod maze_grid;
pub mod search;
pub mod supervisor;

pub use config::MazeConfig;
pub use error::{MazeError, Result};
pub use maze_grid::{MazeGrid, DEFAULT_DENSITY, MAX_SIDE, MIN_SIDE};
pub use search::{shortest_path, CancelToken, SearchOutcome};
pub use supervisor::SearchSupervisor;
