use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use grid_util::grid::{BoolGrid, Grid};
use grid_util::point::Point;

use crate::maze_grid::MazeGrid;

/// Cooperative cancellation flag shared between a supervisor and the search
/// it spawned. Cancelling is idempotent; once set the flag never resets.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Terminal state of one search execution.
///
/// [Cancelled](SearchOutcome::Cancelled) is internal to the engine and its
/// supervisor: a superseded execution ends there and nothing is delivered for
/// it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Shortest path from source to destination, both inclusive.
    PathFound(Vec<Point>),
    /// Source and destination lie in different connected regions.
    NoPathExists,
    /// The cancellation token was observed before the search finished.
    Cancelled,
}

/// Neighbour probe order: up, left, right, down. Fixing this makes the choice
/// among equally short paths deterministic, which keeps repeated queries
/// reproducible.
const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Computes the shortest 4-directional path between two free cells with a
/// plain breadth-first search. The first dequeue of the destination is the
/// shortest path since the frontier expands in non-decreasing distance order.
///
/// Each queue entry carries its full path from the source. That costs more
/// memory than parent-pointer reconstruction but stays simple, and grids are
/// bounded at 150x150 cells.
///
/// The token is checked on every dequeue, before every neighbour probe and
/// once more on frontier exhaustion, so a cancelled search winds down within
/// one node expansion and never reports a definite answer. An out-of-bounds
/// or blocked endpoint yields [NoPathExists](SearchOutcome::NoPathExists):
/// no path through free cells can touch it.
/// [SearchSupervisor](crate::SearchSupervisor) refuses such requests before
/// an execution ever starts.
pub fn shortest_path(
    grid: &MazeGrid,
    source: Point,
    destination: Point,
    cancel: &CancelToken,
) -> SearchOutcome {
    if !grid.is_free(source) || !grid.is_free(destination) {
        return SearchOutcome::NoPathExists;
    }

    let mut visited = BoolGrid::new(grid.width(), grid.height(), false);
    visited.set(source.x as usize, source.y as usize, true);

    let mut frontier: VecDeque<Vec<Point>> = VecDeque::new();
    frontier.push_back(vec![source]);

    while let Some(path) = frontier.pop_front() {
        if cancel.is_cancelled() {
            return SearchOutcome::Cancelled;
        }
        // Invariant: paths are pushed non-empty.
        let cell = *path.last().unwrap();
        if cell == destination {
            return SearchOutcome::PathFound(path);
        }
        for (dx, dy) in NEIGHBOUR_OFFSETS {
            if cancel.is_cancelled() {
                return SearchOutcome::Cancelled;
            }
            let next = Point::new(cell.x + dx, cell.y + dy);
            if grid.is_free(next) && !visited.get(next.x as usize, next.y as usize) {
                visited.set(next.x as usize, next.y as usize, true);
                let mut extended = path.clone();
                extended.push(next);
                frontier.push_back(extended);
            }
        }
    }

    // The token can be set between the last neighbour probe and loop exit;
    // a superseded execution must stay silent even then.
    if cancel.is_cancelled() {
        SearchOutcome::Cancelled
    } else {
        SearchOutcome::NoPathExists
    }
}
